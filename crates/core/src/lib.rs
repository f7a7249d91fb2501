//! Core types and traits for compartmental epidemic simulation.
//!
//! This crate defines the shared abstractions that solvers and front ends
//! build on:
//!
//! - [`CompartmentModel`] — a pure right-hand side mapping a compartment
//!   state to its instantaneous rates of change
//! - [`CompartmentState`] — the capabilities an ODE state exposes to a
//!   fixed-step solver (advancing, population total, negativity handling)
//! - [`Parameters`] — validated, immutable epidemiological parameters
//! - [`TimeGrid`] — a validated sequence of sample times
//! - [`Sir`] — the classic susceptible-infected-recovered mass-action model
//!
//! All invariants are enforced eagerly at construction: a `Parameters`,
//! `TimeGrid`, or `SirState` value that exists is valid, so solvers never
//! re-validate inputs mid-run.

mod grid;
mod model;
mod parameters;
mod sir;
mod state;

pub use grid::{GridError, TimeGrid};
pub use model::CompartmentModel;
pub use parameters::{ParameterError, Parameters};
pub use sir::{Sir, SirRates, SirState};
pub use state::{CompartmentState, RatesOf};
