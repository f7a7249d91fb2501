//! Fixed-step ODE solvers for compartmental epidemic models.
//!
//! The [`rk4`] module integrates any [`CompartmentModel`] over a
//! [`TimeGrid`] with the classic fourth-order Runge–Kutta scheme, producing
//! an immutable [`rk4::Trajectory`] and enforcing the physical invariants a
//! compartmental model promises: population conservation and non-negative
//! counts.
//!
//! [`CompartmentModel`]: kermack_core::CompartmentModel
//! [`TimeGrid`]: kermack_core::TimeGrid

pub mod rk4;
