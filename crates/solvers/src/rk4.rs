//! Classic fourth-order Runge–Kutta solver for compartmental models.
//!
//! This module integrates a [`CompartmentModel`] over a [`TimeGrid`] with
//! the fixed-step RK4 scheme:
//!
//! ```text
//! k1 = f(y_n)
//! k2 = f(y_n + k1·h/2)
//! k3 = f(y_n + k2·h/2)
//! k4 = f(y_n + k3·h)
//! y_{n+1} = y_n + (h/6)(k1 + 2k2 + 2k3 + k4)
//! ```
//!
//! The grid defines the step sizes directly and no internal subdivision
//! occurs, so results are deterministic and the trajectory length always
//! equals the grid length. RK4's local truncation error is of order `h⁵`
//! (global order `h⁴`): halving the grid spacing reduces the accumulated
//! error by roughly a factor of sixteen.
//!
//! # Example
//!
//! ```
//! use kermack_core::{Parameters, Sir, TimeGrid};
//! use kermack_solvers::rk4;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parameters = Parameters::new(1000.0, 0.3, 0.1)?;
//! let initial = parameters.initial_state(1.0)?;
//! let grid = TimeGrid::evenly_spaced(0.0, 100.0, 101)?;
//!
//! let trajectory = rk4::solve(
//!     &Sir::new(parameters),
//!     initial,
//!     &grid,
//!     rk4::Tolerances::default(),
//! )?;
//!
//! assert_eq!(trajectory.len(), grid.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod tolerances;
mod trajectory;

pub use error::Error;
pub use tolerances::Tolerances;
pub use trajectory::{Sample, Trajectory};

use std::ops::{Add, Mul};

use kermack_core::{CompartmentModel, CompartmentState, RatesOf, TimeGrid};

/// Integrates a compartmental model over a time grid using fixed-step RK4.
///
/// # Algorithm
///
/// 1. Record `(grid start, initial)` as the first sample, unchanged.
/// 2. For each consecutive pair of grid points:
///    - Evaluate the four RK4 rate samples via the model.
///    - Advance the state by the weighted combination over `h`.
///    - Clamp tolerance-level negative overshoot to zero; fail on anything
///      larger.
///    - Fail if the population total has drifted from the initial total by
///      more than the conservation tolerance.
///    - Record the new sample.
///
/// A single-point grid performs no steps and returns a length-one
/// trajectory. Repeated grid points produce zero-width steps that leave the
/// state unchanged.
///
/// # Errors
///
/// Returns [`Error::NegativeCompartment`] or [`Error::ConservationViolated`]
/// if a step violates the corresponding invariant beyond its tolerance.
/// Both indicate a parameter regime or step size producing numerical
/// instability; the usual remedy is a finer grid. No partial trajectory is
/// returned on failure.
pub fn solve<M>(
    model: &M,
    initial: M::State,
    grid: &TimeGrid,
    tolerances: Tolerances,
) -> Result<Trajectory<M::State>, Error>
where
    M: CompartmentModel,
    M::State: Clone,
    RatesOf<M::State>: Add<Output = RatesOf<M::State>> + Mul<f64, Output = RatesOf<M::State>>,
{
    let reference_total = initial.total();

    let mut trajectory = Trajectory::with_capacity(grid.len());
    trajectory.push(Sample {
        time: grid.start(),
        state: initial.clone(),
    });

    let mut state = initial;

    for window in grid.points().windows(2) {
        let (t_start, t_end) = (window[0], window[1]);
        let h = t_end - t_start;

        let k1 = model.rates(&state);
        let k2 = model.rates(&state.advanced(k1, 0.5 * h));
        let k3 = model.rates(&state.advanced(k2, 0.5 * h));
        let k4 = model.rates(&state.advanced(k3, h));
        let weighted = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);

        let mut next = state.advanced(weighted, h);

        let lowest = next.smallest_compartment();
        if lowest < -tolerances.clamp() {
            return Err(Error::NegativeCompartment {
                time: t_end,
                value: lowest,
                tolerance: tolerances.clamp(),
            });
        }
        if lowest < 0.0 {
            next = next.clamped_non_negative();
        }

        let drift = (next.total() - reference_total).abs();
        let allowed = tolerances.conservation() * reference_total.abs().max(1.0);
        if drift > allowed {
            return Err(Error::ConservationViolated {
                time: t_end,
                drift,
                tolerance: allowed,
            });
        }

        trajectory.push(Sample {
            time: t_end,
            state: next.clone(),
        });
        state = next;
    }

    Ok(trajectory)
}
