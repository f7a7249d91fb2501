/// A trait for compartment states that can be advanced by a fixed-step
/// ODE solver.
///
/// Implementing this trait gives a solver everything it needs to integrate a
/// state without knowing its compartment structure: how to apply a rate
/// vector over a step, the conserved population total, and how negative
/// numerical overshoot is detected and repaired.
///
/// The associated [`Rates`](CompartmentState::Rates) type is the state's
/// instantaneous rate-of-change vector, produced by a
/// [`CompartmentModel`](crate::CompartmentModel).
/// Solvers that combine several rate samples (Runge–Kutta stages, for
/// example) additionally require `Rates` to implement the standard `Add` and
/// `Mul<f64>` operators.
pub trait CompartmentState: Sized {
    /// The rate-of-change vector for this state.
    type Rates: Copy;

    /// Returns the state advanced by `rates` over a step of width `dt`.
    ///
    /// This is the elementary explicit update `state + rates * dt`, used both
    /// for intermediate solver stages and for the final weighted update.
    #[must_use]
    fn advanced(&self, rates: Self::Rates, dt: f64) -> Self;

    /// The population total across all compartments.
    ///
    /// A valid model conserves this sum along any trajectory, which makes it
    /// the quantity solvers monitor for numerical drift.
    fn total(&self) -> f64;

    /// The smallest compartment value, used to detect negative overshoot.
    fn smallest_compartment(&self) -> f64;

    /// Returns the state with any negative compartment clamped to zero.
    #[must_use]
    fn clamped_non_negative(&self) -> Self;
}

/// Convenience alias for a state's [`Rates`](CompartmentState::Rates) type.
pub type RatesOf<S> = <S as CompartmentState>::Rates;
