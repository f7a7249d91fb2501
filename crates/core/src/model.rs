use crate::state::{CompartmentState, RatesOf};

/// A trait for compartmental epidemic models.
///
/// A `CompartmentModel` is the right-hand side of an ODE system: a pure
/// function from a compartment state to its instantaneous rates of change.
/// Implementations hold only immutable configuration (their parameters), so a
/// single model value can be shared freely across concurrent integration
/// runs.
///
/// This trait is the substitution point for alternative compartment
/// structures.
/// An SEIR model with an exposed compartment, for example, plugs into the
/// same solvers by providing its own state and rates types behind this
/// contract.
pub trait CompartmentModel {
    /// The compartment state this model evolves.
    type State: CompartmentState;

    /// Computes the instantaneous rates of change for a state.
    ///
    /// This function is total over valid states and has no side effects.
    /// For population-conserving models the components of the returned rate
    /// vector sum to zero, up to floating-point rounding.
    fn rates(&self, state: &Self::State) -> RatesOf<Self::State>;
}
