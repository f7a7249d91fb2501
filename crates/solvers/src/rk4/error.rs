/// Errors that can occur while configuring or running the RK4 solver.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A compartment dropped below zero by more than the clamp tolerance.
    ///
    /// Small negative excursions are numerical overshoot and are clamped
    /// silently; an excursion this large indicates the step size is too
    /// coarse for the parameter regime.
    #[error(
        "compartment reached {value} at t = {time}, \
         exceeding the clamp tolerance {tolerance}"
    )]
    NegativeCompartment {
        time: f64,
        value: f64,
        tolerance: f64,
    },

    /// The population total drifted from its initial value by more than the
    /// conservation tolerance.
    ///
    /// The run is aborted rather than returning a silently-wrong trajectory;
    /// refining the grid is the usual remedy.
    #[error(
        "population total drifted by {drift} at t = {time}, \
         exceeding the allowed {tolerance}"
    )]
    ConservationViolated {
        time: f64,
        drift: f64,
        tolerance: f64,
    },

    /// A tolerance value was negative or non-finite.
    #[error("{name} tolerance must be a non-negative finite number, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },
}
