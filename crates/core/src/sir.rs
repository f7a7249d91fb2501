use std::ops::{Add, Mul};

use crate::{
    model::CompartmentModel,
    parameters::{ParameterError, Parameters},
    state::CompartmentState,
};

/// Compartment counts of the SIR model at one instant.
///
/// Fields are private so that every `SirState` in circulation satisfies the
/// non-negativity invariant checked by [`SirState::new`].
/// States produced by a solver additionally satisfy the conservation
/// invariant `S + I + R == N` within the solver's tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SirState {
    susceptible: f64,
    infected: f64,
    recovered: f64,
}

/// Instantaneous rates of change of an [`SirState`], in individuals per unit
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SirRates {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl SirState {
    /// Constructs a state from explicit compartment counts.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any count is negative or non-finite.
    pub fn new(susceptible: f64, infected: f64, recovered: f64) -> Result<Self, ParameterError> {
        for (name, value) in [
            ("susceptible count", susceptible),
            ("infected count", infected),
            ("recovered count", recovered),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name });
            }
            if value < 0.0 {
                return Err(ParameterError::NegativeCompartment { name, value });
            }
        }
        Ok(Self {
            susceptible,
            infected,
            recovered,
        })
    }

    /// Susceptible count `S`.
    #[must_use]
    pub fn susceptible(&self) -> f64 {
        self.susceptible
    }

    /// Infected count `I`.
    #[must_use]
    pub fn infected(&self) -> f64 {
        self.infected
    }

    /// Recovered count `R`.
    #[must_use]
    pub fn recovered(&self) -> f64 {
        self.recovered
    }
}

impl CompartmentState for SirState {
    type Rates = SirRates;

    fn advanced(&self, rates: SirRates, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + rates.susceptible * dt,
            infected: self.infected + rates.infected * dt,
            recovered: self.recovered + rates.recovered * dt,
        }
    }

    fn total(&self) -> f64 {
        self.susceptible + self.infected + self.recovered
    }

    fn smallest_compartment(&self) -> f64 {
        self.susceptible.min(self.infected).min(self.recovered)
    }

    fn clamped_non_negative(&self) -> Self {
        Self {
            susceptible: self.susceptible.max(0.0),
            infected: self.infected.max(0.0),
            recovered: self.recovered.max(0.0),
        }
    }
}

impl Add for SirRates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            susceptible: self.susceptible + rhs.susceptible,
            infected: self.infected + rhs.infected,
            recovered: self.recovered + rhs.recovered,
        }
    }
}

impl Mul<f64> for SirRates {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            susceptible: self.susceptible * factor,
            infected: self.infected * factor,
            recovered: self.recovered * factor,
        }
    }
}

/// The classic susceptible-infected-recovered model under the law of mass
/// action.
///
/// The model holds its [`Parameters`] by value and nothing else, so it is a
/// stateless, reusable right-hand side:
///
/// ```text
/// dS/dt = -β·S·I/N
/// dI/dt =  β·S·I/N - γ·I
/// dR/dt =  γ·I
/// ```
///
/// Because the infection term leaves `S + I` unchanged and the recovery term
/// leaves `I + R` unchanged, the rate components sum to zero and the
/// population total is a conserved quantity of any exact trajectory.
#[derive(Debug, Clone, Copy)]
pub struct Sir {
    parameters: Parameters,
}

impl Sir {
    /// Creates an SIR model from validated parameters.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// The model's parameters.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }
}

impl CompartmentModel for Sir {
    type State = SirState;

    fn rates(&self, state: &SirState) -> SirRates {
        let infection =
            self.parameters.contact_rate() * state.susceptible * state.infected
                / self.parameters.population();
        let recovery = self.parameters.recovery_rate() * state.infected;

        SirRates {
            susceptible: -infection,
            infected: infection - recovery,
            recovered: recovery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn model() -> Sir {
        Sir::new(Parameters::new(1000.0, 0.3, 0.1).unwrap())
    }

    #[test]
    fn rates_follow_the_mass_action_law() {
        let state = SirState::new(900.0, 100.0, 0.0).unwrap();
        let rates = model().rates(&state);

        // β·S·I/N = 0.3 · 900 · 100 / 1000 = 27, γ·I = 10.
        assert_relative_eq!(rates.susceptible, -27.0);
        assert_relative_eq!(rates.infected, 17.0);
        assert_relative_eq!(rates.recovered, 10.0);
    }

    #[test]
    fn rate_components_sum_to_zero() {
        let model = model();
        for (s, i, r) in [
            (999.0, 1.0, 0.0),
            (500.0, 300.0, 200.0),
            (0.0, 1000.0, 0.0),
            (333.3, 333.3, 333.4),
        ] {
            let rates = model.rates(&SirState::new(s, i, r).unwrap());
            assert_abs_diff_eq!(
                rates.susceptible + rates.infected + rates.recovered,
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn no_infected_means_no_dynamics() {
        let state = SirState::new(1000.0, 0.0, 0.0).unwrap();
        let rates = model().rates(&state);
        assert_eq!(rates.susceptible, 0.0);
        assert_eq!(rates.infected, 0.0);
        assert_eq!(rates.recovered, 0.0);
    }

    #[test]
    fn negative_compartment_is_rejected() {
        assert!(matches!(
            SirState::new(-1.0, 0.0, 0.0),
            Err(ParameterError::NegativeCompartment { .. })
        ));
        assert!(SirState::new(0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn advancing_applies_rates_linearly() {
        let state = SirState::new(900.0, 100.0, 0.0).unwrap();
        let rates = SirRates {
            susceptible: -20.0,
            infected: 10.0,
            recovered: 10.0,
        };

        let next = state.advanced(rates, 0.5);
        assert_relative_eq!(next.susceptible(), 890.0);
        assert_relative_eq!(next.infected(), 105.0);
        assert_relative_eq!(next.recovered(), 5.0);
        assert_relative_eq!(next.total(), state.total());
    }

    #[test]
    fn clamping_zeroes_small_negative_overshoot() {
        let overshot = SirState::new(10.0, 0.0, 990.0)
            .unwrap()
            .advanced(
                SirRates {
                    susceptible: 0.0,
                    infected: -1.0,
                    recovered: 1.0,
                },
                1e-12,
            );

        assert!(overshot.smallest_compartment() < 0.0);
        assert_eq!(overshot.clamped_non_negative().infected(), 0.0);
    }
}
