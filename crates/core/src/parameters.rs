use thiserror::Error;

use crate::sir::SirState;

/// Epidemiological parameters for a mass-action compartmental model.
///
/// `Parameters` wraps the total population `N`, the contact rate `β`, and the
/// recovery rate `γ`, enforcing at construction time that `N` is strictly
/// positive and that both rates are non-negative and finite.
/// Values are immutable once constructed, so any `Parameters` in circulation
/// can be trusted by model and solver code without re-validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameters {
    population: f64,
    contact_rate: f64,
    recovery_rate: f64,
}

/// Error type returned when constructing invalid [`Parameters`] or an
/// initial state from them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("total population must be positive, got {0}")]
    PopulationNotPositive(f64),

    #[error("contact rate must be non-negative, got {0}")]
    NegativeContactRate(f64),

    #[error("recovery rate must be non-negative, got {0}")]
    NegativeRecoveryRate(f64),

    #[error("initial infected count {infected} must lie within [0, {population}]")]
    InfectedOutOfRange { infected: f64, population: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeCompartment { name: &'static str, value: f64 },

    #[error("{name} is not a finite number")]
    NotFinite { name: &'static str },
}

impl Parameters {
    /// Constructs validated parameters.
    ///
    /// # Parameters
    ///
    /// - `population`: Total population `N`, strictly positive.
    /// - `contact_rate`: Effective per-capita transmission rate `β`.
    /// - `recovery_rate`: Per-capita recovery rate `γ`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any value is non-finite, if
    /// `population <= 0`, or if either rate is negative.
    pub fn new(
        population: f64,
        contact_rate: f64,
        recovery_rate: f64,
    ) -> Result<Self, ParameterError> {
        if !population.is_finite() {
            return Err(ParameterError::NotFinite {
                name: "total population",
            });
        }
        if !contact_rate.is_finite() {
            return Err(ParameterError::NotFinite {
                name: "contact rate",
            });
        }
        if !recovery_rate.is_finite() {
            return Err(ParameterError::NotFinite {
                name: "recovery rate",
            });
        }
        if population <= 0.0 {
            return Err(ParameterError::PopulationNotPositive(population));
        }
        if contact_rate < 0.0 {
            return Err(ParameterError::NegativeContactRate(contact_rate));
        }
        if recovery_rate < 0.0 {
            return Err(ParameterError::NegativeRecoveryRate(recovery_rate));
        }
        Ok(Self {
            population,
            contact_rate,
            recovery_rate,
        })
    }

    /// Total population `N`.
    #[must_use]
    pub fn population(&self) -> f64 {
        self.population
    }

    /// Contact rate `β`.
    #[must_use]
    pub fn contact_rate(&self) -> f64 {
        self.contact_rate
    }

    /// Recovery rate `γ`.
    #[must_use]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Basic reproduction number `R₀ = β / γ`.
    ///
    /// Returns `f64::INFINITY` when only the recovery rate is zero (no one
    /// ever recovers), and NaN when both rates are zero.
    #[must_use]
    pub fn reproduction_number(&self) -> f64 {
        self.contact_rate / self.recovery_rate
    }

    /// Builds the conventional initial state `(N - I₀, I₀, 0)` from an
    /// initial infected count.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InfectedOutOfRange`] if `infected` lies
    /// outside `[0, N]`, or [`ParameterError::NotFinite`] if it is NaN or
    /// infinite.
    pub fn initial_state(&self, infected: f64) -> Result<SirState, ParameterError> {
        if !infected.is_finite() {
            return Err(ParameterError::NotFinite {
                name: "initial infected count",
            });
        }
        if !(0.0..=self.population).contains(&infected) {
            return Err(ParameterError::InfectedOutOfRange {
                infected,
                population: self.population,
            });
        }
        SirState::new(self.population - infected, infected, 0.0)
    }
}
