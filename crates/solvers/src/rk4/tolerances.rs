use super::Error;

/// Numerical tolerances for the RK4 solver.
///
/// These are solver settings, not physics: the clamp tolerance bounds how
/// much negative overshoot is silently repaired, and the conservation
/// tolerance bounds the relative drift of the population total before a run
/// is aborted.
/// The defaults are conservative and suit typical epidemic scales; callers
/// integrating unusually large or small populations can widen or tighten
/// them via [`Tolerances::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    clamp: f64,
    conservation: f64,
}

impl Tolerances {
    /// Constructs validated tolerances.
    ///
    /// # Parameters
    ///
    /// - `clamp`: Absolute bound on negative compartment overshoot that is
    ///   clamped to zero rather than reported as an error.
    /// - `conservation`: Relative bound on drift of the population total
    ///   from its initial value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if either value is negative or
    /// non-finite.
    pub fn new(clamp: f64, conservation: f64) -> Result<Self, Error> {
        if !clamp.is_finite() || clamp < 0.0 {
            return Err(Error::InvalidTolerance {
                name: "clamp",
                value: clamp,
            });
        }
        if !conservation.is_finite() || conservation < 0.0 {
            return Err(Error::InvalidTolerance {
                name: "conservation",
                value: conservation,
            });
        }
        Ok(Self {
            clamp,
            conservation,
        })
    }

    /// Absolute clamp tolerance for negative overshoot.
    #[must_use]
    pub fn clamp(&self) -> f64 {
        self.clamp
    }

    /// Relative conservation-drift tolerance.
    #[must_use]
    pub fn conservation(&self) -> f64 {
        self.conservation
    }
}

impl Default for Tolerances {
    /// A `1e-9` clamp bound and `1e-6` relative conservation bound.
    fn default() -> Self {
        Self {
            clamp: 1e-9,
            conservation: 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let defaults = Tolerances::default();
        assert_eq!(
            Tolerances::new(defaults.clamp(), defaults.conservation()),
            Ok(defaults)
        );
    }

    #[test]
    fn negative_or_nan_tolerances_are_rejected() {
        assert!(matches!(
            Tolerances::new(-1e-9, 1e-6),
            Err(Error::InvalidTolerance { name: "clamp", .. })
        ));
        assert!(matches!(
            Tolerances::new(1e-9, f64::NAN),
            Err(Error::InvalidTolerance {
                name: "conservation",
                ..
            })
        ));
    }
}
