/// One sampled point of a trajectory: a time and the state at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample<S> {
    /// The grid time of this sample.
    pub time: f64,

    /// The compartment state at `time`.
    pub state: S,
}

/// The discretized time series produced by one solver run.
///
/// A trajectory holds one [`Sample`] per grid point, in grid order, and is
/// immutable once returned: consumers (chart renderers, CSV writers,
/// dashboards) read it through slices and iterators without access to the
/// solver or model internals.
/// A trajectory returned by a solver is never empty; its first sample is
/// always the initial state at the grid start time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory<S> {
    samples: Vec<Sample<S>>,
}

impl<S> Trajectory<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample<S>) {
        self.samples.push(sample);
    }

    /// All samples, in grid order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Number of samples. Equals the grid length of the solver run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trajectory holds no samples.
    ///
    /// Always `false` for a trajectory returned by a solver.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The first sample, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Sample<S>> {
        self.samples.first()
    }

    /// The last sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<S>> {
        self.samples.last()
    }

    /// Iterates over the samples in grid order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Sample<S>;
    type IntoIter = std::slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory() -> Trajectory<f64> {
        let mut trajectory = Trajectory::with_capacity(3);
        for (time, state) in [(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)] {
            trajectory.push(Sample { time, state });
        }
        trajectory
    }

    #[test]
    fn exposes_samples_in_order() {
        let trajectory = trajectory();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.first().unwrap().time, 0.0);
        assert_eq!(trajectory.last().unwrap().state, 30.0);

        let times: Vec<f64> = trajectory.iter().map(|sample| sample.time).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn borrows_as_an_iterator() {
        let trajectory = trajectory();
        let mut total = 0.0;
        for sample in &trajectory {
            total += sample.state;
        }
        assert_eq!(total, 60.0);
    }
}
