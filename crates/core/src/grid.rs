use thiserror::Error;

/// A validated, immutable sequence of sample times.
///
/// A `TimeGrid` holds the time points at which a trajectory is sampled.
/// Construction enforces that the grid is non-empty, every value is finite,
/// and the sequence is non-decreasing.
/// Repeated points are legal and produce zero-width integration steps.
///
/// The grid defines the solver's step sizes directly: there is no internal
/// subdivision, so the trajectory length is always the grid length.
/// Callers wanting tighter accuracy supply a finer grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid(Vec<f64>);

/// Error type returned when constructing an invalid [`TimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("time grid must contain at least one point")]
    Empty,

    #[error("time grid decreases at index {index}: {previous} > {current}")]
    Decreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("time grid contains a non-finite value at index {index}")]
    NotFinite { index: usize },

    #[error("grid span is inverted: end {end} is before start {start}")]
    InvertedSpan { start: f64, end: f64 },
}

impl TimeGrid {
    /// Constructs a grid from an explicit sequence of time points.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `points` is empty, contains a non-finite
    /// value, or decreases anywhere.
    pub fn new(points: Vec<f64>) -> Result<Self, GridError> {
        if points.is_empty() {
            return Err(GridError::Empty);
        }
        for (index, &point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(GridError::NotFinite { index });
            }
            if index > 0 && points[index - 1] > point {
                return Err(GridError::Decreasing {
                    index,
                    previous: points[index - 1],
                    current: point,
                });
            }
        }
        Ok(Self(points))
    }

    /// Constructs a grid of `count` evenly spaced points spanning
    /// `[start, end]`.
    ///
    /// A `count` of one yields the single point `start`.
    /// The final point is pinned to `end` exactly, so accumulated rounding in
    /// the spacing never shortens the span.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `count` is zero, either endpoint is
    /// non-finite, or `end < start`.
    pub fn evenly_spaced(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        if count == 0 {
            return Err(GridError::Empty);
        }
        if !start.is_finite() {
            return Err(GridError::NotFinite { index: 0 });
        }
        if !end.is_finite() {
            return Err(GridError::NotFinite { index: count - 1 });
        }
        if end < start {
            return Err(GridError::InvertedSpan { start, end });
        }
        if count == 1 {
            return Ok(Self(vec![start]));
        }

        let spacing = (end - start) / (count - 1) as f64;
        let mut points: Vec<f64> = (0..count)
            .map(|i| start + spacing * i as f64)
            .collect();
        *points.last_mut().unwrap() = end;

        Self::new(points)
    }

    /// The time points, in order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.0
    }

    /// The simulation start time (the first grid point).
    #[must_use]
    pub fn start(&self) -> f64 {
        self.0[0]
    }

    /// The final grid point.
    #[must_use]
    pub fn end(&self) -> f64 {
        *self.0.last().unwrap()
    }

    /// Number of points in the grid. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_a_non_decreasing_sequence() {
        let grid = TimeGrid::new(vec![0.0, 0.5, 0.5, 2.0]).unwrap();
        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid.start(), 0.0);
        assert_relative_eq!(grid.end(), 2.0);
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(TimeGrid::new(vec![]), Err(GridError::Empty));
    }

    #[test]
    fn decreasing_grid_is_rejected() {
        assert!(matches!(
            TimeGrid::new(vec![0.0, 1.0, 0.5]),
            Err(GridError::Decreasing { index: 2, .. })
        ));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        assert_eq!(
            TimeGrid::new(vec![0.0, f64::NAN]),
            Err(GridError::NotFinite { index: 1 })
        );
    }

    #[test]
    fn evenly_spaced_spans_the_interval() {
        let grid = TimeGrid::evenly_spaced(0.0, 10.0, 5).unwrap();
        assert_eq!(grid.points(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn evenly_spaced_pins_the_final_point() {
        let grid = TimeGrid::evenly_spaced(0.0, 1.0, 7).unwrap();
        assert_relative_eq!(grid.end(), 1.0);
    }

    #[test]
    fn single_point_grid_is_just_the_start() {
        let grid = TimeGrid::evenly_spaced(3.0, 9.0, 1).unwrap();
        assert_eq!(grid.points(), &[3.0]);
    }

    #[test]
    fn inverted_span_is_rejected() {
        assert!(matches!(
            TimeGrid::evenly_spaced(1.0, 0.0, 5),
            Err(GridError::InvertedSpan { .. })
        ));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(TimeGrid::evenly_spaced(0.0, 1.0, 0), Err(GridError::Empty));
    }
}
