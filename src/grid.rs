//! Evenly spaced sample grids.

use crate::{EasingError, Result};
use core::ops::Deref;

/// Number of samples the presets are rendered with.
pub const DEFAULT_SAMPLES: usize = 200;

/// An ordered sequence of evenly spaced values covering a closed
/// interval.
///
/// The first value is exactly the interval start and the last exactly
/// the interval end. Values are spaced the same way `numpy.linspace`
/// spaces them, so curves sampled on a grid are reproducible against
/// plots made with it.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    values: Vec<f64>,
}

impl SampleGrid {
    /// Creates a grid of `len` values from `start` to `end` inclusive.
    ///
    /// # Errors
    /// [`EasingError::InvalidGrid`] if `len < 2`, either bound is not
    /// finite or `start >= end`.
    ///
    /// # Examples
    /// ```
    /// use hermite_easing::SampleGrid;
    ///
    /// let grid = SampleGrid::linspace(0.0, 1.0, 5).unwrap();
    /// assert_eq!(grid.as_slice(), [0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: f64, end: f64, len: usize) -> Result<Self> {
        if len < 2 || !start.is_finite() || !end.is_finite() || start >= end
        {
            return Err(EasingError::InvalidGrid { start, end, len });
        }

        let step = (end - start) / (len - 1) as f64;
        let mut values: Vec<f64> =
            (0..len).map(|i| i as f64 * step + start).collect();
        values[len - 1] = end;

        // A step too small to move away from `start` can't give a strictly
        // increasing grid.
        if values.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(EasingError::InvalidGrid { start, end, len });
        }

        Ok(Self { values })
    }

    /// The [`DEFAULT_SAMPLES`] point grid on `[0, 1]` every preset is
    /// plotted on.
    pub fn unit() -> Self {
        let step = 1.0 / (DEFAULT_SAMPLES - 1) as f64;
        let mut values: Vec<f64> =
            (0..DEFAULT_SAMPLES).map(|i| i as f64 * step).collect();
        values[DEFAULT_SAMPLES - 1] = 1.0;
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn start(&self) -> f64 {
        self.values[0]
    }

    pub fn end(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::unit()
    }
}

impl Deref for SampleGrid {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for SampleGrid {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
