//! Universe of discourse: the sampled domain shared by a variable's fuzzy sets
//!
//! Every fuzzy variable defines its membership curves over one `Universe`,
//! an ordered strictly-increasing grid of sample points. Crisp inputs are
//! fuzzified by linear interpolation over curves sampled onto this grid,
//! which bounds the quantization error at half the sample spacing.

use crate::core::error::{EngineError, Result};

/// An ordered, strictly increasing grid of sample points over a closed interval
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    samples: Vec<f64>,
}

impl Universe {
    /// Build a universe from `resolution` evenly spaced samples over `[min, max]`
    ///
    /// Matches linspace semantics: both endpoints are included, so the
    /// spacing is `(max - min) / (resolution - 1)`.
    pub fn linspace(min: f64, max: f64, resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(EngineError::InvalidUniverse(format!(
                "need at least 2 samples, got {resolution}"
            )));
        }
        if !(min < max) {
            return Err(EngineError::InvalidUniverse(format!(
                "bounds must be increasing, got [{min}, {max}]"
            )));
        }
        let step = (max - min) / (resolution - 1) as f64;
        let mut samples: Vec<f64> = (0..resolution).map(|i| min + i as f64 * step).collect();
        // Pin the endpoint so the grid covers the interval exactly despite
        // accumulated floating point error in the step multiplication.
        samples[resolution - 1] = max;
        Ok(Self { samples })
    }

    /// Build a universe from explicit sample points
    ///
    /// Fails unless the points are strictly increasing with at least two entries.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self> {
        if samples.len() < 2 {
            return Err(EngineError::InvalidUniverse(format!(
                "need at least 2 samples, got {}",
                samples.len()
            )));
        }
        if !samples.windows(2).all(|w| w[0] < w[1]) {
            return Err(EngineError::InvalidUniverse(
                "samples must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { samples })
    }

    /// The sample points, in increasing order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of sample points
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction requires at least two samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Lower bound of the covered interval
    pub fn min(&self) -> f64 {
        self.samples[0]
    }

    /// Upper bound of the covered interval
    pub fn max(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Linearly interpolate a curve sampled over this universe at `x`
    ///
    /// `ys` must hold one value per sample point. Inputs outside the covered
    /// interval clamp to the nearest boundary sample value; there is no
    /// extrapolation. NaN input yields the lower boundary value.
    ///
    /// # Panics
    /// Debug-asserts that `ys` matches the universe length.
    pub fn interp(&self, ys: &[f64], x: f64) -> f64 {
        debug_assert_eq!(ys.len(), self.samples.len());
        if !(x > self.min()) {
            return ys[0];
        }
        if x >= self.max() {
            return ys[ys.len() - 1];
        }
        // Index of the first sample strictly greater than x; the guards above
        // ensure 1 <= hi <= len - 1.
        let hi = self.samples.partition_point(|&s| s <= x);
        let lo = hi - 1;
        let (x0, x1) = (self.samples[lo], self.samples[hi]);
        let t = (x - x0) / (x1 - x0);
        ys[lo] + t * (ys[hi] - ys[lo])
    }
}
