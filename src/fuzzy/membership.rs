//! Triangular membership functions
//!
//! One shape covers everything this engine needs: a full triangle (a < b < c),
//! a left shoulder (a = b), or a right shoulder (b = c). The vertex always
//! evaluates to exactly 1 and the feet to exactly 0.

use crate::core::error::{EngineError, Result};
use crate::fuzzy::universe::Universe;
use serde::{Deserialize, Serialize};

/// A triangular (or shoulder-degenerate) fuzzy set over the real line
///
/// Parameters satisfy `a <= b <= c`: `a` is the left foot, `b` the vertex,
/// `c` the right foot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularMf {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularMf {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a <= b && b <= c) {
            return Err(EngineError::InvalidMembership { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Membership degree of a crisp value, in [0, 1]
    ///
    /// Closed-form piecewise-linear evaluation, total over the real line.
    /// The vertex check comes first so degenerate shoulders (a = b or b = c)
    /// still report exactly 1 at `b`.
    pub fn degree(&self, x: f64) -> f64 {
        if x == self.b {
            1.0
        } else if x <= self.a || x >= self.c {
            0.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (x - self.c) / (self.b - self.c)
        }
    }

    /// Evaluate the shape at every sample point of a universe
    pub fn sample(&self, universe: &Universe) -> Vec<f64> {
        universe.samples().iter().map(|&x| self.degree(x)).collect()
    }

    /// Left foot
    pub fn left(&self) -> f64 {
        self.a
    }

    /// Vertex (degree exactly 1)
    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Right foot
    pub fn right(&self) -> f64 {
        self.c
    }
}
