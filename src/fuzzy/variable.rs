//! Linguistic variables: named label sets over one shared universe
//!
//! Both inputs (ammo, health) use the same five `Level` labels; the output
//! uses the five `ActionClass` labels. Label order is fixed by the enums and
//! defines the axes of the rule table.

use crate::core::error::Result;
use crate::fuzzy::membership::TriangularMf;
use crate::fuzzy::universe::Universe;
use serde::{Deserialize, Serialize};

/// Number of labels per variable
pub const LABEL_COUNT: usize = 5;

/// Linguistic levels for the input variables (ammo, health)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    /// All levels, in axis order
    pub fn all() -> [Level; LABEL_COUNT] {
        [
            Level::VeryLow,
            Level::Low,
            Level::Medium,
            Level::High,
            Level::VeryHigh,
        ]
    }

    /// Position along the rule-table axis
    pub fn index(self) -> usize {
        match self {
            Level::VeryLow => 0,
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
            Level::VeryHigh => 4,
        }
    }
}

/// Linguistic action classes for the output variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionClass {
    Hide,
    Run,
    Stop,
    Walk,
    Attack,
}

impl ActionClass {
    /// All action classes, from most cautious to most aggressive
    pub fn all() -> [ActionClass; LABEL_COUNT] {
        [
            ActionClass::Hide,
            ActionClass::Run,
            ActionClass::Stop,
            ActionClass::Walk,
            ActionClass::Attack,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            ActionClass::Hide => 0,
            ActionClass::Run => 1,
            ActionClass::Stop => 2,
            ActionClass::Walk => 3,
            ActionClass::Attack => 4,
        }
    }
}

/// Membership degrees for one crisp value, one entry per label in axis order
pub type Degrees = [f64; LABEL_COUNT];

/// A named fuzzy variable: five membership functions over one universe
///
/// The membership shapes are pre-sampled onto the universe at construction;
/// fuzzification interpolates over the sampled curves rather than evaluating
/// the closed form, so results stay resolution-bounded rather than exact.
#[derive(Debug, Clone)]
pub struct FuzzyVariable {
    name: &'static str,
    universe: Universe,
    shapes: [TriangularMf; LABEL_COUNT],
    curves: [Vec<f64>; LABEL_COUNT],
}

impl FuzzyVariable {
    /// Build a variable from five shapes in axis order
    pub fn new(
        name: &'static str,
        universe: Universe,
        shapes: [TriangularMf; LABEL_COUNT],
    ) -> Self {
        let curves = [
            shapes[0].sample(&universe),
            shapes[1].sample(&universe),
            shapes[2].sample(&universe),
            shapes[3].sample(&universe),
            shapes[4].sample(&universe),
        ];
        Self {
            name,
            universe,
            shapes,
            curves,
        }
    }

    /// The standard five-label partition of `[min, max]`
    ///
    /// Shoulders at both ends, evenly spaced vertices: with the default
    /// bounds this yields (0,0,25), (0,25,50), (25,50,75), (50,75,100),
    /// (75,100,100).
    pub fn standard(name: &'static str, universe: Universe) -> Result<Self> {
        let lo = universe.min();
        let hi = universe.max();
        let q = (hi - lo) / 4.0;
        let shapes = [
            TriangularMf::new(lo, lo, lo + q)?,
            TriangularMf::new(lo, lo + q, lo + 2.0 * q)?,
            TriangularMf::new(lo + q, lo + 2.0 * q, lo + 3.0 * q)?,
            TriangularMf::new(lo + 2.0 * q, lo + 3.0 * q, hi)?,
            TriangularMf::new(lo + 3.0 * q, hi, hi)?,
        ];
        Ok(Self::new(name, universe, shapes))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Membership shape for the label at `index`
    pub fn shape(&self, index: usize) -> &TriangularMf {
        &self.shapes[index]
    }

    /// Sampled membership curve for the label at `index`
    pub fn curve(&self, index: usize) -> &[f64] {
        &self.curves[index]
    }

    /// Membership degrees of one crisp value for all five labels
    ///
    /// Pure function of (variable definition, value). Values outside the
    /// universe clamp to the boundary sample, so out-of-range inputs are
    /// deterministic rather than an error.
    pub fn fuzzify(&self, value: f64) -> Degrees {
        let mut degrees = [0.0; LABEL_COUNT];
        for (degree, curve) in degrees.iter_mut().zip(&self.curves) {
            *degree = self.universe.interp(curve, value);
        }
        degrees
    }
}
