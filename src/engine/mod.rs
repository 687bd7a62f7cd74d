//! The inference engine: fuzzification, rule firing, aggregation,
//! defuzzification
//!
//! `InferenceEngine::evaluate` is a pure function of its inputs: no shared
//! mutable state, no I/O, identical inputs always produce identical outputs.
//! Each call owns its intermediate arrays, so callers may evaluate from many
//! threads without coordination.

pub mod aggregate;
pub mod defuzz;

pub use aggregate::{aggregate, AggregatedCurves};
pub use defuzz::{centroid, mean_of_maximum};

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::fuzzy::{Degrees, FuzzyVariable, Universe};
use crate::rules::{self, FiringStrengths, Mode};
use serde::{Deserialize, Serialize};

/// The four crisp outputs, one per (aggregation, defuzzification) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrispOutputs {
    pub max_centroid: f64,
    pub sum_centroid: f64,
    pub max_mean_of_max: f64,
    pub sum_mean_of_max: f64,
}

/// Full evaluation record: crisp outputs plus read-only intermediates
///
/// The intermediates (membership degrees, firing strengths, aggregated
/// curves) exist for diagnostic consumers such as plotting layers; the crisp
/// output contract needs none of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub outputs: CrispOutputs,
    pub ammo_degrees: Degrees,
    pub health_degrees: Degrees,
    pub firing_strengths: FiringStrengths,
    pub curves: AggregatedCurves,
}

/// Zero-order Mamdani engine mapping (health, ammo, mode) to an action value
///
/// Construction samples the three fuzzy variables onto their universes once;
/// evaluation is read-only afterwards.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    config: EngineConfig,
    ammo: FuzzyVariable,
    health: FuzzyVariable,
    action: FuzzyVariable,
}

impl InferenceEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let universe = || Universe::linspace(config.universe_min, config.universe_max, config.resolution);
        let ammo = FuzzyVariable::standard("ammo", universe()?)?;
        let health = FuzzyVariable::standard("health", universe()?)?;
        let action = FuzzyVariable::standard("action", universe()?)?;
        Ok(Self {
            config,
            ammo,
            health,
            action,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The ammo input variable
    pub fn ammo(&self) -> &FuzzyVariable {
        &self.ammo
    }

    /// The health input variable
    pub fn health(&self) -> &FuzzyVariable {
        &self.health
    }

    /// The action output variable
    pub fn action(&self) -> &FuzzyVariable {
        &self.action
    }

    /// Evaluate the engine for one (health, ammo, mode) triple
    ///
    /// Inputs outside [min, max] clamp to the boundary; they are not errors.
    /// Fails with `DegenerateAggregate` when no rule fires with positive
    /// strength.
    pub fn evaluate(&self, health: f64, ammo: f64, mode: Mode) -> Result<CrispOutputs> {
        self.evaluate_traced(health, ammo, mode).map(|e| e.outputs)
    }

    /// Evaluate and keep the intermediate results
    pub fn evaluate_traced(&self, health: f64, ammo: f64, mode: Mode) -> Result<Evaluation> {
        let ammo_degrees = self.ammo.fuzzify(ammo);
        let health_degrees = self.health.fuzzify(health);
        let firing_strengths = rules::fire(&ammo_degrees, &health_degrees, mode, &self.config);
        let curves = aggregate(&self.action, &firing_strengths);

        let universe = self.action.universe();
        let outputs = CrispOutputs {
            max_centroid: centroid(universe, &curves.max)?,
            sum_centroid: centroid(universe, &curves.sum)?,
            max_mean_of_max: mean_of_maximum(universe, &curves.max)?,
            sum_mean_of_max: mean_of_maximum(universe, &curves.sum)?,
        };

        tracing::debug!(
            health,
            ammo,
            %mode,
            max_centroid = outputs.max_centroid,
            sum_centroid = outputs.sum_centroid,
            "inference complete"
        );

        Ok(Evaluation {
            outputs,
            ammo_degrees,
            health_degrees,
            firing_strengths,
            curves,
        })
    }

    /// Evaluate with the mode given as a string
    ///
    /// The untyped seam for callers holding a raw mode selection: an
    /// unrecognized mode fails with `InvalidMode` before any numeric work.
    pub fn evaluate_named(&self, health: f64, ammo: f64, mode: &str) -> Result<CrispOutputs> {
        let mode: Mode = mode.parse()?;
        self.evaluate(health, ammo, mode)
    }
}
