//! Response-surface sweeps over the input grid
//!
//! A thin map of `InferenceEngine::evaluate` across every (ammo, health)
//! pair, used by external plotting layers to render the control surface.
//! Evaluation calls are pure and independent, so rows are processed in
//! parallel with rayon.

use crate::core::error::Result;
use crate::engine::{CrispOutputs, InferenceEngine};
use crate::rules::Mode;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Which of the four crisp outputs a surface sweep collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    MaxCentroid,
    SumCentroid,
    MaxMeanOfMax,
    SumMeanOfMax,
}

impl OutputKind {
    /// Project one scalar out of the full output set
    pub fn select(self, outputs: &CrispOutputs) -> f64 {
        match self {
            OutputKind::MaxCentroid => outputs.max_centroid,
            OutputKind::SumCentroid => outputs.sum_centroid,
            OutputKind::MaxMeanOfMax => outputs.max_mean_of_max,
            OutputKind::SumMeanOfMax => outputs.sum_mean_of_max,
        }
    }
}

/// Evaluate one chosen output for every (ammo, health) pair
///
/// Returns one row per ammo sample, one column per health sample. Any
/// degenerate cell aborts the sweep with the underlying error; with the
/// standard variables every in-range input fires at least one rule, so this
/// only triggers on non-finite inputs.
pub fn response_surface(
    engine: &InferenceEngine,
    ammo_samples: &[f64],
    health_samples: &[f64],
    mode: Mode,
    kind: OutputKind,
) -> Result<Vec<Vec<f64>>> {
    tracing::debug!(
        rows = ammo_samples.len(),
        cols = health_samples.len(),
        %mode,
        "sweeping response surface"
    );
    ammo_samples
        .par_iter()
        .map(|&ammo| {
            health_samples
                .iter()
                .map(|&health| {
                    engine
                        .evaluate(health, ammo, mode)
                        .map(|outputs| kind.select(&outputs))
                })
                .collect()
        })
        .collect()
}

/// Evenly spaced sweep axis over the engine's input range
pub fn sweep_axis(engine: &InferenceEngine, points: usize) -> Vec<f64> {
    let min = engine.config().universe_min;
    let max = engine.config().universe_max;
    if points < 2 {
        return vec![min];
    }
    let step = (max - min) / (points - 1) as f64;
    (0..points).map(|i| min + i as f64 * step).collect()
}
