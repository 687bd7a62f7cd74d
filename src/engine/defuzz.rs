//! Defuzzification: reducing an aggregated curve to one crisp scalar
//!
//! Two strategies, both total over non-degenerate curves and both failing
//! with `DegenerateAggregate` (never NaN or infinity) when the curve carries
//! no mass.

use crate::core::error::{EngineError, Result};
use crate::fuzzy::Universe;

/// Center of gravity of the curve: sum(x * y) / sum(y)
///
/// Fails when the total mass is zero (no rule fired), rather than dividing
/// by zero.
pub fn centroid(universe: &Universe, curve: &[f64]) -> Result<f64> {
    debug_assert_eq!(curve.len(), universe.len());
    let mass: f64 = curve.iter().sum();
    // `!(.. > 0.0)` also catches a NaN mass from poisoned upstream values.
    if !(mass > 0.0) {
        return Err(EngineError::DegenerateAggregate {
            strategy: "centroid",
            reason: "aggregated curve has zero total mass",
        });
    }
    let moment: f64 = universe
        .samples()
        .iter()
        .zip(curve.iter())
        .map(|(&x, &y)| x * y)
        .sum();
    Ok(moment / mass)
}

/// Mean of the x-positions where the curve attains its global maximum
///
/// Plateaus and multiple disjoint peaks all contribute: every sample tied
/// for the maximum is averaged, not just the first. A uniformly zero curve
/// has no distinguishable maximum and fails.
pub fn mean_of_maximum(universe: &Universe, curve: &[f64]) -> Result<f64> {
    debug_assert_eq!(curve.len(), universe.len());
    let peak = curve.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(peak > 0.0) {
        return Err(EngineError::DegenerateAggregate {
            strategy: "mean-of-maximum",
            reason: "aggregated curve has no positive maximum",
        });
    }
    let mut count = 0usize;
    let mut total = 0.0;
    for (&x, &y) in universe.samples().iter().zip(curve.iter()) {
        if y == peak {
            count += 1;
            total += x;
        }
    }
    Ok(total / count as f64)
}
