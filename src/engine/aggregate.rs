//! Consequent clipping and aggregation over the action universe
//!
//! Each fired rule clips its consequent curve at the firing strength
//! (Mamdani implication by minimum). The 25 clipped regions combine into two
//! output curves: pointwise max (the standard Mamdani aggregate, bounded by
//! 1) and pointwise sum (cumulative evidence, unbounded — an intentional
//! alternate path, not an error).

use crate::fuzzy::FuzzyVariable;
use crate::rules::{FiringStrengths, RULE_TABLE};

/// Both aggregated output curves over the action universe
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCurves {
    /// Pointwise maximum of the clipped regions, values in [0, 1]
    pub max: Vec<f64>,
    /// Pointwise sum of the clipped regions, non-negative but unbounded
    pub sum: Vec<f64>,
}

/// Clip every consequent and fold the regions into the two aggregates
///
/// Rules fire independently, so a single pass accumulates both aggregates
/// without materializing the 25 intermediate regions.
pub fn aggregate(action: &FuzzyVariable, strengths: &FiringStrengths) -> AggregatedCurves {
    let len = action.universe().len();
    let mut max = vec![0.0; len];
    let mut sum = vec![0.0; len];
    for (rule, &strength) in RULE_TABLE.iter().zip(strengths.iter()) {
        if strength <= 0.0 {
            continue;
        }
        let curve = action.curve(rule.action.index());
        for i in 0..len {
            let clipped = curve[i].min(strength);
            if clipped > max[i] {
                max[i] = clipped;
            }
            sum[i] += clipped;
        }
    }
    AggregatedCurves { max, sum }
}
