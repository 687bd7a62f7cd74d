//! Engine configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the inference engine
///
/// The defaults are the standard setup: three universes over
/// [0, 100] sampled at 1000 points, and the standard mode weight pairs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === UNIVERSES ===
    /// Lower bound of all three universes (ammo, health, action)
    pub universe_min: f64,

    /// Upper bound of all three universes
    pub universe_max: f64,

    /// Number of samples per universe
    ///
    /// The fuzzification step interpolates over the sampled curves, so this
    /// bounds the quantization error at half the sample spacing
    /// (~0.05 units at the default resolution over [0, 100]).
    pub resolution: usize,

    // === MODE WEIGHTS ===
    /// (defense, attack) weight pair applied in attack mode
    ///
    /// Attack mode boosts attack-class rules by 1.5x while leaving
    /// defense-class rules at their base strength.
    pub attack_mode_weights: (f64, f64),

    /// (defense, attack) weight pair applied in defense mode
    pub defense_mode_weights: (f64, f64),

    /// (defense, attack) weight pair applied in normal mode
    ///
    /// Both 1.0: normal mode reproduces the unweighted rule base.
    pub normal_mode_weights: (f64, f64),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            universe_min: 0.0,
            universe_max: 100.0,
            resolution: 1000,
            attack_mode_weights: (1.0, 1.5),
            defense_mode_weights: (1.5, 1.0),
            normal_mode_weights: (1.0, 1.0),
        }
    }
}
