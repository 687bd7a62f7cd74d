//! The fixed rule base: (ammo level, health level) -> (action, weight class)
//!
//! The 25 rules are data, not control flow: the exhaustive 5x5 grid lives in
//! one static table so completeness and weight-class assignment can be
//! checked independently of the evaluation loop.

use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::fuzzy::{ActionClass, Degrees, Level};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rules in the base (the full 5x5 grid)
pub const RULE_COUNT: usize = 25;

/// Behavior mode selecting the rule weight pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Attack,
    Defense,
    Normal,
}

impl Mode {
    /// (defense weight, attack weight) pair for this mode
    pub fn weights(self, config: &EngineConfig) -> (f64, f64) {
        match self {
            Mode::Attack => config.attack_mode_weights,
            Mode::Defense => config.defense_mode_weights,
            Mode::Normal => config.normal_mode_weights,
        }
    }

    /// Scale factor applied to a rule of the given weight class
    ///
    /// Neutral rules always scale by 1, whatever the mode.
    pub fn weight_for(self, class: WeightClass, config: &EngineConfig) -> f64 {
        let (defense, attack) = self.weights(config);
        match class {
            WeightClass::Defense => defense,
            WeightClass::Attack => attack,
            WeightClass::Neutral => 1.0,
        }
    }
}

impl FromStr for Mode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Mode::Attack),
            "defense" | "defence" => Ok(Mode::Defense),
            "normal" => Ok(Mode::Normal),
            other => Err(EngineError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Attack => write!(f, "attack"),
            Mode::Defense => write!(f, "defense"),
            Mode::Normal => write!(f, "normal"),
        }
    }
}

/// Which mode weight a rule is scaled by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    /// Scaled by the mode's defense weight
    Defense,
    /// Scaled by the mode's attack weight
    Attack,
    /// Never scaled (factor 1 in every mode)
    Neutral,
}

/// One rule: IF ammo is X AND health is Y THEN action is Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub ammo: Level,
    pub health: Level,
    pub action: ActionClass,
    pub class: WeightClass,
}

const fn rule(ammo: Level, health: Level, action: ActionClass, class: WeightClass) -> Rule {
    Rule {
        ammo,
        health,
        action,
        class,
    }
}

/// The full rule base, row-major by ammo level then health level
///
/// Low ammo or low health biases toward hiding and running (defense class);
/// plentiful ammo and health bias toward walking and attacking (attack
/// class); the diagonal band in between stops and holds (neutral).
pub static RULE_TABLE: [Rule; RULE_COUNT] = {
    use ActionClass::*;
    use Level::*;
    [
        rule(VeryLow, VeryLow, Hide, WeightClass::Defense),
        rule(VeryLow, Low, Hide, WeightClass::Defense),
        rule(VeryLow, Medium, Run, WeightClass::Defense),
        rule(VeryLow, High, Run, WeightClass::Defense),
        rule(VeryLow, VeryHigh, Stop, WeightClass::Neutral),
        rule(Low, VeryLow, Hide, WeightClass::Defense),
        rule(Low, Low, Run, WeightClass::Defense),
        rule(Low, Medium, Run, WeightClass::Defense),
        rule(Low, High, Stop, WeightClass::Neutral),
        rule(Low, VeryHigh, Walk, WeightClass::Attack),
        rule(Medium, VeryLow, Run, WeightClass::Defense),
        rule(Medium, Low, Run, WeightClass::Defense),
        rule(Medium, Medium, Stop, WeightClass::Neutral),
        rule(Medium, High, Walk, WeightClass::Attack),
        rule(Medium, VeryHigh, Walk, WeightClass::Attack),
        rule(High, VeryLow, Run, WeightClass::Defense),
        rule(High, Low, Stop, WeightClass::Neutral),
        rule(High, Medium, Walk, WeightClass::Attack),
        rule(High, High, Walk, WeightClass::Attack),
        rule(High, VeryHigh, Attack, WeightClass::Attack),
        rule(VeryHigh, VeryLow, Stop, WeightClass::Neutral),
        rule(VeryHigh, Low, Walk, WeightClass::Attack),
        rule(VeryHigh, Medium, Walk, WeightClass::Attack),
        rule(VeryHigh, High, Attack, WeightClass::Attack),
        rule(VeryHigh, VeryHigh, Attack, WeightClass::Attack),
    ]
};

/// Firing strengths for all 25 rules, in table order
pub type FiringStrengths = [f64; RULE_COUNT];

/// Fire every rule against the fuzzified inputs
///
/// Strength per rule is `min(ammo degree, health degree)` (fuzzy AND by
/// minimum, a committed design point of the rule semantics) scaled by the
/// mode weight for the rule's class. The scaling happens here, before
/// consequent clipping.
pub fn fire(
    ammo_degrees: &Degrees,
    health_degrees: &Degrees,
    mode: Mode,
    config: &EngineConfig,
) -> FiringStrengths {
    let mut strengths = [0.0; RULE_COUNT];
    for (strength, rule) in strengths.iter_mut().zip(RULE_TABLE.iter()) {
        let antecedent = ammo_degrees[rule.ammo.index()].min(health_degrees[rule.health.index()]);
        *strength = antecedent * mode.weight_for(rule.class, config);
    }
    strengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_complete_and_duplicate_free() {
        let pairs: HashSet<(usize, usize)> = RULE_TABLE
            .iter()
            .map(|r| (r.ammo.index(), r.health.index()))
            .collect();
        assert_eq!(pairs.len(), RULE_COUNT);
        for ammo in Level::all() {
            for health in Level::all() {
                assert!(
                    pairs.contains(&(ammo.index(), health.index())),
                    "missing rule for {ammo:?}/{health:?}"
                );
            }
        }
    }

    #[test]
    fn test_table_is_row_major() {
        for (i, rule) in RULE_TABLE.iter().enumerate() {
            assert_eq!(rule.ammo.index(), i / 5);
            assert_eq!(rule.health.index(), i % 5);
        }
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("attack".parse::<Mode>().unwrap(), Mode::Attack);
        assert_eq!("Defence".parse::<Mode>().unwrap(), Mode::Defense);
        assert_eq!(" NORMAL ".parse::<Mode>().unwrap(), Mode::Normal);
        assert!(matches!(
            "berserk".parse::<Mode>(),
            Err(EngineError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_mode_weight_pairs() {
        let config = EngineConfig::default();
        assert_eq!(Mode::Attack.weights(&config), (1.0, 1.5));
        assert_eq!(Mode::Defense.weights(&config), (1.5, 1.0));
        assert_eq!(Mode::Normal.weights(&config), (1.0, 1.0));
    }

    #[test]
    fn test_neutral_rules_ignore_mode() {
        let config = EngineConfig::default();
        for mode in [Mode::Attack, Mode::Defense, Mode::Normal] {
            assert_eq!(mode.weight_for(WeightClass::Neutral, &config), 1.0);
        }
    }

    #[test]
    fn test_fire_uses_min_of_antecedents() {
        let config = EngineConfig::default();
        let ammo = [1.0, 0.0, 0.0, 0.0, 0.0];
        let health = [0.25, 0.0, 0.0, 0.0, 0.0];
        let strengths = fire(&ammo, &health, Mode::Normal, &config);
        // Rule 0 is (very-low, very-low): min(1.0, 0.25) = 0.25.
        assert_eq!(strengths[0], 0.25);
        assert!(strengths[1..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_fire_applies_mode_weight_before_clipping() {
        let config = EngineConfig::default();
        let ammo = [0.4, 0.0, 0.0, 0.0, 0.0];
        let health = [0.4, 0.0, 0.0, 0.0, 0.0];
        // Rule 0 is defense class: boosted in defense mode only.
        let normal = fire(&ammo, &health, Mode::Normal, &config);
        let defense = fire(&ammo, &health, Mode::Defense, &config);
        let attack = fire(&ammo, &health, Mode::Attack, &config);
        assert!((normal[0] - 0.4).abs() < 1e-12);
        assert!((defense[0] - 0.6).abs() < 1e-12);
        assert!((attack[0] - 0.4).abs() < 1e-12);
    }
}
