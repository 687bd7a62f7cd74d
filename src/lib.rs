//! Fuzzy Tactician - Mamdani fuzzy inference for NPC action selection
//!
//! Maps two crisp inputs (health and ammo, each in [0, 100]) through a fixed
//! 25-rule base to a crisp recommended action in [0, 100], with a behavior
//! mode (attack / defense / normal) reweighting the aggressive and cautious
//! rules.

pub mod core;
pub mod engine;
pub mod fuzzy;
pub mod rules;
pub mod surface;

pub use crate::core::{EngineConfig, EngineError, Result};
pub use crate::engine::{CrispOutputs, Evaluation, InferenceEngine};
pub use crate::rules::Mode;
