//! Inference engine integration tests
//!
//! End-to-end checks of the published contract: the worked scenarios,
//! the rule-table invariants, mode behavior, and the error paths.

use fuzzy_tactician::engine::InferenceEngine;
use fuzzy_tactician::fuzzy::Level;
use fuzzy_tactician::rules::{WeightClass, RULE_COUNT, RULE_TABLE};
use fuzzy_tactician::{EngineConfig, EngineError, Mode};

use proptest::prelude::*;

fn engine() -> InferenceEngine {
    InferenceEngine::new(EngineConfig::default()).expect("default engine")
}

/// Scenario: both inputs at the lower boundary, normal mode.
///
/// Only the (very-low, very-low) -> hide rule fires, at full strength; the
/// max aggregate is the hide shoulder itself, whose centroid is 25/3.
#[test]
fn test_scenario_boundary_hide() {
    let engine = engine();
    let eval = engine.evaluate_traced(0.0, 0.0, Mode::Normal).unwrap();

    assert_eq!(eval.firing_strengths[0], 1.0);
    assert!(eval.firing_strengths[1..].iter().all(|&s| s == 0.0));
    assert_eq!(eval.curves.max, engine.action().curve(0));

    // Exact value is 25/3; the sampled universe quantizes it slightly.
    assert!((eval.outputs.max_centroid - 25.0 / 3.0).abs() < 0.1);
}

/// Scenario: health 82, ammo 22, normal mode.
#[test]
fn test_scenario_health82_ammo22() {
    let engine = engine();
    let eval = engine.evaluate_traced(82.0, 22.0, Mode::Normal).unwrap();

    // Ammo straddles very-low/low, health straddles high/very-high.
    let ammo = eval.ammo_degrees;
    let health = eval.health_degrees;
    assert!((ammo[0] - 0.12).abs() < 1e-3);
    assert!((ammo[1] - 0.88).abs() < 1e-3);
    assert!((health[3] - 0.72).abs() < 1e-3);
    assert!((health[4] - 0.28).abs() < 1e-3);

    // Exactly four rules fire: run@0.12, stop@0.12, stop@0.72, walk@0.28.
    let fired: Vec<(usize, f64)> = eval
        .firing_strengths
        .iter()
        .enumerate()
        .filter(|(_, &s)| s > 0.0)
        .map(|(i, &s)| (i, s))
        .collect();
    assert_eq!(
        fired.iter().map(|&(i, _)| i).collect::<Vec<_>>(),
        vec![3, 4, 8, 9]
    );

    assert!((eval.outputs.max_centroid - 53.9).abs() < 1.0);
}

#[test]
fn test_rule_table_covers_every_pair_once() {
    let mut seen = [[0u8; 5]; 5];
    for rule in RULE_TABLE.iter() {
        seen[rule.ammo.index()][rule.health.index()] += 1;
    }
    for ammo in Level::all() {
        for health in Level::all() {
            assert_eq!(seen[ammo.index()][health.index()], 1);
        }
    }
    assert_eq!(RULE_TABLE.len(), RULE_COUNT);
}

#[test]
fn test_neutral_rules_unaffected_by_mode() {
    let engine = engine();
    let normal = engine.evaluate_traced(40.0, 60.0, Mode::Normal).unwrap();
    let attack = engine.evaluate_traced(40.0, 60.0, Mode::Attack).unwrap();
    let defense = engine.evaluate_traced(40.0, 60.0, Mode::Defense).unwrap();

    for (i, rule) in RULE_TABLE.iter().enumerate() {
        if rule.class == WeightClass::Neutral {
            assert_eq!(normal.firing_strengths[i], attack.firing_strengths[i]);
            assert_eq!(normal.firing_strengths[i], defense.firing_strengths[i]);
        }
    }
}

#[test]
fn test_attack_mode_biases_toward_aggression() {
    // With decent health and ammo, boosting attack-class rules should pull
    // the sum-centroid recommendation upward relative to defense mode.
    let engine = engine();
    let attack = engine.evaluate(70.0, 60.0, Mode::Attack).unwrap();
    let defense = engine.evaluate(70.0, 60.0, Mode::Defense).unwrap();
    assert!(attack.sum_centroid > defense.sum_centroid);
}

#[test]
fn test_invalid_mode_string_fails_before_evaluation() {
    let engine = engine();
    let err = engine.evaluate_named(50.0, 50.0, "berserk").unwrap_err();
    match err {
        EngineError::InvalidMode(mode) => assert_eq!(mode, "berserk"),
        other => panic!("expected InvalidMode, got {other:?}"),
    }
}

#[test]
fn test_outputs_identical_across_repeated_calls() {
    let engine = engine();
    let first = engine.evaluate_traced(33.3, 66.6, Mode::Defense).unwrap();
    let second = engine.evaluate_traced(33.3, 66.6, Mode::Defense).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_all_four_outputs_for_midrange_input() {
    let engine = engine();
    let outputs = engine.evaluate(50.0, 50.0, Mode::Normal).unwrap();
    // Dead-center inputs fire the (medium, medium) -> stop rule hardest;
    // every strategy should land near the middle of the action range.
    for v in [
        outputs.max_centroid,
        outputs.sum_centroid,
        outputs.max_mean_of_max,
        outputs.sum_mean_of_max,
    ] {
        assert!((v - 50.0).abs() < 5.0, "expected near 50, got {v}");
    }
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Attack),
        Just(Mode::Defense),
        Just(Mode::Normal),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_outputs_stay_in_range(
        health in 0.0f64..=100.0,
        ammo in 0.0f64..=100.0,
        mode in mode_strategy(),
    ) {
        let engine = engine();
        let outputs = engine.evaluate(health, ammo, mode).unwrap();
        for v in [
            outputs.max_centroid,
            outputs.sum_centroid,
            outputs.max_mean_of_max,
            outputs.sum_mean_of_max,
        ] {
            prop_assert!((0.0..=100.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn prop_max_aggregate_never_exceeds_sum(
        health in 0.0f64..=100.0,
        ammo in 0.0f64..=100.0,
        mode in mode_strategy(),
    ) {
        let engine = engine();
        let eval = engine.evaluate_traced(health, ammo, mode).unwrap();
        for (m, s) in eval.curves.max.iter().zip(eval.curves.sum.iter()) {
            prop_assert!(m <= s);
        }
    }

    #[test]
    fn prop_out_of_range_inputs_clamp_to_boundary(
        health in -500.0f64..=600.0,
        ammo in -500.0f64..=600.0,
    ) {
        let engine = engine();
        let raw = engine.evaluate(health, ammo, Mode::Normal).unwrap();
        let clamped = engine
            .evaluate(health.clamp(0.0, 100.0), ammo.clamp(0.0, 100.0), Mode::Normal)
            .unwrap();
        prop_assert_eq!(raw, clamped);
    }
}
