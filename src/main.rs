//! Fuzzy Tactician - Entry Point
//!
//! A thin CLI over the pure inference engine: evaluate one (health, ammo,
//! mode) triple, or sweep a response surface grid for external plotting.

use clap::Parser;
use fuzzy_tactician::surface::{response_surface, sweep_axis, OutputKind};
use fuzzy_tactician::{EngineConfig, InferenceEngine, Mode, Result};

#[derive(Parser, Debug)]
#[command(name = "fuzzy-tactician", about = "Fuzzy action recommendation engine")]
struct Args {
    /// Health level in [0, 100] (out-of-range values clamp)
    #[arg(long)]
    health: f64,

    /// Ammo level in [0, 100] (out-of-range values clamp)
    #[arg(long)]
    ammo: f64,

    /// Behavior mode: attack, defense, or normal
    #[arg(long, default_value = "normal")]
    mode: String,

    /// Emit the outputs as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also sweep an NxN max-centroid response surface and print it as JSON
    #[arg(long, value_name = "N")]
    surface: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fuzzy_tactician=info")),
        )
        .init();

    let args = Args::parse();
    let engine = InferenceEngine::new(EngineConfig::default())?;

    // Parse the mode up front so an invalid selection fails before any work.
    let mode: Mode = args.mode.parse()?;

    let outputs = engine.evaluate(args.health, args.ammo, mode)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        println!("health: {}  ammo: {}  mode: {}", args.health, args.ammo, mode);
        println!("  max aggregation, centroid:        {:8.4}", outputs.max_centroid);
        println!("  sum aggregation, centroid:        {:8.4}", outputs.sum_centroid);
        println!("  max aggregation, mean of maximum: {:8.4}", outputs.max_mean_of_max);
        println!("  sum aggregation, mean of maximum: {:8.4}", outputs.sum_mean_of_max);
    }

    if let Some(points) = args.surface {
        let axis = sweep_axis(&engine, points);
        let grid = response_surface(&engine, &axis, &axis, mode, OutputKind::MaxCentroid)?;
        println!("{}", serde_json::to_string(&grid)?);
    }

    Ok(())
}
