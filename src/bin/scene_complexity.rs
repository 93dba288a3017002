//! Scene Complexity CLI
//!
//! Reads a scene description (waypoints and obstacle extents) as JSON, grows a
//! region for every segment and writes the region record.
//!
//! Usage:
//!   cargo run --bin scene_complexity -- scene.json --output regions.json

use clap::Parser;
use region_complexity::core::error::Result;
use region_complexity::{record, ComplexityConfig, Scene, SceneAnalyzer};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scene_complexity")]
#[command(about = "Compute per-segment path regions and clutter complexity for a scene")]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Where to write the region record
    #[arg(long, short = 'o', default_value = "regions.json")]
    output: PathBuf,

    /// Optional TOML file overriding margins and tolerances
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Grow segments on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let mut config = match &args.config {
        Some(path) => ComplexityConfig::load(path)?,
        None => ComplexityConfig::default(),
    };
    config.parallel |= args.parallel;

    let scene = Scene::from_json_str(&fs::read_to_string(&args.scene)?)?;
    tracing::info!(
        waypoints = scene.waypoints.len(),
        obstacles = scene.obstacles.len(),
        "scene loaded"
    );

    let analysis = SceneAnalyzer::new(config).analyze(&scene)?;
    record::save(&args.output, &analysis.regions, analysis.walls)?;

    for (index, value) in analysis.complexities.iter().enumerate() {
        println!("segment {:>3}: {:.4}", index, value);
    }
    println!("scene complexity: {:.4}", analysis.max_complexity());

    Ok(())
}
