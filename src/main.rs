//! Aviary - Entry Point
//!
//! Builds a seeded random world, optionally steps it forward, and renders
//! one frame of triangle glyphs to a PNG file.

use std::path::PathBuf;

use aviary::core::config::AviaryConfig;
use aviary::core::error::Result;
use aviary::renderer::{RasterCanvas, Renderer};
use aviary::simulation::{Simulation, WorldProvider};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Render a frame of the flock simulation
#[derive(Parser, Debug)]
#[command(name = "aviary")]
#[command(about = "Render one frame of a random flock world to PNG")]
struct Args {
    /// TOML config file; missing keys use defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for deterministic worlds
    #[arg(long)]
    seed: Option<u64>,

    /// Logical viewport width (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Logical viewport height (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Device pixel ratio (overrides config)
    #[arg(long)]
    pixel_ratio: Option<f32>,

    /// Simulation steps to run before rendering
    #[arg(long, default_value_t = 0)]
    steps: u64,

    /// Output PNG path
    #[arg(long, short = 'o', default_value = "frame.png")]
    output: PathBuf,

    /// Also write the rendered world snapshot as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aviary=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AviaryConfig::load(path)?,
        None => AviaryConfig::default(),
    };
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if args.pixel_ratio.is_some() {
        config.render.pixel_ratio = args.pixel_ratio;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Aviary starting...");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut simulation = Simulation::random(&mut rng, &config.simulation);
    for _ in 0..args.steps {
        simulation.step();
    }

    let mut canvas = RasterCanvas::new(config.render.width, config.render.height);
    let mut renderer = Renderer::new(&mut canvas, &config.render);
    canvas.clear(config.render.background);
    let stats = renderer.render(&mut canvas, &simulation);

    canvas.save_png(&args.output)?;

    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&simulation.snapshot())?;
        std::fs::write(path, json)?;
    }

    let (backing_width, backing_height) = renderer.viewport().backing_size();
    tracing::info!(
        tick = simulation.tick(),
        glyphs = stats.glyphs,
        backing_width,
        backing_height,
        frame_ms = renderer.metrics().last_frame_time_ms(),
        avg_frame_ms = renderer.metrics().avg_frame_time_ms(),
        output = %args.output.display(),
        "frame rendered"
    );

    Ok(())
}
