//! # Bounce Runtime
//!
//! Entry point for the bounce runner binary. Loads a scene (or the built-in
//! demo), then ticks the collision step a fixed number of times.

use anyhow::Result;
use bounce::app::{self, RunConfig};
use clap::Parser;
use scene::Scene;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Run the sphere/box bounce demo headless.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene description (JSON). Defaults to the built-in demo scene.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Tick interval in milliseconds, used with --realtime.
    #[arg(long, default_value_t = 2)]
    tick_ms: u64,

    /// Sleep between ticks to keep the fixed cadence.
    #[arg(long)]
    realtime: bool,

    /// Log progress every N ticks (0 disables).
    #[arg(long, default_value_t = 50)]
    log_every: u64,

    /// Write one JSON line per tick to this file.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Print the resolved scene as JSON and exit.
    #[arg(long)]
    dump_scene: bool,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            ticks: self.ticks,
            tick_interval: Duration::from_millis(self.tick_ms),
            realtime: self.realtime,
            log_every: self.log_every,
            trace: self.trace.clone(),
        }
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => {
                tracing::info!("Loading scene from {}", path.display());
                Scene::from_path(path)
            }
            None => {
                tracing::info!("No scene given, using the built-in demo");
                Ok(Scene::demo())
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let scene = args.load_scene()?;

    if args.dump_scene {
        println!("{}", scene.to_json()?);
        return Ok(());
    }

    let mut sim = scene.into_sim()?;
    app::run(&mut sim, &args.run_config())?;
    Ok(())
}
