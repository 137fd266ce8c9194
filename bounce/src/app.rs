//! # Bounce Application Logic
//!
//! The fixed-tick loop that drives a [`physics::Simulation`]. Every tick
//! calls [`physics::Simulation::step`] once, logs contacts, and optionally
//! records the new state to a trace file. With `realtime` set the loop
//! sleeps so that ticks land on a fixed cadence, like a GUI frame timer
//! would; otherwise it runs as fast as it can.

use anyhow::Result;
use physics::{SimStats, Simulation, SphereState};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::trace::{TraceRecord, TraceWriter};

/// Tick interval of the interactive demo.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2);

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub ticks: u64,
    pub tick_interval: Duration,
    pub realtime: bool,
    /// Progress is logged every `log_every` ticks; 0 disables it
    pub log_every: u64,
    pub trace: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 1000,
            tick_interval: DEFAULT_TICK_INTERVAL,
            realtime: false,
            log_every: 50,
            trace: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_state: SphereState,
    pub stats: SimStats,
}

/// Run `config.ticks` ticks of `sim`.
///
/// # Errors
///
/// Returns the first physics error, or an I/O error from the trace file.
pub fn run(sim: &mut Simulation, config: &RunConfig) -> Result<RunSummary> {
    let mut trace: Option<TraceWriter<BufWriter<File>>> =
        config.trace.as_ref().map(TraceWriter::create).transpose()?;

    tracing::info!(
        "Starting simulation loop for {} ticks ({:?} per tick, realtime: {})...",
        config.ticks,
        config.tick_interval,
        config.realtime
    );

    for _ in 0..config.ticks {
        let tick_start = Instant::now();

        let outcome = sim.step()?;
        let tick = sim.tick();

        if outcome.collided {
            tracing::debug!(
                tick,
                walls_x = outcome.wall_hits.x,
                walls_z = outcome.wall_hits.z,
                boxes = ?outcome.box_hits,
                "collision happened"
            );
        }

        if let Some(writer) = trace.as_mut() {
            writer.write(&TraceRecord::from_outcome(tick, &outcome))?;
        }

        if config.log_every > 0 && tick % config.log_every == 0 {
            tracing::info!(
                "Tick {} complete. Sphere at {:?}, velocity {:?}",
                tick,
                outcome.sphere.center,
                outcome.sphere.velocity
            );
        }

        if config.realtime {
            let elapsed = tick_start.elapsed();
            if elapsed < config.tick_interval {
                std::thread::sleep(config.tick_interval - elapsed);
            }
        }
    }

    if let Some(writer) = trace {
        writer.finish()?;
    }

    let summary = RunSummary {
        ticks: sim.tick(),
        final_state: sim.state(),
        stats: sim.stats(),
    };
    tracing::info!(
        "Simulation loop finished after {} ticks. Final sphere position: {:?}, collisions: {:?}",
        summary.ticks,
        summary.final_state.pos,
        summary.stats
    );
    Ok(summary)
}
