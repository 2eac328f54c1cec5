//! LayoutGuide replay tool
//!
//! Replays a recorded drag session through the guidance orchestrator and
//! writes every emitted result as one JSON line.
//!
//! ## Scenario format
//!
//! ```json
//! {
//!   "config": { "snap_threshold": 6.0 },
//!   "snapshot": {
//!     "canvas": { "x0": 0, "y0": 0, "x1": 1000, "y1": 800 },
//!     "components": [
//!       { "id": "card", "bounds": { "x0": 100, "y0": 50, "x1": 300, "y1": 150 } }
//!     ]
//!   },
//!   "excluded_id": "dragged",
//!   "samples": [
//!     { "at_ms": 0, "pointer": { "x": 206, "y": 100 }, "ghost_size": { "width": 40, "height": 40 } }
//!   ]
//! }
//! ```

use clap::Parser;
use layoutguide_core::{CanvasSnapshot, GuidanceConfig, GuidanceError, GuidanceOrchestrator, GuidanceResult, PointerSample};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "layoutguide-replay", version)]
struct Cli {
    /// Scenario JSON file.
    scenario: PathBuf,

    /// Config JSON overriding the scenario's config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print each result instead of one line per result.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

/// Replay errors.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
    #[error(transparent)]
    Guidance(#[from] GuidanceError),
    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

/// A recorded drag.
#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    config: GuidanceConfig,
    snapshot: CanvasSnapshot,
    #[serde(default)]
    excluded_id: Option<String>,
    samples: Vec<TimedSample>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct TimedSample {
    /// Milliseconds since drag start.
    at_ms: u64,
    #[serde(flatten)]
    sample: PointerSample,
}

/// One emitted result, stamped with the replay clock.
#[derive(Debug, Serialize)]
struct ReplayFrame<'a> {
    at_ms: u64,
    result: &'a GuidanceResult,
}

fn read_file(path: &Path) -> Result<String, ReplayError> {
    std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_scenario(path: &Path, config_override: Option<&Path>) -> Result<Scenario, ReplayError> {
    let mut scenario: Scenario = serde_json::from_str(&read_file(path)?)?;
    if let Some(config_path) = config_override {
        scenario.config = GuidanceConfig::from_json(&read_file(config_path)?)?;
    }
    scenario.config.validate()?;
    Ok(scenario)
}

/// Drive the orchestrator through the scenario on a simulated clock.
///
/// Each throttle window fires at its own deadline, before any later sample
/// is delivered; after the last sample the pending window is flushed, then
/// the drag ends.
fn replay(scenario: &Scenario, out: &mut impl Write, pretty: bool) -> Result<usize, ReplayError> {
    let mut orchestrator = GuidanceOrchestrator::new(scenario.config);
    let start = Instant::now();
    let at = |ms: u64| start + Duration::from_millis(ms);
    let elapsed_ms = |instant: Instant| instant.duration_since(start).as_millis() as u64;
    let mut emitted = 0;

    let mut emit = |at_ms: u64, result: &GuidanceResult, out: &mut dyn Write| -> Result<(), ReplayError> {
        let frame = ReplayFrame { at_ms, result };
        let written = if pretty {
            serde_json::to_writer_pretty(&mut *out, &frame)
        } else {
            serde_json::to_writer(&mut *out, &frame)
        };
        written.map_err(|e| ReplayError::Output(e.into()))?;
        writeln!(out).map_err(ReplayError::Output)?;
        emitted += 1;
        Ok(())
    };

    let mut samples = scenario.samples.clone();
    samples.sort_by_key(|timed| timed.at_ms);

    orchestrator.drag_start(scenario.excluded_id.clone());
    for timed in &samples {
        if let Some(deadline) = orchestrator.next_deadline().filter(|d| *d <= at(timed.at_ms)) {
            if let Some(result) = orchestrator.poll(deadline, &scenario.snapshot) {
                emit(elapsed_ms(deadline), &result, out)?;
            }
        }
        orchestrator.sample(timed.sample, at(timed.at_ms))?;
    }
    if let Some(deadline) = orchestrator.next_deadline() {
        if let Some(result) = orchestrator.poll(deadline, &scenario.snapshot) {
            emit(elapsed_ms(deadline), &result, out)?;
        }
    }
    orchestrator.drag_end();

    log::info!(
        "Replayed {} samples in {} passes",
        samples.len(),
        orchestrator.passes()
    );
    Ok(emitted)
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let scenario = load_scenario(&cli.scenario, cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    replay(&scenario, &mut out, cli.pretty)?;
    out.flush().map_err(ReplayError::Output)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
