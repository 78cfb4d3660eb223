//! Fire-control simulator CLI.
//!
//! Runs the engine on its frame loop, plays a scripted engagement against the
//! generated contacts and writes out the operator log.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fcs_app::game_loop::{spawn_game_loop, Pacing};
use fcs_app::state::{AppState, GameLoopCommand};
use fcs_core::commands::OperatorCommand;
use fcs_core::enums::{AmmoType, TurretPhase};
use fcs_core::state::FcsSnapshot;
use fcs_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "fcs-app")]
#[command(about = "Run a scripted fire-control engagement")]
struct Args {
    /// JSON file with a simulation config; missing fields take defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to run (60 per simulated second)
    #[arg(short, long, default_value = "1800")]
    frames: u64,

    /// Ammunition to load before engaging
    #[arg(long, value_parser = parse_ammo)]
    ammo: Option<AmmoType>,

    /// Run frames as fast as possible instead of at 60Hz
    #[arg(long)]
    fast: bool,

    /// Write the operator log here instead of stdout
    #[arg(long)]
    export_log: Option<PathBuf>,
}

fn parse_ammo(value: &str) -> std::result::Result<AmmoType, String> {
    AmmoType::ALL
        .into_iter()
        .find(|ammo| ammo.label().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown ammunition '{value}' (apfsds, heat, he, smoke)"))
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ammo) = args.ammo {
        config.solver.ammo = ammo;
    }
    Ok(config)
}

/// Next scripted operator action for the current picture, if any.
fn next_action(snapshot: &FcsSnapshot) -> Vec<OperatorCommand> {
    let turret = &snapshot.turret;
    if turret.selected.is_none() {
        if snapshot.targets.is_empty() {
            return Vec::new();
        }
        return vec![OperatorCommand::AcquireHighestThreat, OperatorCommand::Lock];
    }
    if turret.phase == TurretPhase::Locked && turret.reload_ready && turret.rounds_remaining > 0 {
        return vec![OperatorCommand::Fire];
    }
    Vec::new()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fcs_app=info".parse()?)
                .add_directive("fcs_sim=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(
        seed = config.seed,
        targets = config.target_count,
        rounds = config.rounds,
        ammo = config.solver.ammo.label(),
        frames = args.frames,
        "starting engagement"
    );

    let pacing = if args.fast {
        Pacing::Unthrottled
    } else {
        Pacing::RealTime
    };
    let state = AppState::new();
    let (tx, handle) = spawn_game_loop(config, state.latest_snapshot.clone(), pacing)
        .context("spawning frame loop")?;
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel poisoned"))? = Some(tx.clone());

    // Act at most once per published frame so a command is never repeated
    // before the engine has seen it.
    let mut acted_on: Option<u64> = None;
    let mut last_frame = 0;
    let deadline = Instant::now() + Duration::from_secs(args.frames / 10 + 60);
    loop {
        let Some(snapshot) = state.snapshot() else {
            std::thread::sleep(Duration::from_millis(1));
            continue;
        };
        last_frame = snapshot.time.tick;
        if last_frame >= args.frames {
            break;
        }
        if Instant::now() > deadline {
            warn!(frame = last_frame, "frame loop stalled, stopping early");
            break;
        }

        let fresh = acted_on.map_or(true, |frame| snapshot.time.tick > frame + 1);
        if fresh {
            let commands = next_action(&snapshot);
            if !commands.is_empty() {
                acted_on = Some(snapshot.time.tick);
                for command in commands {
                    if !state.send(command) {
                        return Err(anyhow!("frame loop exited unexpectedly"));
                    }
                }
            }
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    let (reply_tx, reply_rx) = mpsc::channel();
    tx.send(GameLoopCommand::ExportLog { reply: reply_tx })
        .context("requesting log export")?;
    let log = reply_rx
        .recv_timeout(Duration::from_secs(5))
        .context("waiting for log export")?;

    let _ = tx.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow!("frame loop panicked"))?;

    if let Some(snapshot) = state.snapshot() {
        info!(
            clock = %snapshot.time.clock(),
            frames = last_frame,
            shots = snapshot.score.shots_fired,
            hits = snapshot.score.hits,
            misses = snapshot.score.misses,
            rounds_left = snapshot.turret.rounds_remaining,
            "engagement finished"
        );
        for target in &snapshot.targets {
            info!(
                id = %target.id,
                class = target.class.label(),
                range_km = format_args!("{:.2}", target.distance_km),
                threat = ?target.threat_level,
                "surviving contact"
            );
        }
    }

    match &args.export_log {
        Some(path) => {
            std::fs::write(path, log + "\n")
                .with_context(|| format!("writing log to {}", path.display()))?;
            info!(path = %path.display(), "operator log exported");
        }
        None => println!("{log}"),
    }

    Ok(())
}
