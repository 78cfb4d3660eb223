//! Frame-loop thread: runs the fire-control engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it, so every
//! mutation of contact and turret state is serialized through one owner.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use fcs_core::constants::FRAME_RATE;
use fcs_core::state::FcsSnapshot;
use fcs_sim::engine::{FireControlEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one display frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Frame pacing for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One frame per `FRAME_DURATION` of wall time.
    RealTime,
    /// As fast as the host allows.
    Unthrottled,
}

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<FcsSnapshot>>>,
    pacing: Pacing,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("fcs-frame-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, pacing);
        })?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FcsSnapshot>>,
    pacing: Pacing,
) {
    let mut engine = FireControlEngine::new(config);
    let mut next_frame_time = Instant::now();
    info!(?pacing, "frame loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Operator(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::ExportLog { reply }) => {
                    let _ = reply.send(engine.export_log());
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(frames = engine.time().tick, "frame loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        if pacing == Pacing::Unthrottled {
            continue;
        }
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            debug!("frame loop behind schedule, resyncing");
            next_frame_time = now;
        }
    }
}
