//! State shared between the driver and the frame-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use fcs_core::commands::OperatorCommand;
use fcs_core::state::FcsSnapshot;

/// Commands sent from the driver to the frame-loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An operator command to forward to the simulation engine.
    Operator(OperatorCommand),
    /// Render the full operator log and send it back on `reply`.
    ExportLog { reply: mpsc::Sender<String> },
    /// Shut down the frame loop gracefully.
    Shutdown,
}

/// Shared driver state.
///
/// The engine itself lives on the frame-loop thread; everything here is
/// either a channel into it or a copy of what it last produced.
pub struct AppState {
    /// Channel sender to forward commands to the frame loop.
    /// `None` until the loop has been spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the frame loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FcsSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward an operator command. Returns `false` if the loop is gone.
    pub fn send(&self, command: OperatorCommand) -> bool {
        self.command_tx
            .lock()
            .ok()
            .and_then(|tx| {
                tx.as_ref()
                    .map(|tx| tx.send(GameLoopCommand::Operator(command)).is_ok())
            })
            .unwrap_or(false)
    }

    /// Clone of the latest snapshot, if one has been published.
    pub fn snapshot(&self) -> Option<FcsSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(OperatorCommand::Pause));
    }

    #[test]
    fn test_send_forwards_operator_command() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(OperatorCommand::Lock));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Operator(OperatorCommand::Lock))
        ));
    }
}
