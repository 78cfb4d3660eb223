//! Simulation engine: the core of the fire-control simulator.
//!
//! `FireControlEngine` owns the hecs world holding the contacts, the turret,
//! pending delayed events and the operator log. It processes operator
//! commands, runs all systems and produces `FcsSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use fcs_core::commands::OperatorCommand;
use fcs_core::constants::*;
use fcs_core::enums::{AmmoType, LogLevel, ShotResult, SimPhase};
use fcs_core::error::{FcsError, Result};
use fcs_core::events::{AudioEvent, LogEntry};
use fcs_core::state::{FcsSnapshot, RadarView, SettingsView};
use fcs_core::types::{FiringSolution, SimTime, SolverInputs, TargetId, TargetState};

use crate::ballistics::{self, TrajectoryPreview};
use crate::engagement::{self, EventKind, PendingShot, ScheduledEvent, ScoreState};
use crate::event_log::EventLog;
use crate::systems;
use crate::systems::contacts;
use crate::systems::snapshot::SnapshotInputs;
use crate::turret::Turret;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Contacts generated at start and on every reset.
    pub target_count: usize,
    pub radar_range_km: f64,
    /// Rounds loaded at start and on every reset.
    pub rounds: u32,
    pub solver: SolverInputs,
    pub auto_recalculate: bool,
    pub show_trajectory: bool,
    pub sound: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_count: DEFAULT_TARGET_COUNT,
            radar_range_km: RADAR_DEFAULT_RANGE_KM,
            rounds: DEFAULT_ROUNDS,
            solver: SolverInputs::default(),
            auto_recalculate: false,
            show_trajectory: false,
            sound: true,
        }
    }
}

/// The simulation engine. Owns the contact world and all sim state.
pub struct FireControlEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: SimPhase,
    rng: ChaCha8Rng,
    next_target_id: u32,
    command_queue: VecDeque<OperatorCommand>,

    turret: Turret,
    solution: Option<FiringSolution>,
    solver: SolverInputs,
    radar_range_km: f64,
    sweep_angle: f64,
    auto_recalculate: bool,
    show_trajectory: bool,
    sound: bool,

    pending: Vec<ScheduledEvent>,
    /// Bumped on every reset; events from an older generation are dropped.
    generation: u64,
    log: EventLog,
    audio_events: Vec<AudioEvent>,
    score: ScoreState,
}

impl FireControlEngine {
    /// Create a new engine with the given config and a freshly generated scenario.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_target_id: 0,
            command_queue: VecDeque::new(),
            turret: Turret::new(config.rounds),
            solution: None,
            solver: config.solver,
            radar_range_km: config
                .radar_range_km
                .clamp(RADAR_MIN_RANGE_KM, RADAR_MAX_RANGE_KM),
            sweep_angle: 0.0,
            auto_recalculate: config.auto_recalculate,
            show_trajectory: config.show_trajectory,
            sound: config.sound,
            pending: Vec::new(),
            generation: 0,
            log: EventLog::default(),
            audio_events: Vec::new(),
            score: ScoreState::default(),
            config,
        };
        engine.populate();
        info!(
            seed = engine.config.seed,
            targets = contacts::count(&engine.world),
            "fire control engine ready"
        );
        engine
    }

    /// Queue an operator command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> FcsSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.time.advance();
            systems::motion::run(&mut self.world, &mut self.rng, 1.0, self.radar_range_km);
            systems::radar::advance_sweep(&mut self.sweep_angle);
            self.run_timers();
            if self.auto_recalculate {
                self.refresh_solution();
            }
        }

        self.snapshot()
    }

    // --- Operations ---

    /// Select the contact nearest a scope click (pixel offsets from the centre).
    ///
    /// Returns the selected identity, or `None` when nothing lies under the click.
    pub fn select_at(&mut self, x_px: f64, y_px: f64) -> Result<Option<TargetId>> {
        if !x_px.is_finite() || !y_px.is_finite() {
            return Err(FcsError::InvalidParameter(format!(
                "click position ({x_px}, {y_px})"
            )));
        }
        let Some((entity, id)) =
            systems::selection::nearest_to_click(&self.world, x_px, y_px, self.radar_range_km)
        else {
            return Ok(None);
        };
        self.select(entity);
        self.log_info(format!("Target {id} selected"));
        Ok(Some(id))
    }

    /// Select the contact with the highest threat score.
    pub fn acquire_highest_threat(&mut self) -> Result<TargetId> {
        let (entity, id) =
            systems::selection::highest_threat(&self.world).ok_or(FcsError::NoTargetsAvailable)?;
        self.select(entity);
        self.log_info(format!("Auto-acquired highest threat: {id}"));
        Ok(id)
    }

    /// Lock the turret on the selected contact and compute a solution for it.
    pub fn lock(&mut self) -> Result<FiringSolution> {
        let entity = self.turret.lock()?;
        if let Some(id) = contacts::id_of(&self.world, entity) {
            self.log_info(format!("Target {id} LOCKED"));
            self.push_audio(AudioEvent::LockOn { target: id });
        }
        self.calculate_solution()
    }

    /// Compute a firing solution for the selected contact and lay the turret.
    pub fn calculate_solution(&mut self) -> Result<FiringSolution> {
        let target = self.selected_target();
        let solution = ballistics::solve(target.as_ref(), &self.solver)?;
        self.apply_solution(solution);

        let distance_m = target.map_or(0.0, |t| t.distance_km * 1000.0);
        self.log_info(format!("Ballistic solution calculated for {}", solution.target));
        self.log_info(format!(
            "Ammo: {}, Distance: {:.0}m",
            self.solver.ammo.label(),
            distance_m
        ));
        Ok(solution)
    }

    /// Fire one round at the locked contact.
    ///
    /// Rejections leave every piece of state untouched. On success the round
    /// count drops, the reload starts and the shot resolves after a fixed delay.
    pub fn fire(&mut self) -> Result<TargetId> {
        let entity = self.turret.check_fire()?;
        let target = contacts::state_of(&self.world, entity).ok_or(FcsError::NoTargetSelected)?;
        self.turret.discharge()?;

        let ammo = self.solver.ammo;
        self.log_info(format!("FIRING {} at {}", ammo.label(), target.id));
        self.push_audio(AudioEvent::Shot { ammo });
        self.score.shots_fired += 1;

        let shot = PendingShot {
            entity,
            target_id: target.id,
            hit_probability: engagement::hit_probability(target.distance_km * 1000.0),
            roll: self.rng.gen(),
        };
        debug!(
            target_id = %target.id,
            p_hit = shot.hit_probability,
            rounds_left = self.turret.rounds_remaining,
            "round away"
        );
        self.schedule(SHOT_RESOLUTION_DELAY_SECS, EventKind::ShotResolution(shot));
        self.schedule(RELOAD_COOLDOWN_SECS, EventKind::ReloadComplete);
        Ok(target.id)
    }

    /// Regenerate the scenario and restore the weapon.
    ///
    /// Operator settings and the sensor range are kept. Delayed events still
    /// pending from before the reset are discarded when they come due.
    pub fn reset(&mut self) {
        self.world.clear();
        self.generation += 1;
        self.turret = Turret::new(self.config.rounds);
        self.solution = None;
        self.score = ScoreState::default();
        self.populate();
        info!(generation = self.generation, "scenario reset");
        self.log_info("Scenario reset");
    }

    pub fn pause(&mut self) {
        if self.phase == SimPhase::Running {
            self.phase = SimPhase::Paused;
            self.log_info("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == SimPhase::Paused {
            self.phase = SimPhase::Running;
            self.log_info("Simulation resumed");
        }
    }

    pub fn set_ammo(&mut self, ammo: AmmoType) {
        self.solver.ammo = ammo;
    }

    pub fn set_wind(&mut self, speed_mps: f64, direction_deg: f64) -> Result<()> {
        if !speed_mps.is_finite() || !direction_deg.is_finite() {
            return Err(FcsError::InvalidParameter(format!(
                "wind {speed_mps} m/s from {direction_deg}°"
            )));
        }
        self.solver.wind_speed_mps = speed_mps;
        self.solver.wind_direction_deg = direction_deg;
        Ok(())
    }

    pub fn set_temperature(&mut self, celsius: f64) -> Result<()> {
        if !celsius.is_finite() {
            return Err(FcsError::InvalidParameter(format!("temperature {celsius} °C")));
        }
        self.solver.temperature_c = celsius;
        Ok(())
    }

    /// Grow or shrink the sensor range, clamped to the selectable band.
    pub fn change_radar_range(&mut self, delta_km: f64) -> Result<f64> {
        if !delta_km.is_finite() {
            return Err(FcsError::InvalidParameter(format!("range step {delta_km} km")));
        }
        self.radar_range_km = systems::radar::adjust_range(self.radar_range_km, delta_km);
        self.log_info(format!("Radar range changed to {} km", self.radar_range_km));
        Ok(self.radar_range_km)
    }

    /// Whole operator log as text, one `[HH:MM:SS] message` line per entry.
    pub fn export_log(&self) -> String {
        self.log.export()
    }

    // --- Accessors ---

    pub fn turret(&self) -> &Turret {
        &self.turret
    }

    pub fn solution(&self) -> Option<&FiringSolution> {
        self.solution.as_ref()
    }

    /// Snapshot of every live contact, ordered by identity.
    pub fn targets(&self) -> Vec<TargetState> {
        contacts::all_states(&self.world)
    }

    /// Snapshot of the selected contact, if the selection still resolves.
    pub fn selected_target(&self) -> Option<TargetState> {
        self.turret
            .selected
            .and_then(|entity| contacts::state_of(&self.world, entity))
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Read-only access to the contact world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn radar_range_km(&self) -> f64 {
        self.radar_range_km
    }

    pub fn solver_inputs(&self) -> &SolverInputs {
        &self.solver
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mutable world access (for tests).
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a contact with fixed state (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_target(&mut self, target: &TargetState) -> Entity {
        world_setup::spawn_target(&mut self.world, target)
    }

    /// Force the outcome draw of every round in flight (for tests).
    #[cfg(test)]
    pub(crate) fn override_pending_rolls(&mut self, roll: f64) {
        for event in &mut self.pending {
            if let EventKind::ShotResolution(shot) = &mut event.kind {
                shot.roll = roll;
            }
        }
    }

    // --- Internals ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command. Failures become log entries.
    fn handle_command(&mut self, command: OperatorCommand) {
        debug!(?command, "operator command");
        let outcome = match command {
            OperatorCommand::SelectAt { x_px, y_px } => self.select_at(x_px, y_px).map(|_| ()),
            OperatorCommand::AcquireHighestThreat => self.acquire_highest_threat().map(|_| ()),
            OperatorCommand::Lock => self.lock().map(|_| ()),
            OperatorCommand::Fire => self.fire().map(|_| ()),
            OperatorCommand::CalculateSolution => self.calculate_solution().map(|_| ()),
            OperatorCommand::SetAmmo { ammo } => {
                self.set_ammo(ammo);
                Ok(())
            }
            OperatorCommand::SetWind {
                speed_mps,
                direction_deg,
            } => self.set_wind(speed_mps, direction_deg),
            OperatorCommand::SetTemperature { celsius } => self.set_temperature(celsius),
            OperatorCommand::SetAutoRecalculate { enabled } => {
                self.auto_recalculate = enabled;
                Ok(())
            }
            OperatorCommand::SetTrajectoryDisplay { enabled } => {
                self.show_trajectory = enabled;
                Ok(())
            }
            OperatorCommand::SetSound { enabled } => {
                self.sound = enabled;
                Ok(())
            }
            OperatorCommand::ChangeRadarRange { delta_km } => {
                self.change_radar_range(delta_km).map(|_| ())
            }
            OperatorCommand::Pause => {
                self.pause();
                Ok(())
            }
            OperatorCommand::Resume => {
                self.resume();
                Ok(())
            }
            OperatorCommand::Reset => {
                self.reset();
                Ok(())
            }
        };

        if let Err(err) = outcome {
            self.report(err);
        }
    }

    fn report(&mut self, err: FcsError) {
        warn!(error = %err, "operator command rejected");
        match err {
            FcsError::NoTargetsAvailable => {
                self.log
                    .push(&self.time, LogLevel::Warning, err.to_string());
            }
            _ => {
                self.log
                    .push(&self.time, LogLevel::Error, format!("ERROR: {err}"));
            }
        }
    }

    fn log_info(&mut self, message: impl Into<String>) {
        self.log.push(&self.time, LogLevel::Info, message);
    }

    fn push_audio(&mut self, event: AudioEvent) {
        if self.sound {
            self.audio_events.push(event);
        }
    }

    fn populate(&mut self) {
        world_setup::populate(
            &mut self.world,
            &mut self.rng,
            &mut self.next_target_id,
            self.config.target_count,
            self.radar_range_km,
        );
    }

    fn select(&mut self, entity: Entity) {
        self.turret.select(entity);
        self.solution = None;
    }

    fn apply_solution(&mut self, solution: FiringSolution) {
        self.turret.lay(&solution);
        self.solution = Some(solution);
    }

    /// Silent recompute for auto-recalculation. No selection means nothing to do.
    fn refresh_solution(&mut self) {
        let Some(target) = self.selected_target() else {
            return;
        };
        if let Ok(solution) = ballistics::solve(Some(&target), &self.solver) {
            self.apply_solution(solution);
        }
    }

    fn schedule(&mut self, delay_secs: f64, kind: EventKind) {
        self.pending.push(ScheduledEvent {
            due_tick: self.time.tick + engagement::frames_for(delay_secs),
            generation: self.generation,
            kind,
        });
    }

    /// Fire every delayed event that has come due, in scheduling order.
    fn run_timers(&mut self) {
        let now = self.time.tick;
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|event| event.due_tick <= now);
        self.pending = pending;

        for event in due {
            if event.generation != self.generation {
                debug!(
                    scheduled = event.generation,
                    current = self.generation,
                    "discarding event from a previous scenario"
                );
                continue;
            }
            match event.kind {
                EventKind::ShotResolution(shot) => self.resolve_shot(shot),
                EventKind::ReloadComplete => {
                    self.turret.complete_reload();
                    debug!(rounds_left = self.turret.rounds_remaining, "reload complete");
                }
            }
        }
    }

    fn resolve_shot(&mut self, shot: PendingShot) {
        let result = shot.result();

        match result {
            ShotResult::Hit => {
                let removed = systems::cleanup::remove_target(&mut self.world, shot.target_id);
                if self.turret.selected == Some(shot.entity) {
                    self.turret.clear_selection();
                    self.solution = None;
                }
                if !removed {
                    // Contact vanished while the round was in flight; nothing to score.
                    return;
                }
                self.score.hits += 1;
                self.push_audio(AudioEvent::Splash {
                    result,
                    target: shot.target_id,
                });
                self.log_info(format!("TARGET HIT! {} destroyed", shot.target_id));
            }
            ShotResult::Miss => {
                self.push_audio(AudioEvent::Splash {
                    result,
                    target: shot.target_id,
                });
                self.score.misses += 1;
                self.log_info("MISS! Recalculating...");
                self.turret.shot_missed();
                if self.turret.locked && self.turret.selected == Some(shot.entity) {
                    if let Err(err) = self.calculate_solution() {
                        self.report(err);
                    }
                }
            }
        }
    }

    fn snapshot(&mut self) -> FcsSnapshot {
        let trajectory = match (&self.solution, self.show_trajectory) {
            (Some(solution), true) => TrajectoryPreview::new(solution).collect(),
            _ => Vec::new(),
        };
        let log = self.log.take_new();
        let audio_events = std::mem::take(&mut self.audio_events);

        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: &self.time,
                phase: self.phase,
                radar: RadarView {
                    range_km: self.radar_range_km,
                    sweep_angle: self.sweep_angle,
                },
                turret: &self.turret,
                solution: self.solution.as_ref(),
                trajectory,
                settings: SettingsView {
                    solver: self.solver,
                    auto_recalculate: self.auto_recalculate,
                    show_trajectory: self.show_trajectory,
                    sound: self.sound,
                },
                log,
                audio_events,
                score: &self.score,
            },
        )
    }
}
