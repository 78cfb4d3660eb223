//! Turret and weapon state machine.
//!
//! Engagement phase: Idle → Tracking → Locked → Firing → (Locked | Idle).
//! Weapon readiness (Ready / Reloading) runs alongside it, gated by the
//! round counter. Guards reject without touching any field.

use hecs::Entity;

use fcs_core::enums::{TurretPhase, WeaponStatus};
use fcs_core::error::{FcsError, Result};
use fcs_core::types::FiringSolution;

#[derive(Debug, Clone)]
pub struct Turret {
    pub phase: TurretPhase,
    /// Laid azimuth, copied from the last solution (degrees).
    pub azimuth_deg: f64,
    /// Laid elevation, copied from the last solution (degrees).
    pub elevation_deg: f64,
    /// Only decreases; restored by scenario reset.
    pub rounds_remaining: u32,
    pub reload_ready: bool,
    pub locked: bool,
    /// Weak reference into the contact world. May dangle after a removal.
    pub selected: Option<Entity>,
}

impl Turret {
    pub fn new(rounds: u32) -> Self {
        Self {
            phase: TurretPhase::Idle,
            azimuth_deg: 0.0,
            elevation_deg: 0.0,
            rounds_remaining: rounds,
            reload_ready: true,
            locked: false,
            selected: None,
        }
    }

    pub fn weapon_status(&self) -> WeaponStatus {
        if self.reload_ready {
            WeaponStatus::Ready
        } else {
            WeaponStatus::Reloading
        }
    }

    /// Designate a new target. Any previous lock is dropped.
    pub fn select(&mut self, target: Entity) {
        self.selected = Some(target);
        self.locked = false;
        self.phase = TurretPhase::Tracking;
    }

    /// Drop the designation and return to Idle.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.locked = false;
        self.phase = TurretPhase::Idle;
    }

    pub fn lock(&mut self) -> Result<Entity> {
        let target = self.selected.ok_or(FcsError::NoTargetSelected)?;
        self.locked = true;
        self.phase = TurretPhase::Locked;
        Ok(target)
    }

    /// Copy the solution's laying angles.
    pub fn lay(&mut self, solution: &FiringSolution) {
        self.azimuth_deg = solution.azimuth_deg;
        self.elevation_deg = solution.elevation_deg;
    }

    /// Check every fire guard without changing state.
    pub fn check_fire(&self) -> Result<Entity> {
        if !self.locked {
            return Err(FcsError::NotLocked);
        }
        let target = self.selected.ok_or(FcsError::NoTargetSelected)?;
        if !self.reload_ready {
            return Err(FcsError::ReloadInProgress);
        }
        if self.rounds_remaining == 0 {
            return Err(FcsError::OutOfAmmunition);
        }
        Ok(target)
    }

    /// Fire one round: spend it, start the reload, mark the shot in flight.
    pub fn discharge(&mut self) -> Result<Entity> {
        let target = self.check_fire()?;
        self.rounds_remaining -= 1;
        self.reload_ready = false;
        self.phase = TurretPhase::Firing;
        Ok(target)
    }

    pub fn complete_reload(&mut self) {
        self.reload_ready = true;
    }

    /// A shot missed; a turret still waiting on it goes back to Locked.
    pub fn shot_missed(&mut self) {
        if self.phase == TurretPhase::Firing {
            self.phase = TurretPhase::Locked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> Entity {
        let mut world = hecs::World::new();
        world.spawn((0u8,))
    }

    #[test]
    fn new_turret_is_idle_and_ready() {
        let turret = Turret::new(10);
        assert_eq!(turret.phase, TurretPhase::Idle);
        assert_eq!(turret.weapon_status(), WeaponStatus::Ready);
        assert_eq!(turret.rounds_remaining, 10);
        assert!(turret.selected.is_none());
    }

    #[test]
    fn lock_requires_selection() {
        let mut turret = Turret::new(10);
        assert_eq!(turret.lock(), Err(FcsError::NoTargetSelected));
        assert_eq!(turret.phase, TurretPhase::Idle);
        assert!(!turret.locked);

        let target = entity();
        turret.select(target);
        assert_eq!(turret.phase, TurretPhase::Tracking);
        assert_eq!(turret.lock(), Ok(target));
        assert_eq!(turret.phase, TurretPhase::Locked);
    }

    #[test]
    fn reselect_drops_lock() {
        let mut turret = Turret::new(10);
        turret.select(entity());
        turret.lock().unwrap();
        turret.select(entity());
        assert!(!turret.locked);
        assert_eq!(turret.phase, TurretPhase::Tracking);
    }

    #[test]
    fn fire_guards_in_order() {
        let mut turret = Turret::new(1);
        assert_eq!(turret.check_fire(), Err(FcsError::NotLocked));

        turret.select(entity());
        assert_eq!(turret.check_fire(), Err(FcsError::NotLocked));

        turret.lock().unwrap();
        turret.reload_ready = false;
        assert_eq!(turret.check_fire(), Err(FcsError::ReloadInProgress));

        turret.reload_ready = true;
        turret.rounds_remaining = 0;
        assert_eq!(turret.check_fire(), Err(FcsError::OutOfAmmunition));
    }

    #[test]
    fn empty_gun_rejects_without_change() {
        let mut turret = Turret::new(0);
        turret.select(entity());
        turret.lock().unwrap();
        let before = turret.clone();

        assert_eq!(turret.discharge(), Err(FcsError::OutOfAmmunition));
        assert_eq!(turret.rounds_remaining, 0);
        assert_eq!(turret.phase, before.phase);
        assert_eq!(turret.reload_ready, before.reload_ready);
    }

    #[test]
    fn last_round_fires_and_starts_reload() {
        let mut turret = Turret::new(1);
        turret.select(entity());
        turret.lock().unwrap();

        turret.discharge().unwrap();
        assert_eq!(turret.rounds_remaining, 0);
        assert!(!turret.reload_ready);
        assert_eq!(turret.weapon_status(), WeaponStatus::Reloading);
        assert_eq!(turret.phase, TurretPhase::Firing);

        turret.shot_missed();
        assert_eq!(turret.phase, TurretPhase::Locked);
        turret.complete_reload();
        assert_eq!(turret.check_fire(), Err(FcsError::OutOfAmmunition));
    }
}
