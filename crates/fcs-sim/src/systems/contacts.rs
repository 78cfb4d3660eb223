//! Read-only contact queries.

use hecs::{Entity, World};

use fcs_core::components::{Contact, Kinematics, Polar, ThreatAssessment};
use fcs_core::types::{TargetId, TargetState};

/// Assemble the solver snapshot of one contact, if it still exists.
pub fn state_of(world: &World, entity: Entity) -> Option<TargetState> {
    let mut query = world
        .query_one::<(&Contact, &Kinematics, &Polar, &ThreatAssessment)>(entity)
        .ok()?;
    let (contact, kin, polar, threat) = query.get()?;
    Some(assemble(contact, kin, polar, threat))
}

/// Snapshot of every contact, ordered by identity.
pub fn all_states(world: &World) -> Vec<TargetState> {
    let mut states: Vec<TargetState> = world
        .query::<(&Contact, &Kinematics, &Polar, &ThreatAssessment)>()
        .iter()
        .map(|(_, (contact, kin, polar, threat))| assemble(contact, kin, polar, threat))
        .collect();
    states.sort_by_key(|s| s.id);
    states
}

/// Find the entity carrying `id`.
pub fn find(world: &World, id: TargetId) -> Option<Entity> {
    world
        .query::<&Contact>()
        .iter()
        .find(|(_, contact)| contact.id == id)
        .map(|(entity, _)| entity)
}

/// Identity of an entity, if it is a live contact.
pub fn id_of(world: &World, entity: Entity) -> Option<TargetId> {
    world.get::<&Contact>(entity).ok().map(|contact| contact.id)
}

/// Number of live contacts.
pub fn count(world: &World) -> usize {
    world.query::<&Contact>().iter().count()
}

fn assemble(
    contact: &Contact,
    kin: &Kinematics,
    polar: &Polar,
    threat: &ThreatAssessment,
) -> TargetState {
    TargetState {
        id: contact.id,
        class: contact.class,
        position: kin.position,
        heading_rad: kin.heading_rad,
        speed_mps: kin.speed_mps,
        distance_km: polar.distance_km,
        bearing_deg: polar.bearing_deg,
        elevation_deg: contact.elevation_deg,
        threat: threat.score,
    }
}
