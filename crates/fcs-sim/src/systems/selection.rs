//! Target designation: click-to-select and highest-threat acquisition.

use hecs::{Entity, World};

use fcs_core::components::{Contact, Kinematics, ThreatAssessment};
use fcs_core::constants::SELECT_RADIUS_PX;
use fcs_core::types::TargetId;

use crate::systems::radar::to_scope_px;

/// Nearest contact to a scope click, if any lies within the capture radius.
///
/// Every contact is a candidate, including those drawn off-scope.
pub fn nearest_to_click(
    world: &World,
    x_px: f64,
    y_px: f64,
    range_km: f64,
) -> Option<(Entity, TargetId)> {
    let mut best: Option<(Entity, TargetId, f64)> = None;

    for (entity, (contact, kin)) in world.query::<(&Contact, &Kinematics)>().iter() {
        let (tx, ty) = to_scope_px(kin.position.x_km, kin.position.y_km, range_km);
        let dist = (x_px - tx).hypot(y_px - ty);
        if dist >= SELECT_RADIUS_PX {
            continue;
        }
        let closer = match best {
            None => true,
            Some((_, best_id, best_dist)) => {
                dist < best_dist || (dist == best_dist && contact.id < best_id)
            }
        };
        if closer {
            best = Some((entity, contact.id, dist));
        }
    }

    best.map(|(entity, id, _)| (entity, id))
}

/// Contact with the highest threat score. Ties go to the lowest identity.
pub fn highest_threat(world: &World) -> Option<(Entity, TargetId)> {
    let mut best: Option<(Entity, TargetId, f64)> = None;

    for (entity, (contact, threat)) in world.query::<(&Contact, &ThreatAssessment)>().iter() {
        let better = match best {
            None => true,
            Some((_, best_id, best_score)) => {
                threat.score > best_score || (threat.score == best_score && contact.id < best_id)
            }
        };
        if better {
            best = Some((entity, contact.id, threat.score));
        }
    }

    best.map(|(entity, id, _)| (entity, id))
}
