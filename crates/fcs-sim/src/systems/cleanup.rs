//! Contact removal.

use hecs::World;
use tracing::warn;

use fcs_core::types::TargetId;

use crate::systems::contacts;

/// Remove the contact carrying `id`. Destroyed contacts are deleted outright,
/// there is no dead state.
///
/// Returns `false` when no such contact exists, which only happens if the
/// scenario was rebuilt underneath a pending event.
pub fn remove_target(world: &mut World, id: TargetId) -> bool {
    match contacts::find(world, id) {
        Some(entity) => world.despawn(entity).is_ok(),
        None => {
            warn!(target_id = %id, "inconsistent state: contact already removed");
            false
        }
    }
}
