//! Ability cooldown ticking.

use bevy_ecs::prelude::*;

use crate::components::cooldown::AbilityCooldown;
use crate::resources::worldtime::WorldTime;

/// Advance every cooldown that is still running.
pub fn ability_cooldown_system(
    world_time: Res<WorldTime>,
    mut query: Query<&mut AbilityCooldown>,
) {
    let dt = world_time.delta;
    for mut cooldown in query.iter_mut() {
        if cooldown.is_on_cooldown() {
            cooldown.timer.tick(dt);
        }
    }
}
