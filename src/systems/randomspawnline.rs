//! Random spawn line systems.
//!
//! - [`random_spawn_line_start_system`] – starts the spawn loop of new lines
//! - [`random_spawn_line_observer`] – spawns one object per loop completion

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::randomspawnline::RandomSpawnLine;
use crate::components::rotation::Rotation;
use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::objectpool::ObjectPool;

pub fn random_spawn_line_start_system(mut lines: Query<&mut Timer, Added<RandomSpawnLine>>) {
    for mut timer in lines.iter_mut() {
        timer.start_loop();
    }
}

/// Spawn from the line's plain pool at a uniformly random point of the segment.
pub fn random_spawn_line_observer(
    trigger: On<TimerEvent>,
    lines: Query<&RandomSpawnLine>,
    mut pool: ResMut<ObjectPool>,
    mut commands: Commands,
) {
    let Ok(line) = lines.get(trigger.event().entity) else {
        return;
    };
    let point = line.point_at(fastrand::f32());
    if let Some(entity) =
        pool.spawn_from_pool(&mut commands, line.category, point, Rotation::default())
    {
        debug!("Spawned {:?} at ({}, {})", entity, point.x, point.y);
    }
}
