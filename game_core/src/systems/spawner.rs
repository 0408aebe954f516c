use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Fruit, Visual};
use crate::config::{DifficultySetting, FRUITS};
use crate::params::Params;
use crate::resources::{GameRng, Scenery};
use crate::surface::{RenderSurface, VisualKind};

/// Replace the clouds with a fresh row spread across the surface width
pub fn create_clouds(
    surface: &mut dyn RenderSurface,
    scenery: &mut Scenery,
    rng: &mut GameRng,
    count: usize,
) {
    clear_clouds(surface, scenery);
    if count == 0 {
        return;
    }

    let spacing = surface.size().x / count as f32;
    for i in 0..count {
        let x = i as f32 * spacing + rng.range(-Params::CLOUD_JITTER_X, Params::CLOUD_JITTER_X);
        let y = Params::CLOUD_TOP_MIN + rng.range(0.0, Params::CLOUD_TOP_SPREAD);
        let handle = surface.create(VisualKind::Cloud, Vec2::new(x, y));
        scenery.anchors.push(handle);
    }
}

pub fn clear_clouds(surface: &mut dyn RenderSurface, scenery: &mut Scenery) {
    for handle in scenery.anchors.drain(..) {
        surface.remove(handle);
    }
}

/// Drop one random fruit from under a random cloud. No clouds, no fruit.
pub fn spawn_fruit(
    world: &mut World,
    surface: &mut dyn RenderSurface,
    scenery: &Scenery,
    setting: &DifficultySetting,
    rng: &mut GameRng,
    next_seq: &mut u64,
) -> Option<Entity> {
    if scenery.anchors.is_empty() {
        return None;
    }

    let kind = &FRUITS[rng.index(FRUITS.len())];
    let anchor = scenery.anchors[rng.index(scenery.anchors.len())];
    let cloud = surface.bounds(anchor)?;

    let pos = Vec2::new(cloud.min.x + rng.range(0.0, cloud.width()), cloud.max.y);
    let speed =
        rng.range(Params::SPAWN_SPEED_MIN, Params::SPAWN_SPEED_MAX) * setting.speed_multiplier;

    let visual = surface.create(VisualKind::fruit(kind), pos);
    let seq = *next_seq;
    *next_seq += 1;

    debug!(fruit = kind.name, x = pos.x, y = pos.y, speed, "fruit spawned");
    Some(world.spawn((Fruit::new(kind, pos, speed, seq), Visual(visual))))
}
