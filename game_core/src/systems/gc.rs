use hecs::{Entity, World};

use crate::components::*;
use crate::resources::*;
use crate::surface::RenderSurface;

/// Garbage collection: despawn entities whose lifetime ran out
pub fn gc(world: &mut World, surface: &mut dyn RenderSurface, time: &Time) -> usize {
    let mut to_remove = Vec::new();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.t_left -= time.dt;
        if lifetime.is_expired() {
            to_remove.push(entity);
        }
    }

    for entity in &to_remove {
        despawn_with_visual(world, surface, *entity);
    }
    to_remove.len()
}

/// The single teardown path: release the visual, then the entity
pub fn despawn_with_visual(
    world: &mut World,
    surface: &mut dyn RenderSurface,
    entity: Entity,
) -> bool {
    if let Ok(visual) = world.get::<&Visual>(entity).map(|v| *v) {
        surface.remove(visual.0);
    }
    world.despawn(entity).is_ok()
}

/// Tear down every entity (fruits and feedback glyphs)
pub fn clear_entities(world: &mut World, surface: &mut dyn RenderSurface) {
    for (_entity, visual) in world.query_mut::<&Visual>() {
        surface.remove(visual.0);
    }
    world.clear();
}
