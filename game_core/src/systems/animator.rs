use hecs::World;

use crate::components::{Fruit, Visual};
use crate::config::DifficultySetting;
use crate::surface::RenderSurface;
use crate::systems::gc::despawn_with_visual;

/// Advance every fruit by one animation tick; fruits below the surface are removed.
/// Returns how many fruits left the surface.
pub fn advance_fruits(
    world: &mut World,
    surface: &mut dyn RenderSurface,
    setting: &DifficultySetting,
) -> usize {
    let bottom = surface.size().y;
    let mut exited = Vec::new();

    for (entity, (fruit, visual)) in world.query_mut::<(&mut Fruit, &Visual)>() {
        fruit.pos.y += fruit.effective_speed(setting.max_fall_speed);
        surface.move_to(visual.0, fruit.pos);

        if fruit.pos.y > bottom {
            exited.push(entity);
        }
    }

    for entity in &exited {
        despawn_with_visual(world, surface, *entity);
    }
    exited.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, FRUITS};
    use crate::headless::HeadlessSurface;
    use crate::surface::VisualKind;
    use glam::Vec2;

    fn spawn_at(world: &mut World, surface: &mut HeadlessSurface, y: f32, speed: f32) -> hecs::Entity {
        let pos = Vec2::new(100.0, y);
        let visual = surface.create(VisualKind::fruit(&FRUITS[0]), pos);
        world.spawn((Fruit::new(&FRUITS[0], pos, speed, 0), Visual(visual)))
    }

    #[test]
    fn test_speed_capped_by_difficulty() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let easy = Difficulty::Easy.setting();
        let fast = spawn_at(&mut world, &mut surface, 0.0, 10.0);
        let slow = spawn_at(&mut world, &mut surface, 0.0, 2.5);

        advance_fruits(&mut world, &mut surface, &easy);

        assert_eq!(world.get::<&Fruit>(fast).unwrap().pos.y, easy.max_fall_speed);
        assert_eq!(world.get::<&Fruit>(slow).unwrap().pos.y, 2.5);
    }

    #[test]
    fn test_visual_follows_fruit() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let entity = spawn_at(&mut world, &mut surface, 50.0, 3.0);
        let handle = world.get::<&Visual>(entity).unwrap().0;

        advance_fruits(&mut world, &mut surface, &Difficulty::Hard.setting());

        assert_eq!(surface.get(handle).unwrap().pos, Vec2::new(100.0, 53.0));
    }

    #[test]
    fn test_exit_removes_fruit_and_visual() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let leaving = spawn_at(&mut world, &mut surface, 598.0, 3.0);
        let staying = spawn_at(&mut world, &mut surface, 597.0, 3.0); // lands exactly on the edge

        let exited = advance_fruits(&mut world, &mut surface, &Difficulty::Easy.setting());

        assert_eq!(exited, 1);
        assert!(!world.contains(leaving));
        assert!(world.contains(staying));
        assert_eq!(surface.len(), 1);

        // Next tick takes the second one out; the first is never touched again
        let exited = advance_fruits(&mut world, &mut surface, &Difficulty::Easy.setting());
        assert_eq!(exited, 1);
        assert_eq!(world.len(), 0);
        assert!(surface.is_empty());
    }
}
