use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Fruit, Lifetime, Visual};
use crate::surface::RenderSurface;

/// Find the newest fruit whose visual contains `point`.
/// Fruits already hit (waiting out their reaction delay) are ignored.
pub fn hit_test(world: &World, surface: &dyn RenderSurface, point: Vec2) -> Option<Entity> {
    let mut candidates: Vec<(Entity, u64, Visual)> = world
        .query::<(&Fruit, &Visual, Option<&Lifetime>)>()
        .iter()
        .filter(|(_e, (_fruit, _visual, lifetime))| lifetime.is_none())
        .map(|(e, (fruit, visual, _))| (e, fruit.seq, *visual))
        .collect();

    // Newest first: overlaps resolve by recency, not area
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    candidates
        .into_iter()
        .find(|(_e, _seq, visual)| {
            surface
                .bounds(visual.0)
                .is_some_and(|bounds| bounds.contains(point))
        })
        .map(|(e, _seq, _visual)| e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRUITS;
    use crate::headless::HeadlessSurface;
    use crate::surface::VisualKind;

    fn spawn(world: &mut World, surface: &mut HeadlessSurface, x: f32, y: f32, seq: u64) -> Entity {
        let pos = Vec2::new(x, y);
        let kind = &FRUITS[seq as usize % FRUITS.len()];
        let visual = surface.create(VisualKind::fruit(kind), pos);
        world.spawn((Fruit::new(kind, pos, 3.0, seq), Visual(visual)))
    }

    #[test]
    fn test_miss_returns_none() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        spawn(&mut world, &mut surface, 100.0, 100.0, 0);

        assert!(hit_test(&world, &surface, Vec2::new(300.0, 300.0)).is_none());
    }

    #[test]
    fn test_newest_wins_on_overlap() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let older = spawn(&mut world, &mut surface, 100.0, 100.0, 0);
        let newer = spawn(&mut world, &mut surface, 120.0, 120.0, 1);

        // Overlap region
        assert_eq!(hit_test(&world, &surface, Vec2::new(125.0, 125.0)), Some(newer));
        // Only the older one covers this point
        assert_eq!(hit_test(&world, &surface, Vec2::new(105.0, 105.0)), Some(older));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let fruit = spawn(&mut world, &mut surface, 100.0, 100.0, 0);

        assert_eq!(hit_test(&world, &surface, Vec2::new(140.0, 140.0)), Some(fruit));
    }

    #[test]
    fn test_hit_fruit_is_not_hit_again() {
        let mut world = World::new();
        let mut surface = HeadlessSurface::new(800.0, 600.0);
        let older = spawn(&mut world, &mut surface, 100.0, 100.0, 0);
        let newer = spawn(&mut world, &mut surface, 100.0, 100.0, 1);
        world.insert_one(newer, Lifetime::new(600.0)).unwrap();

        assert_eq!(hit_test(&world, &surface, Vec2::new(110.0, 110.0)), Some(older));
    }
}
