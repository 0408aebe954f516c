use hecs::{Entity, World};
use tracing::{debug, info};

use crate::components::{Feedback, Fruit, Lifetime, Visual};
use crate::config::{Config, DifficultySetting, FruitKind};
use crate::params::Params;
use crate::resources::{Events, GameEvent, Score};
use crate::surface::{Haptics, RenderSurface, VisualKind, VisualStyle};

/// Verdict on a single hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    pub correct: bool,
    pub points: i64,
}

impl HitOutcome {
    /// "+10" for a correct hit, "-7" for a wrong one
    pub fn feedback_text(&self) -> String {
        if self.correct {
            format!("+{}", self.points)
        } else {
            self.points.to_string()
        }
    }
}

/// Judge a hit on `kind` while `target` is the active target
pub fn judge_hit(kind: &FruitKind, target: &FruitKind, setting: &DifficultySetting) -> HitOutcome {
    let correct = kind.name == target.name;
    let points = if correct {
        i64::from(kind.points)
    } else {
        -((kind.points as f32 * setting.penalty_ratio).floor() as i64)
    };
    HitOutcome { correct, points }
}

/// Score a resolved hit: update the total, show feedback, and schedule the
/// fruit's removal after its reaction delay.
#[allow(clippy::too_many_arguments)]
pub fn score_hit(
    world: &mut World,
    surface: &mut dyn RenderSurface,
    haptics: &mut dyn Haptics,
    entity: Entity,
    target: &FruitKind,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<HitOutcome> {
    let (fruit, visual) = {
        let mut query = world
            .query_one::<(&Fruit, &Visual, Option<&Lifetime>)>(entity)
            .ok()?;
        let (fruit, visual, lifetime) = query.get()?;
        if lifetime.is_some() {
            return None; // already hit
        }
        (*fruit, *visual)
    };

    let outcome = judge_hit(fruit.kind, target, &config.setting());

    surface.style(
        visual.0,
        if outcome.correct {
            VisualStyle::Blast
        } else {
            VisualStyle::Wrong
        },
    );

    let glyph = surface.create(
        VisualKind::Feedback {
            text: outcome.feedback_text(),
            positive: outcome.correct,
        },
        fruit.pos,
    );
    world.spawn((
        Feedback,
        Visual(glyph),
        Lifetime::new(config.feedback_lifetime_ms),
    ));

    if !outcome.correct {
        haptics.vibrate(&Params::WRONG_HIT_VIBRATION);
    }

    let total = score.apply(outcome.points);
    if outcome.correct {
        debug!(fruit = fruit.kind.name, points = outcome.points, total, "correct hit");
    } else {
        info!(fruit = fruit.kind.name, target = target.name, points = outcome.points, total, "wrong hit");
    }

    events.push(GameEvent::Hit {
        fruit: fruit.kind.name,
        correct: outcome.correct,
        points: outcome.points,
        x: fruit.pos.x,
        y: fruit.pos.y,
    });
    events.push(GameEvent::ScoreChanged { score: total });

    // Removal goes through gc, the same teardown path as an exit.
    // The entity was read above, so the insert cannot miss.
    world
        .insert_one(entity, Lifetime::new(config.hit_remove_delay_ms))
        .ok();

    Some(outcome)
}
