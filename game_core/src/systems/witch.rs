use glam::Vec2;
use tracing::debug;

use crate::config::Config;
use crate::params::Params;
use crate::resources::{Events, GameEvent, GameRng, Scenery, Timer, Timers};
use crate::surface::{RenderSurface, VisualKind};

/// Send the witch across the sky on a randomized path
pub fn witch_fire(
    surface: &mut dyn RenderSurface,
    scenery: &mut Scenery,
    timers: &mut Timers,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if let Some(previous) = scenery.witch.take() {
        surface.remove(previous);
    }

    let start_y_pct = Params::WITCH_START_Y_MIN + rng.range(0.0, Params::WITCH_Y_SPREAD);
    let mid_y_pct = Params::WITCH_MID_Y_MIN + rng.range(0.0, Params::WITCH_Y_SPREAD);
    let duration_s = Params::WITCH_FLIGHT_MIN_S + rng.range(0.0, Params::WITCH_FLIGHT_SPREAD_S);

    let visual = surface.create(
        VisualKind::Witch {
            start_y_pct,
            mid_y_pct,
            duration_s,
        },
        Vec2::ZERO,
    );
    scenery.witch = Some(visual);
    timers.witch_hide = Some(Timer::once(config.witch_hide_ms));

    debug!(start_y_pct, mid_y_pct, duration_s, "witch flight");
    events.push(GameEvent::WitchFlight {
        start_y_pct,
        mid_y_pct,
        duration_s,
    });
}

/// Hide the witch if she is showing
pub fn witch_hide(surface: &mut dyn RenderSurface, scenery: &mut Scenery, events: &mut Events) {
    if let Some(visual) = scenery.witch.take() {
        surface.remove(visual);
        events.push(GameEvent::WitchHidden);
    }
}
