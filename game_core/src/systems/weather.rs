use glam::Vec2;
use tracing::debug;

use crate::config::Weather;
use crate::params::Params;
use crate::resources::{GameRng, Lightning, Scenery, Timer, Timers};
use crate::surface::{RenderSurface, VisualKind, VisualStyle};

/// Replace any weather overlays with the ones for `weather`
pub fn create_weather(
    surface: &mut dyn RenderSurface,
    scenery: &mut Scenery,
    timers: &mut Timers,
    weather: Weather,
) {
    clear_weather(surface, scenery);
    timers.lightning = None;

    if weather == Weather::Clear {
        return;
    }

    let overlay = surface.create(VisualKind::Weather(weather), Vec2::ZERO);
    scenery.weather.push(overlay);

    if weather.has_lightning() {
        let visual = surface.create(VisualKind::Lightning, Vec2::ZERO);
        // First flash right away
        surface.style(visual, VisualStyle::Lit(true));
        scenery.lightning = Some(Lightning { visual, lit: true });
        timers.lightning = Some(Timer::once(Params::LIGHTNING_LIT_MS));
    }

    debug!(%weather, "weather created");
}

pub fn clear_weather(surface: &mut dyn RenderSurface, scenery: &mut Scenery) {
    for handle in scenery.weather.drain(..) {
        surface.remove(handle);
    }
    if let Some(lightning) = scenery.lightning.take() {
        surface.remove(lightning.visual);
    }
}

/// Lightning timer fired: toggle the flash and arm the next change.
/// Short bursts follow a flash now and then; otherwise the sky stays calm for a while.
pub fn lightning_tick(
    surface: &mut dyn RenderSurface,
    scenery: &mut Scenery,
    timers: &mut Timers,
    rng: &mut GameRng,
) {
    let Some(lightning) = scenery.lightning.as_mut() else {
        timers.lightning = None;
        return;
    };

    if lightning.lit {
        lightning.lit = false;
        surface.style(lightning.visual, VisualStyle::Lit(false));
        let delay = if rng.chance(Params::LIGHTNING_BURST_CHANCE) {
            Params::LIGHTNING_BURST_MIN_MS + rng.range(0.0, Params::LIGHTNING_BURST_SPREAD_MS)
        } else {
            Params::LIGHTNING_CALM_MIN_MS + rng.range(0.0, Params::LIGHTNING_CALM_SPREAD_MS)
        };
        timers.lightning = Some(Timer::once(delay));
    } else {
        lightning.lit = true;
        surface.style(lightning.visual, VisualStyle::Lit(true));
        timers.lightning = Some(Timer::once(Params::LIGHTNING_LIT_MS));
    }
}
