use glam::Vec2;

use crate::config::FruitKind;
use crate::surface::VisualHandle;

/// Fruit component - one falling, clickable fruit
#[derive(Debug, Clone, Copy)]
pub struct Fruit {
    pub kind: &'static FruitKind,
    pub pos: Vec2,
    pub speed: f32, // units per tick, before the difficulty cap
    pub seq: u64,   // spawn order, higher = newer
}

impl Fruit {
    pub fn new(kind: &'static FruitKind, pos: Vec2, speed: f32, seq: u64) -> Self {
        Self {
            kind,
            pos,
            speed,
            seq,
        }
    }

    /// Speed actually applied this tick
    pub fn effective_speed(&self, max_fall_speed: f32) -> f32 {
        self.speed.min(max_fall_speed)
    }
}

/// Visual owned exclusively by the entity; released on despawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual(pub VisualHandle);

/// Feedback glyph marker ("+10", "-7")
#[derive(Debug, Clone, Copy, Default)]
pub struct Feedback;

/// Entity is despawned once this runs out. A fruit with a lifetime has been hit.
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub t_left: f32, // ms
}

impl Lifetime {
    pub fn new(t_left: f32) -> Self {
        Self { t_left }
    }

    pub fn is_expired(&self) -> bool {
        self.t_left <= 0.0
    }
}
