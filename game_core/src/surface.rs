//! Render surface and haptics capabilities
//!
//! The core never touches a concrete presentation API. Hosts implement
//! these traits over whatever they draw with (DOM, canvas, a test recorder).

use glam::Vec2;

use crate::config::{FruitKind, Weather};

/// Axis-aligned bounding box in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Opaque handle to a visual created by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u32);

/// What a visual depicts
#[derive(Debug, Clone, PartialEq)]
pub enum VisualKind {
    Cloud,
    Fruit {
        glyph: &'static str,
        color: &'static str,
    },
    Feedback {
        text: String,
        positive: bool,
    },
    Weather(Weather),
    Lightning,
    Witch {
        start_y_pct: f32,
        mid_y_pct: f32,
        duration_s: f32,
    },
}

impl VisualKind {
    pub fn fruit(kind: &FruitKind) -> Self {
        VisualKind::Fruit {
            glyph: kind.glyph,
            color: kind.color,
        }
    }
}

/// Transient styling applied to an existing visual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualStyle {
    /// Correct hit reaction
    Blast,
    /// Wrong hit reaction
    Wrong,
    /// Lightning on/off
    Lit(bool),
}

/// Presentation collaborator
pub trait RenderSurface {
    /// Surface size in the same units as positions
    fn size(&self) -> Vec2;
    fn create(&mut self, kind: VisualKind, pos: Vec2) -> VisualHandle;
    fn move_to(&mut self, handle: VisualHandle, pos: Vec2);
    fn style(&mut self, handle: VisualHandle, style: VisualStyle);
    /// Removing an unknown handle is a no-op
    fn remove(&mut self, handle: VisualHandle);
    /// Current on-screen bounds, `None` if the handle is gone
    fn bounds(&self, handle: VisualHandle) -> Option<Aabb>;
}

/// Vibration collaborator. Unsupported devices should do nothing.
pub trait Haptics {
    fn vibrate(&mut self, pattern: &[u32]);
}

/// Haptics for devices without a vibration motor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&mut self, _pattern: &[u32]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_inclusive_edges() {
        let aabb = Aabb::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(40.0, 40.0));
        assert!(aabb.contains(Vec2::new(10.0, 20.0)));
        assert!(aabb.contains(Vec2::new(50.0, 60.0)));
        assert!(aabb.contains(Vec2::new(30.0, 30.0)));
        assert!(!aabb.contains(Vec2::new(50.1, 30.0)));
        assert!(!aabb.contains(Vec2::new(30.0, 19.9)));
        assert_eq!(aabb.width(), 40.0);
    }
}
