//! In-memory surface and haptics for running the game without a browser
//!
//! Visuals keep their kind, position and applied styles so simulations and
//! tests can inspect what a real host would have drawn.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use glam::Vec2;

use crate::surface::{Aabb, Haptics, RenderSurface, VisualHandle, VisualKind, VisualStyle};

pub const FRUIT_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const CLOUD_SIZE: Vec2 = Vec2::new(100.0, 60.0);

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessVisual {
    pub kind: VisualKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub styles: Vec<VisualStyle>,
}

impl HeadlessVisual {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.pos, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: Vec2,
    next_id: u32,
    visuals: BTreeMap<u32, HeadlessVisual>,
}

impl HeadlessSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            next_id: 1,
            visuals: BTreeMap::new(),
        }
    }

    pub fn get(&self, handle: VisualHandle) -> Option<&HeadlessVisual> {
        self.visuals.get(&handle.0)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&VisualKind) -> bool) -> usize {
        self.visuals.values().filter(|v| pred(&v.kind)).count()
    }

    fn default_size(kind: &VisualKind) -> Vec2 {
        match kind {
            VisualKind::Cloud => CLOUD_SIZE,
            VisualKind::Fruit { .. } => FRUIT_SIZE,
            _ => Vec2::ZERO,
        }
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn create(&mut self, kind: VisualKind, pos: Vec2) -> VisualHandle {
        let id = self.next_id;
        self.next_id += 1;
        let size = Self::default_size(&kind);
        self.visuals.insert(
            id,
            HeadlessVisual {
                kind,
                pos,
                size,
                styles: Vec::new(),
            },
        );
        VisualHandle(id)
    }

    fn move_to(&mut self, handle: VisualHandle, pos: Vec2) {
        if let Some(visual) = self.visuals.get_mut(&handle.0) {
            visual.pos = pos;
        }
    }

    fn style(&mut self, handle: VisualHandle, style: VisualStyle) {
        if let Some(visual) = self.visuals.get_mut(&handle.0) {
            visual.styles.push(style);
        }
    }

    fn remove(&mut self, handle: VisualHandle) {
        self.visuals.remove(&handle.0);
    }

    fn bounds(&self, handle: VisualHandle) -> Option<Aabb> {
        self.visuals.get(&handle.0).map(HeadlessVisual::bounds)
    }
}

/// Haptics that remember every pattern requested
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    pub patterns: Vec<Vec<u32>>,
}

impl Haptics for RecordingHaptics {
    fn vibrate(&mut self, pattern: &[u32]) {
        self.patterns.push(pattern.to_vec());
    }
}

// Shared handles let a host keep inspecting a surface it handed to a session.

impl<S: RenderSurface> RenderSurface for Rc<RefCell<S>> {
    fn size(&self) -> Vec2 {
        self.borrow().size()
    }

    fn create(&mut self, kind: VisualKind, pos: Vec2) -> VisualHandle {
        self.borrow_mut().create(kind, pos)
    }

    fn move_to(&mut self, handle: VisualHandle, pos: Vec2) {
        self.borrow_mut().move_to(handle, pos)
    }

    fn style(&mut self, handle: VisualHandle, style: VisualStyle) {
        self.borrow_mut().style(handle, style)
    }

    fn remove(&mut self, handle: VisualHandle) {
        self.borrow_mut().remove(handle)
    }

    fn bounds(&self, handle: VisualHandle) -> Option<Aabb> {
        self.borrow().bounds(handle)
    }
}

impl<H: Haptics> Haptics for Rc<RefCell<H>> {
    fn vibrate(&mut self, pattern: &[u32]) {
        self.borrow_mut().vibrate(pattern)
    }
}
