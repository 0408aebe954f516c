//! DOM-backed render surface and browser haptics

use std::collections::HashMap;

use game_core::{Aabb, Haptics, RenderSurface, VisualHandle, VisualKind, VisualStyle};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Navigator};

use crate::log;

/// Absolutely positioned `div`s inside the game container
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    elements: HashMap<u32, HtmlElement>,
    next_id: u32,
}

impl DomSurface {
    pub fn new(container_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element #{container_id}")))?
            .dyn_into::<HtmlElement>()?;

        Ok(Self {
            document,
            container,
            elements: HashMap::new(),
            next_id: 1,
        })
    }

    fn build(&self, kind: &VisualKind, pos: Vec2) -> Result<HtmlElement, JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        let style = el.style();

        match kind {
            VisualKind::Cloud => el.set_class_name("cloud"),
            VisualKind::Fruit { glyph, color } => {
                el.set_class_name("fruit");
                el.set_text_content(Some(*glyph));
                style.set_property("color", color)?;
            }
            VisualKind::Feedback { text, positive } => {
                el.set_class_name(if *positive {
                    "feedback positive"
                } else {
                    "feedback negative"
                });
                el.set_text_content(Some(text.as_str()));
            }
            VisualKind::Weather(weather) => {
                el.set_class_name(&format!("weather-effect {weather}"));
            }
            VisualKind::Lightning => el.set_class_name("lightning"),
            VisualKind::Witch {
                start_y_pct,
                mid_y_pct,
                duration_s,
            } => {
                el.set_class_name("witch");
                style.set_property("--start-y", &format!("{start_y_pct}%"))?;
                style.set_property("--mid-y", &format!("{mid_y_pct}%"))?;
                style.set_property("animation", &format!("flyAcross {duration_s}s linear forwards"))?;
            }
        }

        if matches!(
            kind,
            VisualKind::Cloud | VisualKind::Fruit { .. } | VisualKind::Feedback { .. }
        ) {
            style.set_property("left", &format!("{}px", pos.x))?;
            style.set_property("top", &format!("{}px", pos.y))?;
        }

        self.container.append_child(&el)?;
        Ok(el)
    }
}

impl RenderSurface for DomSurface {
    fn size(&self) -> Vec2 {
        let Some(window) = web_sys::window() else {
            return Vec2::ZERO;
        };
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Vec2::new(dim(window.inner_width()), dim(window.inner_height()))
    }

    fn create(&mut self, kind: VisualKind, pos: Vec2) -> VisualHandle {
        let id = self.next_id;
        self.next_id += 1;
        match self.build(&kind, pos) {
            Ok(el) => {
                self.elements.insert(id, el);
            }
            // The handle stays valid; every later call on it is a no-op
            Err(e) => log(&format!("Failed to create {kind:?}: {e:?}")),
        }
        VisualHandle(id)
    }

    fn move_to(&mut self, handle: VisualHandle, pos: Vec2) {
        if let Some(el) = self.elements.get(&handle.0) {
            let _ = el.style().set_property("left", &format!("{}px", pos.x));
            let _ = el.style().set_property("top", &format!("{}px", pos.y));
        }
    }

    fn style(&mut self, handle: VisualHandle, style: VisualStyle) {
        let Some(el) = self.elements.get(&handle.0) else {
            return;
        };
        let result = match style {
            VisualStyle::Blast => el.class_list().add_1("blast"),
            VisualStyle::Wrong => el.class_list().add_1("wrong"),
            VisualStyle::Lit(on) => el
                .style()
                .set_property("opacity", if on { "0.8" } else { "0" }),
        };
        if let Err(e) = result {
            log(&format!("Failed to style visual {}: {e:?}", handle.0));
        }
    }

    fn remove(&mut self, handle: VisualHandle) {
        if let Some(el) = self.elements.remove(&handle.0) {
            el.remove();
        }
    }

    fn bounds(&self, handle: VisualHandle) -> Option<Aabb> {
        let rect = self.elements.get(&handle.0)?.get_bounding_client_rect();
        Some(Aabb::from_origin_size(
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        ))
    }
}

/// `navigator.vibrate`; browsers without it simply ignore the call
pub struct WebHaptics {
    navigator: Navigator,
}

impl WebHaptics {
    pub fn new() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        Some(Self { navigator })
    }
}

impl Haptics for WebHaptics {
    fn vibrate(&mut self, pattern: &[u32]) {
        let pattern: js_sys::Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
        let _ = self.navigator.vibrate_with_pattern(&pattern);
    }
}
