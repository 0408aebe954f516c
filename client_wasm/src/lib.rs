//! Browser client for Fruit Pop
//!
//! Wraps a `game_core::Session` in a JS class. JS owns the
//! requestAnimationFrame loop and the pointer listeners and forwards them
//! here; the DOM is only touched through `dom::DomSurface`.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use game::FruitGame;

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
mod game {
    use game_core::{
        Config, Difficulty, GameOptions, GameRng, Haptics, NoHaptics, Session, Weather,
    };
    use glam::Vec2;
    use wasm_bindgen::prelude::*;

    use crate::dom::{DomSurface, WebHaptics};
    use crate::input::{is_mobile, parse_button};
    use crate::log;

    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        crate::logging::init();
    }

    /// One game bound to a container element
    #[wasm_bindgen]
    pub struct FruitGame {
        session: Session,
        mobile: bool,
    }

    #[wasm_bindgen]
    impl FruitGame {
        #[wasm_bindgen(constructor)]
        pub fn new(container_id: &str) -> Result<FruitGame, JsValue> {
            let surface = DomSurface::new(container_id)?;

            let user_agent = web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .unwrap_or_default();
            let mobile = is_mobile(&user_agent);

            let haptics: Box<dyn Haptics> = match (mobile, WebHaptics::new()) {
                (true, Some(haptics)) => Box::new(haptics),
                _ => Box::new(NoHaptics),
            };

            log(&format!("Fruit Pop ready (mobile: {mobile})"));
            Ok(Self {
                session: Session::new(
                    Box::new(surface),
                    haptics,
                    Config::new(),
                    GameRng::from_entropy(),
                ),
                mobile,
            })
        }

        #[wasm_bindgen(getter)]
        pub fn mobile(&self) -> bool {
            self.mobile
        }

        #[wasm_bindgen(getter)]
        pub fn score(&self) -> u32 {
            self.session.score()
        }

        #[wasm_bindgen(getter)]
        pub fn state(&self) -> String {
            self.session.state().name().to_string()
        }

        pub fn start(&mut self) -> bool {
            self.session.start()
        }

        pub fn show_options(&mut self) -> bool {
            self.session.show_options()
        }

        /// `{"difficulty": "hard", "weather": "storm"}`; missing fields take defaults
        pub fn save_options(&mut self, options_json: &str) -> Result<bool, JsValue> {
            let options: GameOptions = serde_json::from_str(options_json)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?;
            Ok(self.session.save_options(options))
        }

        pub fn return_home(&mut self) {
            self.session.return_home();
        }

        pub fn set_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
            let difficulty: Difficulty = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
            self.session.set_difficulty(difficulty);
            Ok(())
        }

        pub fn set_weather(&mut self, name: &str) -> Result<(), JsValue> {
            let weather: Weather = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
            self.session.set_weather(weather);
            Ok(())
        }

        /// Called from requestAnimationFrame with the time since the last frame
        pub fn frame(&mut self, dt_ms: f32) {
            self.session.step(dt_ms);
        }

        /// Click or touch at client coordinates. Returns true if a fruit was hit.
        pub fn tap(&mut self, x: f32, y: f32) -> bool {
            self.session.tap(Vec2::new(x, y)).is_some()
        }

        /// Virtual button press ("left" / "right")
        pub fn press(&mut self, button: &str) -> Result<bool, JsValue> {
            let button = parse_button(button)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown button: {button}")))?;
            Ok(self.session.press(button).is_some())
        }

        /// Pending UI events as a JSON array
        pub fn drain_events(&mut self) -> Result<String, JsValue> {
            let events = self.session.drain_events();
            serde_json::to_string(&events)
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize events: {e}")))
        }
    }
}
