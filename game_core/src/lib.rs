//! Fruit Pop game core
//!
//! Fruits fall from clouds; tap only the current target. Everything here is
//! deterministic for a given seed and frame sequence, and runs without a browser.

pub mod components;
pub mod config;
pub mod headless;
pub mod params;
pub mod resources;
pub mod session;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use surface::*;
