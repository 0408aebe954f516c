pub mod animator;
pub mod gc;
pub mod hit_test;
pub mod scoring;
pub mod spawner;
pub mod target;
pub mod weather;
pub mod witch;

pub use animator::*;
pub use gc::*;
pub use hit_test::*;
pub use scoring::*;
pub use spawner::*;
pub use target::*;
pub use weather::*;
pub use witch::*;
