pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use crate::api::sim::{SimConfig, SimContext, Simulation};
pub use crate::bridge::protocol::FrameLayout;
pub use crate::core::rng::Rng;
pub use crate::core::schedule::{FrameScheduler, TaskHandle};
pub use crate::core::time::FixedTimestep;
pub use crate::core::timers::OneShotTimers;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::render::labels::{Label, LabelState, TextAlign};
pub use crate::render::vector::{VectorColor, VectorState, VectorVertex};
