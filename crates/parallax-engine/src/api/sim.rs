use serde_json::Value;

use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::render::labels::LabelState;
use crate::render::vector::VectorState;

/// Configuration for the runner, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in CSS pixels at startup.
    pub world_width: f32,
    /// World height in CSS pixels at startup.
    pub world_height: f32,
    /// Maximum number of vector vertices per frame (default: 16384).
    pub max_vector_vertices: usize,
    /// Seed for the per-frame scene RNG.
    pub rng_seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 16384,
            rng_seed: 42,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Set up initial state and emit the first frame.
    fn init(&mut self, ctx: &mut SimContext);

    /// One fixed-timestep update: consume input, advance state, redraw.
    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue);

    /// Snapshot of host-facing UI state (readouts, widget state).
    /// Serialized to JSON by the bridge each frame.
    fn ui_state(&self) -> Value {
        Value::Null
    }
}

/// Mutable access to the drawing surfaces, passed to init and update.
///
/// Simulations draw by recording commands into `vectors` and `labels`;
/// the host consumes the recorded buffers after each tick, which also
/// lets tests inspect a frame without a real display.
pub struct SimContext {
    pub vectors: VectorState,
    pub labels: LabelState,
    pub rng: Rng,
}

impl SimContext {
    pub fn new(seed: u64) -> Self {
        Self {
            vectors: VectorState::new(),
            labels: LabelState::new(),
            rng: Rng::new(seed),
        }
    }

    /// Clear per-frame command buffers. Called by the runner before each
    /// update so every frame is a full redraw.
    pub fn clear_frame_data(&mut self) {
        self.vectors.clear();
        self.labels.clear();
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::labels::TextAlign;
    use glam::Vec2;

    #[test]
    fn clear_frame_data_resets_both_buffers() {
        let mut ctx = SimContext::new(1);
        ctx.vectors
            .fill_circle(Vec2::new(10.0, 10.0), 5.0, crate::VectorColor::WHITE);
        ctx.labels
            .text(0.0, 0.0, 12.0, false, "#FFFFFF", TextAlign::Center, "hi");
        assert!(ctx.vectors.vertex_count() > 0);
        assert_eq!(ctx.labels.len(), 1);

        ctx.clear_frame_data();
        assert_eq!(ctx.vectors.vertex_count(), 0);
        assert!(ctx.labels.is_empty());
    }

    #[test]
    fn default_config_is_sane() {
        let config = SimConfig::default();
        assert!(config.fixed_dt > 0.0);
        assert!(config.max_vector_vertices > 0);
    }
}
