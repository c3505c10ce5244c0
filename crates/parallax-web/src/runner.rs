use parallax_engine::{
    FixedTimestep, FrameLayout, InputEvent, InputQueue, SimConfig, SimContext, Simulation,
};

/// Generic simulation runner that wires up the engine loop.
///
/// Each concrete simulation creates a `thread_local!` SimRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: SimConfig,
    layout: FrameLayout,
    initialized: bool,
    frame: u64,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = FrameLayout::from_config(&config);
        let ctx = SimContext::new(config.rng_seed);

        Self {
            sim,
            ctx,
            input: InputQueue::new(),
            timestep,
            layout,
            config,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.layout = FrameLayout::from_config(&self.config);
        self.sim.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: accumulate elapsed time and run fixed steps.
    ///
    /// Queued input is drained after the first step so stateful events such
    /// as toggles apply exactly once even when a long frame runs several
    /// catch-up steps.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.clear_frame_data();
            self.sim.update(&mut self.ctx, &self.input);
            self.input.drain();
            self.frame += 1;
        }

        let count = self.ctx.vectors.vertex_count();
        if count > self.layout.max_vector_vertices {
            log::warn!(
                "vector buffer overflow: {} vertices exceeds capacity {}",
                count,
                self.layout.max_vector_vertices
            );
        }
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    /// Current labels serialized as a JSON array.
    pub fn labels_json(&self) -> String {
        match self.ctx.labels.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("label serialization failed: {}", err);
                "[]".to_string()
            }
        }
    }

    /// Current UI snapshot serialized as JSON.
    pub fn ui_json(&self) -> String {
        match serde_json::to_string(&self.sim.ui_state()) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("ui state serialization failed: {}", err);
                "null".to_string()
            }
        }
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use parallax_engine::VectorColor;

    struct SquareSim {
        updates: u32,
    }

    impl SquareSim {
        fn new() -> Self {
            Self { updates: 0 }
        }
    }

    impl Simulation for SquareSim {
        fn init(&mut self, ctx: &mut SimContext) {
            ctx.vectors
                .fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        }

        fn update(&mut self, ctx: &mut SimContext, _input: &InputQueue) {
            self.updates += 1;
            ctx.vectors
                .fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        }
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = SimRunner::new(SquareSim::new());
        runner.tick(1.0);
        assert_eq!(runner.frame_counter(), 0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_redraws() {
        let mut runner = SimRunner::new(SquareSim::new());
        runner.init();
        assert!(runner.vector_vertex_count() > 0);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame_counter(), 1);
        // One rect = two triangles
        assert_eq!(runner.vector_vertex_count(), 6);

        // Slightly over three frames of elapsed time
        runner.tick(0.055);
        assert_eq!(runner.frame_counter(), 4);
    }

    #[test]
    fn input_applies_exactly_once_across_catchup_steps() {
        let mut runner = SimRunner::new(SquareSim::new());
        runner.init();

        runner.push_input(InputEvent::Custom {
            kind: 1,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        // Several catch-up steps in one host frame; the queue must be
        // empty after the first
        runner.tick(0.055);
        assert!(runner.input.is_empty());
    }

    #[test]
    fn json_accessors_have_defaults() {
        let mut runner = SimRunner::new(SquareSim::new());
        runner.init();
        runner.tick(1.0 / 60.0);

        assert_eq!(runner.labels_json(), "[]");
        assert_eq!(runner.ui_json(), "null");
    }

    #[test]
    fn layout_reflects_config() {
        let runner = SimRunner::new(SquareSim::new());
        assert_eq!(runner.max_vector_vertices(), 16384);
        assert_eq!(runner.world_width(), 800.0);
        assert_eq!(runner.world_height(), 600.0);
    }
}
