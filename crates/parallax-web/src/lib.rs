pub mod runner;

pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a simulation.
///
/// Generates:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (sim_init, sim_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use parallax_engine::*;
///
/// mod sim;
/// use sim::MySim;
///
/// parallax_web::export_sim!(MySim, "my-sim");
/// ```
///
/// # Arguments
///
/// - `$sim_type`: The struct type that implements `parallax_engine::Simulation`
/// - `$sim_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Simulation not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn sim_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let sim = <$sim_type>::new();
            let runner = $crate::SimRunner::new(sim);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $sim_name);
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json())
        }

        #[wasm_bindgen]
        pub fn get_ui_json() -> String {
            with_runner(|r| r.ui_json())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
