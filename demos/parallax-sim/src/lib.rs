use parallax_engine::*;
use wasm_bindgen::prelude::*;

mod scene;
mod sim;
mod state;
use sim::ParallaxSim;

parallax_web::export_sim!(ParallaxSim, "parallax-sim");
