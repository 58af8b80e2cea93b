//! Browser surface (wasm32 only)
//!
//! The page owns drawing and `requestAnimationFrame`; it calls `frame()` each
//! tick and stops rescheduling once `frame()` returns false.

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::settings::{Settings, particle_count_from_f64, seed_from_f64};
use crate::sim::{Simulator, Vector2};

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the panic hook and console logger once per page
#[wasm_bindgen(start)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Fails only if the host page already installed a logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Simulator handle exported to JavaScript
#[wasm_bindgen]
pub struct WebArena {
    sim: Simulator,
}

#[wasm_bindgen]
impl WebArena {
    /// Build an arena with `particle_count` particles, seeded from `seed`
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: f64, seed: f64) -> Result<WebArena, JsValue> {
        let defaults = Settings::default();
        let count = particle_count_from_f64(particle_count, &defaults).map_err(to_js)?;
        let seed = seed_from_f64(seed).map_err(to_js)?;
        let settings = Settings {
            particle_count: count,
            seed: Some(seed),
            ..defaults
        };
        let sim = Simulator::new(settings).map_err(to_js)?;
        Ok(WebArena { sim })
    }

    /// Build from a JSON settings document
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: &str) -> Result<WebArena, JsValue> {
        let settings = Settings::from_json(json).map_err(to_js)?;
        let sim = Simulator::new(settings).map_err(to_js)?;
        Ok(WebArena { sim })
    }

    /// Rebuild the population from a slider value
    pub fn configure(&mut self, particle_count: f64) -> Result<(), JsValue> {
        let count = particle_count_from_f64(particle_count, self.sim.settings()).map_err(to_js)?;
        self.sim.reconfigure(count).map_err(to_js)
    }

    /// True when the page should start its animation-frame loop
    pub fn start(&mut self) -> bool {
        self.sim.start()
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    pub fn kick(&mut self) {
        self.sim.kick();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// Run one frame; false means do not reschedule
    pub fn frame(&mut self) -> bool {
        self.sim.frame()
    }

    /// Pointer position in arena coordinates plus its movement delta
    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32) -> u32 {
        self.sim
            .on_pointer_move(Vector2::new(x, y), Vector2::new(dx, dy)) as u32
    }

    /// Interleaved x, y centers; index 0 is the highlighted particle
    pub fn positions(&self) -> Vec<f32> {
        self.sim
            .particles()
            .iter()
            .flat_map(|p| [p.position.x, p.position.y])
            .collect()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.sim.particles().len() as u32
    }

    #[wasm_bindgen(js_name = arenaBound)]
    pub fn arena_bound(&self) -> f32 {
        self.sim.settings().arena_bound
    }

    pub fn diameter(&self) -> f32 {
        self.sim.settings().diameter
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }
}
