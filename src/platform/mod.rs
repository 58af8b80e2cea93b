//! Platform abstraction layer
//!
//! Hosts that drive the simulator's frame loop:
//! - `headless`: native loop with a frame cap (binary, tests, benchmarks)
//! - `web`: wasm-bindgen surface for a browser page that owns
//!   `requestAnimationFrame` and drawing

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::FrameLoop;
