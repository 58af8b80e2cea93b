//! Disc Arena - elastic discs bouncing in a square arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, particles, collisions, frame loop)
//! - `settings`: Arena and particle parameters, loadable from JSON
//! - `platform`: Frame-loop drivers (headless native, browser via wasm-bindgen)
//! - `error`: Crate error type

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{Settings, particle_count_from_f64, seed_from_f64};
pub use sim::{Particle, PhantomParticle, Simulator, Vector2};
