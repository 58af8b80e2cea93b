//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - No clocks; one `step()` is one frame
//! - Seeded RNG only (kick and reset)
//! - Stable iteration order (collection index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{
    CollisionResult, FALLBACK_NORMAL, Interaction, PhantomParticle, resolve_all_pairs,
    resolve_collision, resolve_pointer,
};
pub use particle::{Particle, WallContact};
pub use state::{RunState, Simulator};
pub use tick::{TickStats, tick};
pub use vector::Vector2;
