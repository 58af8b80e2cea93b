//! Particle entity: integration and wall correction
//!
//! Each frame a particle first reacts to any wall it is touching
//! (`correct_walls`) and then advances by its velocity (`integrate`), which
//! clamps the position back into the arena.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Vector2;
use crate::settings::Settings;

/// Walls touched during a correction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub vertical: bool,
    /// Top or bottom wall
    pub horizontal: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.vertical || self.horizontal
    }
}

/// A simulated disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f32,
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// A particle at a random spot in the arena with the initial velocity
    pub fn random<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> Self {
        let mut particle = Self::new(Vector2::ZERO, Vector2::ZERO, settings.particle_mass);
        particle.randomize(rng, settings);
        particle
    }

    /// Current center, read once per frame by renderers
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Write back a velocity computed by collision resolution
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    /// Which walls the particle is touching right now
    pub fn wall_contact(&self, settings: &Settings) -> WallContact {
        let bound = settings.arena_bound;
        let tol = settings.wall_tolerance;
        WallContact {
            vertical: self.position.x > bound - tol || self.position.x <= 0.0,
            horizontal: self.position.y >= bound - tol || self.position.y <= 0.0,
        }
    }

    /// Damp and reverse velocity on wall contact
    ///
    /// A vertical wall reverses x (scaled by `x_wall_decay`) and nudges the
    /// particle off the wall by the new x velocity. A horizontal wall reverses
    /// y (scaled by `y_wall_bounce`) and also scales x by `-x_wall_decay`.
    /// Both may fire in the same frame at a corner.
    pub fn correct_walls(&mut self, settings: &Settings) -> WallContact {
        let contact = self.wall_contact(settings);

        if contact.vertical {
            self.velocity.x *= settings.x_wall_decay;
            self.position.x += self.velocity.x;
        }

        if contact.horizontal {
            self.velocity.y *= settings.y_wall_bounce;
            self.velocity.x *= -settings.x_wall_decay;
        }

        contact
    }

    /// Advance position by velocity, clamped to [0, arena_bound]
    pub fn integrate(&mut self, settings: &Settings) {
        // Kill residual jitter
        if self.velocity.x.abs() < settings.x_snap_threshold {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < settings.y_snap_threshold {
            self.velocity.y = 0.0;
        }

        self.position.x = advance_axis(self.position.x, self.velocity.x, settings.arena_bound);
        self.position.y = advance_axis(self.position.y, self.velocity.y, settings.arena_bound);
    }

    /// Add a random impulse in [kick_min, kick_max) to each velocity component
    pub fn kick<R: Rng + ?Sized>(&mut self, rng: &mut R, settings: &Settings) {
        let range = settings.kick_min..settings.kick_max;
        self.velocity.x += rng.random_range(range.clone());
        self.velocity.y += rng.random_range(range);
    }

    /// Teleport to a uniform random point in [0, arena_bound)² and reset velocity
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, settings: &Settings) {
        let bound = settings.arena_bound;
        self.position = Vector2::new(
            rng.random::<f32>() * bound,
            rng.random::<f32>() * bound,
        );
        self.velocity = settings.initial_velocity;
    }
}

#[inline]
fn advance_axis(pos: f32, vel: f32, bound: f32) -> f32 {
    let next = pos + vel;
    if next > bound { bound } else { next.max(0.0) }
}
