//! Simulation settings
//!
//! Every physical constant of the arena lives here rather than in globals, so
//! arena size, disc size and wall response are plain parameters. Settings load
//! from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{Particle, Vector2};

/// Arena and particle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena side length; positions live in [0, arena_bound] on both axes
    pub arena_bound: f32,

    // === Particles ===
    /// Interaction diameter between two particles
    pub diameter: f32,
    /// Mass of every particle
    pub particle_mass: f32,
    /// Velocity given to freshly randomized particles
    pub initial_velocity: Vector2,
    /// Population built on creation
    pub particle_count: usize,
    /// Upper bound accepted by `reconfigure`
    pub max_particles: usize,

    // === Pointer phantom ===
    pub pointer_diameter: f32,
    pub pointer_mass: f32,

    // === Walls ===
    /// Multiplier applied to x velocity on vertical wall contact
    pub x_wall_decay: f32,
    /// Multiplier applied to y velocity on horizontal wall contact
    pub y_wall_bounce: f32,
    /// Distance from the far wall that already counts as contact
    pub wall_tolerance: f32,
    /// |v.x| below this snaps to zero
    pub x_snap_threshold: f32,
    /// |v.y| below this snaps to zero (0 disables)
    pub y_snap_threshold: f32,

    // === Kick ===
    pub kick_min: f32,
    pub kick_max: f32,

    /// RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_bound: 500.0,

            diameter: 10.0,
            particle_mass: 1.0,
            initial_velocity: Vector2::new(1.0, 1.0),
            particle_count: 10,
            max_particles: 2000,

            pointer_diameter: 60.0,
            pointer_mass: 10.0,

            x_wall_decay: -0.8,
            y_wall_bounce: -0.60,
            wall_tolerance: 0.1,
            x_snap_threshold: 1e-3,
            y_snap_threshold: 0.0,

            kick_min: 10.0,
            kick_max: 30.0,

            seed: None,
        }
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

fn finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

impl Settings {
    /// Settings with a fixed seed (reproducible runs and tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject anything that would poison the stepping loop
    pub fn validate(&self) -> Result<()> {
        positive("arena_bound", self.arena_bound)?;
        positive("diameter", self.diameter)?;
        positive("particle_mass", self.particle_mass)?;
        positive("pointer_diameter", self.pointer_diameter)?;
        positive("pointer_mass", self.pointer_mass)?;

        finite("initial_velocity.x", self.initial_velocity.x)?;
        finite("initial_velocity.y", self.initial_velocity.y)?;
        finite("x_wall_decay", self.x_wall_decay)?;
        finite("y_wall_bounce", self.y_wall_bounce)?;
        finite("wall_tolerance", self.wall_tolerance)?;
        finite("x_snap_threshold", self.x_snap_threshold)?;
        finite("y_snap_threshold", self.y_snap_threshold)?;
        finite("kick_min", self.kick_min)?;
        finite("kick_max", self.kick_max)?;

        if self.kick_min >= self.kick_max {
            return Err(Error::InvalidConfiguration(format!(
                "kick range [{}, {}) is empty",
                self.kick_min, self.kick_max
            )));
        }
        self.check_particle_count(self.particle_count)?;
        Ok(())
    }

    /// Reject a caller-built particle the stepping loop could not handle
    pub fn check_particle(&self, index: usize, particle: &Particle) -> Result<()> {
        positive(&format!("particle {index} mass"), particle.mass)?;
        finite(&format!("particle {index} position.x"), particle.position.x)?;
        finite(&format!("particle {index} position.y"), particle.position.y)?;
        finite(&format!("particle {index} velocity.x"), particle.velocity.x)?;
        finite(&format!("particle {index} velocity.y"), particle.velocity.y)?;
        Ok(())
    }

    /// Check a requested population against `max_particles`
    pub fn check_particle_count(&self, count: usize) -> Result<usize> {
        if count > self.max_particles {
            return Err(Error::InvalidConfiguration(format!(
                "particle count {count} exceeds maximum {}",
                self.max_particles
            )));
        }
        Ok(count)
    }
}

/// Convert a raw host value (slider, JS number) into a particle count
pub fn particle_count_from_f64(raw: f64, settings: &Settings) -> Result<usize> {
    if !raw.is_finite() {
        return Err(Error::InvalidConfiguration(format!(
            "particle count must be finite, got {raw}"
        )));
    }
    if raw < 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "particle count must be >= 0, got {raw}"
        )));
    }
    if raw.fract() != 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "particle count must be a whole number, got {raw}"
        )));
    }
    if raw > settings.max_particles as f64 {
        return Err(Error::InvalidConfiguration(format!(
            "particle count {raw} exceeds maximum {}",
            settings.max_particles
        )));
    }
    Ok(raw as usize)
}

/// Convert a raw host value (JS number) into an RNG seed
pub fn seed_from_f64(raw: f64) -> Result<u64> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 || raw >= u64::MAX as f64 {
        return Err(Error::InvalidConfiguration(format!(
            "seed must be a non-negative whole number, got {raw}"
        )));
    }
    Ok(raw as u64)
}
