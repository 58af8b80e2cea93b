//! Simulator: owns the particle population and the run state
//!
//! The simulator never schedules itself. A host calls `start()` and then
//! drives `frame()` at its own cadence until `frame()` returns false.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{PhantomParticle, resolve_pointer};
use super::tick::{TickStats, tick};
use super::{Particle, Vector2};
use crate::error::Result;
use crate::settings::Settings;

/// Run state of the frame loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// A self-contained arena simulation
#[derive(Debug, Clone)]
pub struct Simulator {
    settings: Settings,
    particles: Vec<Particle>,
    run_state: RunState,
    rng: Pcg32,
    seed: u64,
    frame_count: u64,
}

impl Simulator {
    /// Create a stopped simulator with `settings.particle_count` random particles
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut sim = Self {
            particles: Vec::new(),
            run_state: RunState::Stopped,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            frame_count: 0,
            settings,
        };
        let count = sim.settings.particle_count;
        sim.reconfigure(count)?;

        log::info!(
            "Simulator created: seed={}, arena={}, particles={}",
            seed,
            sim.settings.arena_bound,
            sim.particles.len()
        );
        Ok(sim)
    }

    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(Settings::seeded(seed))
    }

    /// Create a simulator around an explicit population (starts stopped)
    ///
    /// Every particle must have a positive mass and a finite position and
    /// velocity.
    pub fn from_particles(mut settings: Settings, particles: Vec<Particle>) -> Result<Self> {
        settings.particle_count = particles.len();
        settings.validate()?;
        for (i, particle) in particles.iter().enumerate() {
            settings.check_particle(i, particle)?;
        }

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "Simulator created: seed={}, arena={}, particles={}",
            seed,
            settings.arena_bound,
            particles.len()
        );
        Ok(Self {
            settings,
            particles,
            run_state: RunState::Stopped,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            frame_count: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle highlighted by renderers
    pub fn first_particle(&self) -> Option<&Particle> {
        self.particles.first()
    }

    /// All centers in collection order
    pub fn positions(&self) -> Vec<Vector2> {
        self.particles.iter().map(Particle::position).collect()
    }

    /// Sum of mass * velocity over the population
    pub fn total_momentum(&self) -> Vector2 {
        self.particles
            .iter()
            .fold(Vector2::ZERO, |acc, p| acc + p.momentum())
    }

    /// Enter Running. Returns true only on the Stopped -> Running transition,
    /// which is when the host should begin scheduling `frame()`.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.run_state = RunState::Running;
        log::info!("Simulation started at frame {}", self.frame_count);
        true
    }

    /// Request a halt; the frame in progress (if any) still completes
    pub fn stop(&mut self) {
        if self.is_running() {
            log::info!("Simulation stopped at frame {}", self.frame_count);
        }
        self.run_state = RunState::Stopped;
    }

    /// Scheduled frame callback
    ///
    /// Runs one step and returns whether the host should schedule another.
    pub fn frame(&mut self) -> bool {
        self.step();
        self.is_running()
    }

    /// Advance exactly one frame regardless of run state
    pub fn step(&mut self) -> TickStats {
        let stats = tick(&mut self.particles, &self.settings);
        self.frame_count += 1;
        stats
    }

    /// Add a random impulse to every particle
    pub fn kick(&mut self) {
        for particle in &mut self.particles {
            particle.kick(&mut self.rng, &self.settings);
        }
        log::debug!("Kicked {} particles", self.particles.len());
    }

    /// Scatter every particle and reset its velocity
    pub fn reset(&mut self) {
        for particle in &mut self.particles {
            particle.randomize(&mut self.rng, &self.settings);
        }
        log::debug!("Reset {} particles", self.particles.len());
    }

    /// Discard the population and build `count` fresh random particles
    pub fn reconfigure(&mut self, count: usize) -> Result<()> {
        let count = self.settings.check_particle_count(count)?;

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(&mut self.rng, &self.settings));
        }
        self.particles = particles;
        self.settings.particle_count = count;

        log::info!("Particles: {}", count);
        Ok(())
    }

    /// Push particles away from the pointer
    ///
    /// One phantom is built for the event and resolved against every particle
    /// in order. Returns the number of particles it touched.
    pub fn on_pointer_move(&mut self, position: Vector2, pointer_velocity: Vector2) -> usize {
        let mut phantom = PhantomParticle::new(
            position,
            pointer_velocity,
            self.settings.pointer_mass,
            self.settings.pointer_diameter,
        );

        let mut touched = 0;
        for particle in &mut self.particles {
            if resolve_pointer(particle, &mut phantom).hit {
                touched += 1;
            }
        }

        log::debug!("Pointer at {} touched {} particles", position, touched);
        touched
    }
}
