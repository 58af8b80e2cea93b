//! One simulation frame
//!
//! Walls first, then integration, then sequential pairwise resolution. No
//! clock is read here: the same particles and settings always produce the
//! same frame.

use super::Particle;
use super::collision::resolve_all_pairs;
use crate::settings::Settings;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles that touched at least one wall
    pub wall_contacts: usize,
    /// Overlapping pairs resolved
    pub pair_contacts: usize,
}

/// Advance `particles` by one frame
pub fn tick(particles: &mut [Particle], settings: &Settings) -> TickStats {
    let mut stats = TickStats::default();

    for particle in particles.iter_mut() {
        if particle.correct_walls(settings).any() {
            stats.wall_contacts += 1;
        }
        particle.integrate(settings);
    }

    stats.pair_contacts = resolve_all_pairs(particles, settings.diameter);
    stats
}
