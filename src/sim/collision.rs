//! Pairwise collision detection and response
//!
//! Two discs overlap when their centers are within the interaction diameter.
//! Response is two-part: push both centers apart along the contact normal,
//! then exchange momentum along that normal with a 1-D elastic impulse.

use serde::{Deserialize, Serialize};

use super::{Particle, Vector2};

/// Normal used when two centers coincide exactly
pub const FALLBACK_NORMAL: Vector2 = Vector2::X;

/// What the second body of a collision is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    /// Two simulated particles; both velocities are written back
    Particle,
    /// A particle against the pointer phantom; only the particle's velocity changes
    Pointer,
}

/// Transient particle standing in for the pointer
///
/// Built once per pointer event and discarded after it has been resolved
/// against every particle.
#[derive(Debug, Clone, PartialEq)]
pub struct PhantomParticle {
    pub body: Particle,
    /// Interaction diameter used against real particles
    pub diameter: f32,
}

impl PhantomParticle {
    pub fn new(position: Vector2, velocity: Vector2, mass: f32, diameter: f32) -> Self {
        Self {
            body: Particle::new(position, velocity, mass),
            diameter,
        }
    }
}

/// Result of a collision check
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether the discs overlapped
    pub hit: bool,
    /// Unit normal from the second body toward the first
    pub normal: Vector2,
    /// Overlap depth removed by positional correction
    pub penetration: f32,
    /// Centers coincided and `FALLBACK_NORMAL` was used
    pub used_fallback_normal: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vector2::ZERO,
            penetration: 0.0,
            used_fallback_normal: false,
        }
    }
}

/// Detect and resolve overlap between `a` and `b`
///
/// Both positions are always corrected. `a`'s velocity is always written
/// back; `b`'s only for `Interaction::Particle`.
pub fn resolve_collision(
    a: &mut Particle,
    b: &mut Particle,
    diameter: f32,
    interaction: Interaction,
) -> CollisionResult {
    let offset = a.position - b.position;
    let distance = offset.magnitude();

    if distance > diameter {
        return CollisionResult::miss();
    }

    let penetration = diameter - distance;

    let (normal, used_fallback_normal) = match offset.normalize() {
        Ok(n) => (n, false),
        Err(e) => {
            log::trace!("coincident centers at {}: {e}, using fallback normal", a.position);
            (FALLBACK_NORMAL, true)
        }
    };

    // Positional correction, split evenly
    let correction = normal * (penetration / 2.0);
    a.position = a.position + correction;
    b.position = b.position - correction;

    // Elastic impulse along the normal
    let (v1, v2) = (a.velocity, b.velocity);
    let relative_velocity = v1 - v2;
    let impulse = 2.0 * relative_velocity.dot(normal) / (a.mass + b.mass);

    a.set_velocity(v1 - normal * (impulse * b.mass));
    if interaction == Interaction::Particle {
        b.set_velocity(v2 + normal * (impulse * a.mass));
    }

    CollisionResult {
        hit: true,
        normal,
        penetration,
        used_fallback_normal,
    }
}

/// Resolve a particle against the pointer phantom
pub fn resolve_pointer(particle: &mut Particle, phantom: &mut PhantomParticle) -> CollisionResult {
    resolve_collision(
        particle,
        &mut phantom.body,
        phantom.diameter,
        Interaction::Pointer,
    )
}

/// Resolve every unordered pair (i < j) in ascending order
///
/// Sequential on purpose: a particle's velocity after pair (0, 1) is what
/// pair (0, 2) sees. Returns the number of contacts.
pub fn resolve_all_pairs(particles: &mut [Particle], diameter: f32) -> usize {
    let mut contacts = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_collision(a, b, diameter, Interaction::Particle).hit {
                contacts += 1;
            }
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(x: f32, y: f32, vx: f32, vy: f32, mass: f32) -> Particle {
        Particle::new(Vector2::new(x, y), Vector2::new(vx, vy), mass)
    }

    #[test]
    fn test_head_on_equal_mass_exchanges_velocity() {
        let mut a = disc(100.0, 100.0, 10.0, 0.0, 1.0);
        let mut b = disc(108.0, 100.0, -10.0, 0.0, 1.0);

        let result = resolve_collision(&mut a, &mut b, 10.0, Interaction::Particle);
        assert!(result.hit);
        assert!((result.penetration - 2.0).abs() < 1e-5);
        // Normal points from b toward a
        assert!((result.normal.x - -1.0).abs() < 1e-6);

        assert!((a.velocity.x - -10.0).abs() < 1e-4);
        assert!((b.velocity.x - 10.0).abs() < 1e-4);
        assert!(a.velocity.y.abs() < 1e-6 && b.velocity.y.abs() < 1e-6);

        // Pushed apart to exactly one diameter
        assert!((a.position.x - 99.0).abs() < 1e-4);
        assert!((b.position.x - 109.0).abs() < 1e-4);
    }

    #[test]
    fn test_momentum_conserved() {
        let mut a = disc(200.0, 200.0, 3.0, -1.0, 1.0);
        let mut b = disc(205.0, 204.0, -2.0, 4.0, 2.5);
        let before = a.momentum() + b.momentum();

        assert!(resolve_collision(&mut a, &mut b, 10.0, Interaction::Particle).hit);
        let after = a.momentum() + b.momentum();
        assert!((before - after).magnitude() < 1e-4);
    }

    #[test]
    fn test_touching_at_exact_diameter_is_a_hit() {
        let mut a = disc(0.0, 0.0, 1.0, 0.0, 1.0);
        let mut b = disc(10.0, 0.0, 0.0, 0.0, 1.0);
        let result = resolve_collision(&mut a, &mut b, 10.0, Interaction::Particle);
        assert!(result.hit);
        assert_eq!(result.penetration, 0.0);
    }

    #[test]
    fn test_separated_discs_untouched() {
        let mut a = disc(100.0, 100.0, 1.0, 0.0, 1.0);
        let mut b = disc(120.0, 100.0, -1.0, 0.0, 1.0);
        let (a0, b0) = (a.clone(), b.clone());

        let result = resolve_collision(&mut a, &mut b, 10.0, Interaction::Particle);
        assert_eq!(result, CollisionResult::miss());
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_coincident_centers_use_fallback_normal() {
        let mut a = disc(50.0, 50.0, 1.0, 0.0, 1.0);
        let mut b = disc(50.0, 50.0, -1.0, 0.0, 1.0);

        let result = resolve_collision(&mut a, &mut b, 10.0, Interaction::Particle);
        assert!(result.hit);
        assert!(result.used_fallback_normal);
        assert_eq!(result.normal, FALLBACK_NORMAL);

        assert!((a.position.x - 55.0).abs() < 1e-5);
        assert!((b.position.x - 45.0).abs() < 1e-5);
        assert!(a.velocity.x.is_finite() && b.velocity.x.is_finite());
        assert!((a.velocity.x - -1.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_leaves_phantom_velocity() {
        let mut p = disc(100.0, 100.0, 0.0, 0.0, 1.0);
        let mut phantom =
            PhantomParticle::new(Vector2::new(70.0, 100.0), Vector2::new(5.0, 0.0), 10.0, 60.0);

        let result = resolve_pointer(&mut p, &mut phantom);
        assert!(result.hit);
        assert_eq!(phantom.body.velocity, Vector2::new(5.0, 0.0));
        // Heavy phantom drives the particle along +x
        assert!(p.velocity.x > 0.0);
        // impulse = 2 * (0 - 5) * 1 / 11; v1 = 0 - (-1 * impulse * 10)
        assert!((p.velocity.x - 100.0 / 11.0).abs() < 1e-4);
        // Phantom position is still corrected
        assert!((phantom.body.position.x - 55.0).abs() < 1e-4);
    }

    #[test]
    fn test_all_pairs_is_order_sensitive() {
        // Particle 0 touches both 1 and 2; the (0, 1) result feeds (0, 2)
        let start = vec![
            disc(100.0, 100.0, 0.0, 0.0, 1.0),
            disc(109.0, 100.0, -4.0, 0.0, 1.0),
            disc(91.0, 100.0, 4.0, 0.0, 1.0),
        ];

        let mut particles = start.clone();
        let contacts = resolve_all_pairs(&mut particles, 10.0);
        assert_eq!(contacts, 2);

        // Ascending order resolved by hand: (0, 1), (0, 2), (1, 2)
        let [mut p0, mut p1, mut p2] = [start[0].clone(), start[1].clone(), start[2].clone()];
        resolve_collision(&mut p0, &mut p1, 10.0, Interaction::Particle);
        resolve_collision(&mut p0, &mut p2, 10.0, Interaction::Particle);
        resolve_collision(&mut p1, &mut p2, 10.0, Interaction::Particle);
        assert_eq!(particles, vec![p0.clone(), p1, p2]);
        assert!((p0.velocity.x - 4.0).abs() < 1e-4);

        // Swapping the first two pairs sends particle 0 the other way
        let [mut q0, mut q1, mut q2] = [start[0].clone(), start[1].clone(), start[2].clone()];
        resolve_collision(&mut q0, &mut q2, 10.0, Interaction::Particle);
        resolve_collision(&mut q0, &mut q1, 10.0, Interaction::Particle);
        resolve_collision(&mut q1, &mut q2, 10.0, Interaction::Particle);
        assert!((q0.velocity.x - -4.0).abs() < 1e-4);
        assert_ne!(q0.velocity, particles[0].velocity);

        let total: Vector2 = particles
            .iter()
            .fold(Vector2::ZERO, |acc, p| acc + p.momentum());
        assert!(total.magnitude() < 1e-4);
    }
}
