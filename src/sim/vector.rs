//! 2D value vector used throughout the simulation
//!
//! Thin value type over `glam::Vec2`. Every operation returns a new vector;
//! the fallible ones (`divide`, `normalize`) report an exact zero divisor
//! instead of producing infinities.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D vector (position, velocity or collision normal)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Vector2) -> Vector2 {
        (Vec2::from(self) + Vec2::from(other)).into()
    }

    #[inline]
    pub fn subtract(self, other: Vector2) -> Vector2 {
        (Vec2::from(self) - Vec2::from(other)).into()
    }

    #[inline]
    pub fn scale(self, scalar: f32) -> Vector2 {
        (Vec2::from(self) * scalar).into()
    }

    /// Divide both components by `scalar`
    pub fn divide(self, scalar: f32) -> Result<Vector2> {
        if scalar == 0.0 {
            return Err(Error::DivideByZero { what: "divide" });
        }
        Ok((Vec2::from(self) / scalar).into())
    }

    #[inline]
    pub fn dot(self, other: Vector2) -> f32 {
        Vec2::from(self).dot(other.into())
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        Vec2::from(self).length()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        Vec2::from(self).length_squared()
    }

    /// Unit vector in the same direction
    ///
    /// Fails only for an exactly zero vector; tiny vectors still normalize.
    pub fn normalize(self) -> Result<Vector2> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(Error::DivideByZero { what: "normalize" });
        }
        self.divide(mag)
    }
}

impl From<Vec2> for Vector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
