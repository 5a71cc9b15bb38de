//! # Point
//!
//! A single lattice cell address inside a 16x16x16 chunk. Each axis fits in
//! 4 bits, so a `Point` packs into a 12-bit integer for compact keys or
//! debug output.

use crate::error::ChunkError;

/// Highest valid value on any axis.
pub const MAX_COORD: u8 = 15;

/// An integer triple (x,y,z), each component in `[0,15]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Point {
    /// Construct a point. Panics via `debug_assert!` in debug builds if any
    /// component is outside `[0,15]`; undefined in release builds (see
    /// crate-level error handling docs). Prefer `try_new` when the inputs
    /// are not already known-good.
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!(x <= MAX_COORD, "x={x} out of range");
        debug_assert!(y <= MAX_COORD, "y={y} out of range");
        debug_assert!(z <= MAX_COORD, "z={z} out of range");
        Self { x, y, z }
    }

    /// Checked constructor: returns `Err` instead of asserting.
    pub fn try_new(x: u8, y: u8, z: u8) -> Result<Self, ChunkError> {
        if x > MAX_COORD {
            return Err(ChunkError::OutOfRange(x));
        }
        if y > MAX_COORD {
            return Err(ChunkError::OutOfRange(y));
        }
        if z > MAX_COORD {
            return Err(ChunkError::OutOfRange(z));
        }
        Ok(Self { x, y, z })
    }

    /// Pack into a 12-bit integer: `(x<<8) | (y<<4) | z`.
    pub fn pack(&self) -> u16 {
        ((self.x as u16) << 8) | ((self.y as u16) << 4) | (self.z as u16)
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Point) -> Point {
        Point::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Point) -> Point {
        Point::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

#[cfg(test)]
mod point_test;
