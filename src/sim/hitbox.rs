//! Axis-aligned hitbox geometry for the actor and hazards
//!
//! Screen space: x grows to the right, y grows downward, so `min` is the
//! top-left corner and `max` the bottom-right.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A closed axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Hitbox {
    /// Build a hitbox from its top-left corner and size
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Horizontal spans overlap (touching edges count)
    #[inline]
    pub fn overlaps_x(&self, other: &Hitbox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
    }

    /// Vertical spans overlap (touching edges count)
    #[inline]
    pub fn overlaps_y(&self, other: &Hitbox) -> bool {
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// Closed-interval overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
