//! Plain 2D geometry shared by the simulation and the renderer.
//!
//! Entities (player, ghosts) are axis-aligned squares addressed by their
//! top-left corner and side length; hallways and portals are rectangles.

use std::ops::{Add, Mul, Sub};

/// Collision radii are shrunk by this factor so grazing a ghost is forgiven.
pub const CIRCLE_LENIENCY: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 0.0 { Some(Vec2::new(self.x / len, self.y / len)) } else { None }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle (top-left corner + extent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Bounding rect of a square entity.
    pub const fn square(pos: Vec2, size: f64) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap test: rects that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Center of a square entity.
pub fn center(pos: Vec2, size: f64) -> Vec2 {
    Vec2::new(pos.x + size / 2.0, pos.y + size / 2.0)
}

/// Circle test between two square entities using their inscribed circles,
/// shrunk by [`CIRCLE_LENIENCY`].
pub fn circles_overlap(a_pos: Vec2, a_size: f64, b_pos: Vec2, b_size: f64) -> bool {
    let distance = center(a_pos, a_size).distance(center(b_pos, b_size));
    let sum_radii = (a_size + b_size) / 2.0;
    distance < sum_radii * CIRCLE_LENIENCY
}

/// Clamp a square entity so it stays fully inside `bounds`.
///
/// The lower bound wins when the entity is larger than the bounds.
pub fn clamp_square(pos: Vec2, size: f64, bounds: &Rect) -> Vec2 {
    let x = pos.x.min(bounds.right() - size).max(bounds.x);
    let y = pos.y.min(bounds.bottom() - size).max(bounds.y);
    Vec2::new(x, y)
}
