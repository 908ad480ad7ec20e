//=========================================================================
// Math Primitives
//=========================================================================
//
// Integer vector and rectangle types for a character-cell screen.
//
// Coordinates are terminal cells: x grows right, y grows down, origin at
// the top-left corner.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

//=== Vector2 =============================================================

/// Two-dimensional integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    /// (0, 0)
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// (1, 1)
    pub const ONE: Self = Self { x: 1, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Returns true if the cell lies inside the rectangle.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.position.x
            && point.y >= self.position.y
            && i64::from(point.x) < i64::from(self.position.x) + i64::from(self.size.x)
            && i64::from(point.y) < i64::from(self.position.y) + i64::from(self.size.y)
    }
}

//=========================================================================
// Tests
//=========================================================================
