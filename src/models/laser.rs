//! Laser sources and required intersection points.
//!
//! Both live in expanded-lattice coordinates: `x` grows rightward and `y`
//! grows downward, with odd/odd positions being cell centers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A laser origin and its unit direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Laser {
    /// Origin column in the lattice
    pub x: i64,
    /// Origin row in the lattice
    pub y: i64,
    /// Horizontal step, one of -1, 0, 1
    pub dx: i64,
    /// Vertical step, one of -1, 0, 1
    pub dy: i64,
}

impl Laser {
    /// Creates a laser, rejecting direction components outside `-1..=1`.
    pub fn try_new(x: i64, y: i64, dx: i64, dy: i64) -> Result<Self, String> {
        for (name, value) in [("dx", dx), ("dy", dy)] {
            if !(-1..=1).contains(&value) {
                return Err(format!("{name} must be -1, 0 or 1 (got {value})"));
            }
        }
        Ok(Self { x, y, dx, dy })
    }

    /// The laser as `[x, y, dx, dy]`.
    #[must_use]
    pub const fn as_array(&self) -> [i64; 4] {
        [self.x, self.y, self.dx, self.dy]
    }

    /// Origin as a point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Laser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.dx, self.dy)
    }
}

/// A lattice coordinate some laser must pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Column in the lattice
    pub x: i64,
    /// Row in the lattice
    pub y: i64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
