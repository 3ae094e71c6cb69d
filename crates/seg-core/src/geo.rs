//! Planar coordinate type on the unit square.
//!
//! Positions use `f64`.  Every position the engine produces lies in
//! `[0, 1) × [0, 1)`: either drawn at initialisation or drawn during a
//! relocation search.

use rand::Rng;

/// A point on the unit square.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Draw a point uniformly from `[0, 1) × [0, 1)`.
    #[inline]
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.r#gen::<f64>(),
            y: rng.r#gen::<f64>(),
        }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` if both coordinates lie in `[0, 1)`.
    #[inline]
    pub fn in_unit_square(self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
