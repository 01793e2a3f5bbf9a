//! 2D vector type for edge directions.

use num_traits::Float;

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// 2D cross product: positive when `other` turns counter-clockwise from
    /// `self`, zero when the two are parallel.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert_eq!(east.cross(north), 1.0);
        assert_eq!(north.cross(east), -1.0);
        assert_eq!(east.cross(Vec2::new(-4.0, 0.0)), 0.0);
    }
}
