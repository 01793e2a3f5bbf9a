//! Canonical vertex identity.
//!
//! Two points are the same graph vertex when their coordinates agree after
//! quantization to a fixed number of decimal places. Each coordinate is
//! multiplied by `10^decimals` and rounded half away from zero, giving an
//! integer pair that can be hashed, ordered and compared exactly.
//!
//! # Example
//!
//! ```
//! use art_gallery::{Point2, VertexKey};
//!
//! let a = VertexKey::from_point(Point2::new(0.1_f64 + 0.2, 1.0), 6).unwrap();
//! let b = VertexKey::from_point(Point2::new(0.3_f64, 1.0), 6).unwrap();
//!
//! // 0.1 + 0.2 != 0.3 in floating point, but both quantize to the same key
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "(0.300000, 1.000000)");
//! ```

use crate::error::{GalleryError, Result};
use crate::primitives::Point2;
use num_traits::{Float, ToPrimitive};
use std::fmt;

/// Default number of decimal places kept in a vertex key.
pub const DEFAULT_KEY_DECIMALS: u32 = 6;

/// Largest supported number of decimal places.
pub const MAX_KEY_DECIMALS: u32 = 15;

/// Fixed-precision identity of a polygon vertex.
///
/// Ordering is lexicographic on the scaled `(x, y)` pair, which gives the
/// coloring engine a deterministic vertex order for any graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey {
    x: i64,
    y: i64,
    decimals: u32,
}

impl VertexKey {
    /// Creates a key directly from scaled integer coordinates.
    ///
    /// `decimals` is clamped to [`MAX_KEY_DECIMALS`].
    #[inline]
    pub fn new(x: i64, y: i64, decimals: u32) -> Self {
        Self {
            x,
            y,
            decimals: decimals.min(MAX_KEY_DECIMALS),
        }
    }

    /// Quantizes a point into a key with `decimals` fractional digits.
    ///
    /// Fails with [`GalleryError::NonFiniteCoordinate`] for NaN or infinite
    /// coordinates, and for values whose scaled form does not fit in an `i64`.
    pub fn from_point<F: Float>(point: Point2<F>, decimals: u32) -> Result<Self> {
        let decimals = decimals.min(MAX_KEY_DECIMALS);
        let scale = 10f64.powi(decimals as i32);
        let x = quantize(point.x, scale)?;
        let y = quantize(point.y, scale)?;
        Ok(Self { x, y, decimals })
    }

    /// Scaled integer x coordinate.
    #[inline]
    pub fn scaled_x(&self) -> i64 {
        self.x
    }

    /// Scaled integer y coordinate.
    #[inline]
    pub fn scaled_y(&self) -> i64 {
        self.y
    }

    /// Number of decimal places this key was quantized with.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the quantized point this key stands for.
    pub fn to_point<F: Float>(&self) -> Point2<F> {
        let scale = 10f64.powi(self.decimals as i32);
        let x = F::from(self.x as f64 / scale).unwrap_or_else(F::nan);
        let y = F::from(self.y as f64 / scale).unwrap_or_else(F::nan);
        Point2::new(x, y)
    }
}

fn quantize<F: Float>(value: F, scale: f64) -> Result<i64> {
    let value = value.to_f64().ok_or(GalleryError::NonFiniteCoordinate)?;
    if !value.is_finite() {
        return Err(GalleryError::NonFiniteCoordinate);
    }
    (value * scale)
        .round()
        .to_i64()
        .ok_or(GalleryError::NonFiniteCoordinate)
}

fn write_fixed(f: &mut fmt::Formatter<'_>, scaled: i64, decimals: u32) -> fmt::Result {
    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    if decimals == 0 {
        return write!(f, "{sign}{magnitude}");
    }
    let divisor = 10u64.pow(decimals);
    write!(
        f,
        "{sign}{}.{:0width$}",
        magnitude / divisor,
        magnitude % divisor,
        width = decimals as usize
    )
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_fixed(f, self.x, self.decimals)?;
        f.write_str(", ")?;
        write_fixed(f, self.y, self.decimals)?;
        f.write_str(")")
    }
}
