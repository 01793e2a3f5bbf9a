//! Triangulation boundary.
//!
//! Triangulating the polygon is delegated to a [`Triangulator`]. Whatever it
//! produces is passed through [`normalize`] to obtain canonical [`Triangle`]s
//! for the graph builder. [`EarClipping`] is the built-in triangulator.
//!
//! # Example
//!
//! ```
//! use art_gallery::polygon::Polygon;
//! use art_gallery::triangulation::{normalize, EarClipping, Triangulator};
//! use art_gallery::Point2;
//!
//! let square = Polygon::from_vertices(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ])
//! .unwrap();
//!
//! let raw = EarClipping.triangulate(&square.ring().unwrap()).unwrap();
//! let triangles = normalize(&raw).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

mod ear_clip;
mod triangle;

pub use ear_clip::EarClipping;
pub use triangle::{normalize, triangulation_area, RawTriangle, Triangle};

use crate::error::Result;
use crate::primitives::Point2;
use num_traits::Float;

/// An external polygon triangulator.
///
/// `ring` is the closed polygon boundary with the first vertex repeated at
/// the end. Implementations return one coordinate ring per triangle; only
/// the first three coordinates of each ring are used.
pub trait Triangulator<F: Float> {
    /// Decomposes the polygon bounded by `ring` into triangles.
    fn triangulate(&self, ring: &[Point2<F>]) -> Result<Vec<RawTriangle<F>>>;
}

impl<F, T> Triangulator<F> for &T
where
    F: Float,
    T: Triangulator<F> + ?Sized,
{
    fn triangulate(&self, ring: &[Point2<F>]) -> Result<Vec<RawTriangle<F>>> {
        (**self).triangulate(ring)
    }
}
