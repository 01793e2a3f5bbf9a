//! Canonical triangles and normalization of triangulator output.

use crate::error::{GalleryError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A triangle as emitted by a triangulator: a ring of coordinates.
///
/// Closed rings repeat the first vertex as a fourth coordinate.
pub type RawTriangle<F> = Vec<Point2<F>>;

/// A triangle of the polygon triangulation, represented by three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    /// First vertex of the triangle.
    pub a: Point2<F>,
    /// Second vertex of the triangle.
    pub b: Point2<F>,
    /// Third vertex of the triangle.
    pub c: Point2<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// The three vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Computes the area of the triangle.
    pub fn area(&self) -> F {
        let two = F::one() + F::one();
        ((self.b - self.a).cross(self.c - self.a)).abs() / two
    }
}

/// Converts triangulator output into canonical triangles.
///
/// Only the first three coordinates of each raw triangle are kept, so closed
/// four-point rings are accepted as-is.
///
/// # Errors
///
/// * [`GalleryError::NoTriangles`] if `raw` is empty
/// * [`GalleryError::MalformedTriangle`] if any entry has fewer than 3 coordinates
pub fn normalize<F: Float>(raw: &[RawTriangle<F>]) -> Result<Vec<Triangle<F>>> {
    if raw.is_empty() {
        return Err(GalleryError::NoTriangles);
    }

    raw.iter()
        .enumerate()
        .map(|(index, coords)| match coords.as_slice() {
            [a, b, c, ..] => Ok(Triangle::new(*a, *b, *c)),
            _ => Err(GalleryError::MalformedTriangle {
                index,
                len: coords.len(),
            }),
        })
        .collect()
}

/// Computes the total area of a triangulation.
///
/// Matches the polygon area when the triangulation covers it exactly.
pub fn triangulation_area<F: Float>(triangles: &[Triangle<F>]) -> F {
    triangles
        .iter()
        .map(|t| t.area())
        .fold(F::zero(), |a, b| a + b)
}
