//! Core polygon type with incremental, validated construction.

use super::validate::can_extend;
use crate::error::{GalleryError, Result};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Minimum number of vertices of a closed polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A polygon boundary built one vertex at a time.
///
/// Vertices are kept in insertion order. Consecutive vertices form boundary
/// edges; once the polygon is closed an implicit edge joins the last vertex
/// back to the first. Every committed edge has passed [`can_extend`], so the
/// boundary never crosses itself. After [`close`](Self::close) succeeds the
/// polygon is frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
    complete: bool,
}

impl<F: Float> Polygon<F> {
    /// Creates an empty, open polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            complete: false,
        }
    }

    /// Builds a closed polygon, validating every edge on the way.
    ///
    /// Equivalent to pushing each vertex in order and then closing.
    pub fn from_vertices(vertices: &[Point2<F>]) -> Result<Self> {
        let mut polygon = Self::empty();
        for &vertex in vertices {
            polygon.try_push(vertex)?;
        }
        polygon.close()?;
        Ok(polygon)
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true once the closing edge has been accepted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The accepted vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Returns true if `point` may be appended as the next vertex.
    ///
    /// Does not modify the polygon.
    pub fn accepts(&self, point: Point2<F>) -> bool {
        self.check_push(point).is_ok()
    }

    /// Appends a vertex after validating the edge that joins it to the boundary.
    ///
    /// # Errors
    ///
    /// * [`GalleryError::PolygonAlreadyComplete`] once the polygon is closed
    /// * [`GalleryError::NonFiniteCoordinate`] if `point` has a NaN or infinite coordinate
    /// * [`GalleryError::DegenerateEdge`] if `point` equals the last vertex
    /// * [`GalleryError::IntersectionRejected`] (`closing: false`) if the new edge
    ///   crosses the boundary
    ///
    /// The polygon is unchanged when an error is returned.
    pub fn try_push(&mut self, point: Point2<F>) -> Result<()> {
        self.check_push(point)?;
        self.vertices.push(point);
        Ok(())
    }

    fn check_push(&self, point: Point2<F>) -> Result<()> {
        if self.complete {
            return Err(GalleryError::PolygonAlreadyComplete);
        }
        if !point.is_finite() {
            return Err(GalleryError::NonFiniteCoordinate);
        }
        if self.vertices.last() == Some(&point) {
            return Err(GalleryError::DegenerateEdge);
        }
        if !can_extend(&self.vertices, point, false) {
            return Err(GalleryError::IntersectionRejected { closing: false });
        }
        Ok(())
    }

    /// Closes the boundary with an edge from the last vertex to the first.
    ///
    /// # Errors
    ///
    /// * [`GalleryError::PolygonAlreadyComplete`] if already closed
    /// * [`GalleryError::InsufficientVertices`] with fewer than 3 vertices
    /// * [`GalleryError::DegenerateEdge`] if the first and last vertex coincide
    /// * [`GalleryError::IntersectionRejected`] (`closing: true`) if the closing
    ///   edge crosses the boundary
    pub fn close(&mut self) -> Result<()> {
        if self.complete {
            return Err(GalleryError::PolygonAlreadyComplete);
        }
        let n = self.vertices.len();
        if n < MIN_POLYGON_VERTICES {
            return Err(GalleryError::InsufficientVertices {
                required: MIN_POLYGON_VERTICES,
                actual: n,
            });
        }
        let first = self.vertices[0];
        if Segment2::new(self.vertices[n - 1], first).is_degenerate() {
            return Err(GalleryError::DegenerateEdge);
        }
        if !can_extend(&self.vertices, first, true) {
            return Err(GalleryError::IntersectionRejected { closing: true });
        }
        self.complete = true;
        Ok(())
    }

    /// Returns the accepted boundary edges.
    ///
    /// Includes the closing edge once the polygon is complete.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        let mut edges: Vec<Segment2<F>> = self
            .vertices
            .windows(2)
            .map(|w| Segment2::new(w[0], w[1]))
            .collect();
        if self.complete {
            if let (Some(&last), Some(&first)) = (self.vertices.last(), self.vertices.first()) {
                edges.push(Segment2::new(last, first));
            }
        }
        edges
    }

    /// Returns the closed vertex ring (first vertex repeated at the end).
    ///
    /// This is the form handed to a [`Triangulator`](crate::triangulation::Triangulator).
    /// Fails with [`GalleryError::PolygonNotComplete`] while the polygon is open.
    pub fn ring(&self) -> Result<Vec<Point2<F>>> {
        if !self.complete {
            return Err(GalleryError::PolygonNotComplete);
        }
        let mut ring = Vec::with_capacity(self.vertices.len() + 1);
        ring.extend_from_slice(&self.vertices);
        ring.push(self.vertices[0]);
        Ok(ring)
    }

    /// Returns the signed area of the boundary using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the boundary.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }
}

impl<F: Float> Default for Polygon<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the signed area of a vertex ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_polygon_empty() {
        let poly: Polygon<f64> = Polygon::empty();
        assert!(poly.is_empty());
        assert_eq!(poly.len(), 0);
        assert!(!poly.is_complete());
    }

    #[test]
    fn test_from_vertices_square() {
        let poly = Polygon::from_vertices(&square()).unwrap();
        assert_eq!(poly.len(), 4);
        assert!(poly.is_complete());
        assert_eq!(poly.edges().len(), 4);
        assert!(approx_eq(poly.area(), 16.0, 1e-10));
    }

    #[test]
    fn test_push_rejects_crossing() {
        let mut poly = Polygon::empty();
        for p in square() {
            poly.try_push(p).unwrap();
        }
        let before = poly.clone();
        assert_eq!(
            poly.try_push(Point2::new(2.0, -2.0)),
            Err(GalleryError::IntersectionRejected { closing: false })
        );
        assert_eq!(poly, before);
    }

    #[test]
    fn test_push_rejects_repeated_point() {
        let mut poly = Polygon::empty();
        poly.try_push(Point2::new(1.0_f64, 1.0)).unwrap();
        assert_eq!(
            poly.try_push(Point2::new(1.0, 1.0)),
            Err(GalleryError::DegenerateEdge)
        );
        assert_eq!(poly.len(), 1);
    }

    #[test]
    fn test_push_rejects_non_finite() {
        let mut poly = Polygon::empty();
        poly.try_push(Point2::new(0.0_f64, 0.0)).unwrap();
        assert_eq!(
            poly.try_push(Point2::new(f64::NAN, 1.0)),
            Err(GalleryError::NonFiniteCoordinate)
        );
        assert_eq!(
            poly.try_push(Point2::new(1.0, f64::NEG_INFINITY)),
            Err(GalleryError::NonFiniteCoordinate)
        );
        assert_eq!(poly.len(), 1);
    }

    #[test]
    fn test_accepts_is_read_only() {
        let mut poly = Polygon::empty();
        for p in square() {
            poly.try_push(p).unwrap();
        }
        assert!(!poly.accepts(Point2::new(2.0, -2.0)));
        assert!(poly.accepts(Point2::new(-1.0, 2.0)));
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn test_close_needs_three_vertices() {
        let mut poly = Polygon::empty();
        poly.try_push(Point2::new(0.0_f64, 0.0)).unwrap();
        poly.try_push(Point2::new(1.0, 0.0)).unwrap();
        assert_eq!(
            poly.close(),
            Err(GalleryError::InsufficientVertices {
                required: 3,
                actual: 2
            })
        );
        assert!(!poly.is_complete());
    }

    #[test]
    fn test_close_rejects_crossing() {
        let mut poly = Polygon::empty();
        for p in [
            Point2::new(0.0_f64, 0.0),
            Point2::new(-1.0, 3.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 2.0),
        ] {
            poly.try_push(p).unwrap();
        }
        assert_eq!(
            poly.close(),
            Err(GalleryError::IntersectionRejected { closing: true })
        );
        assert!(!poly.is_complete());
    }

    #[test]
    fn test_close_rejects_coincident_ends() {
        let mut poly = Polygon::empty();
        for p in [
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ] {
            poly.try_push(p).unwrap();
        }
        assert_eq!(poly.close(), Err(GalleryError::DegenerateEdge));
    }

    #[test]
    fn test_frozen_after_close() {
        let mut poly = Polygon::from_vertices(&square()).unwrap();
        assert_eq!(
            poly.try_push(Point2::new(-1.0, 2.0)),
            Err(GalleryError::PolygonAlreadyComplete)
        );
        assert_eq!(poly.close(), Err(GalleryError::PolygonAlreadyComplete));
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn test_ring() {
        let mut poly = Polygon::empty();
        for p in square() {
            poly.try_push(p).unwrap();
        }
        assert_eq!(poly.ring(), Err(GalleryError::PolygonNotComplete));

        poly.close().unwrap();
        let ring = poly.ring().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
    }

    #[test]
    fn test_open_edges() {
        let mut poly = Polygon::empty();
        for p in square() {
            poly.try_push(p).unwrap();
        }
        let edges = poly.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment2::from_coords(4.0, 4.0, 0.0, 4.0));
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square();
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!(polygon_signed_area(&ccw) > 0.0);
        assert!(polygon_signed_area(&cw) < 0.0);
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> = Polygon::from_vertices(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        assert!((poly.area() - 1.0).abs() < 0.001);
    }
}
