//! Ear clipping triangulator.
//!
//! The ear clipping algorithm works by repeatedly finding and removing "ears":
//! - An ear is a triangle formed by three consecutive vertices
//! - The middle vertex must be convex (reflex vertices cannot form ears)
//! - No other polygon vertices may be inside the ear triangle
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)

use super::{RawTriangle, Triangulator};
use crate::error::{GalleryError, Result};
use crate::polygon::{polygon_signed_area, MIN_POLYGON_VERTICES};
use crate::primitives::Point2;
use num_traits::Float;

/// Built-in [`Triangulator`] based on ear clipping.
///
/// Accepts rings in either winding order. Each triangle is emitted as a
/// closed ring `[a, b, c, a]`, the same shape most geometry libraries use
/// for polygon features.
///
/// A ring of `n` vertices yields exactly `n - 2` triangles or an error.
/// Boundaries that touch themselves (a revisited vertex, a pinch) can run
/// out of ears; those fail with [`GalleryError::TriangulationFailed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarClipping;

impl<F: Float> Triangulator<F> for EarClipping {
    fn triangulate(&self, ring: &[Point2<F>]) -> Result<Vec<RawTriangle<F>>> {
        let vertices = match ring {
            [first, .., last] if first == last => &ring[..ring.len() - 1],
            _ => ring,
        };

        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(GalleryError::InsufficientVertices {
                required: MIN_POLYGON_VERTICES,
                actual: vertices.len(),
            });
        }

        let indices = ear_clip(vertices);
        let expected = vertices.len() - 2;
        if indices.len() != expected {
            return Err(GalleryError::TriangulationFailed {
                produced: indices.len(),
                expected,
            });
        }

        let triangles = indices
            .into_iter()
            .map(|(i, j, k)| vec![vertices[i], vertices[j], vertices[k], vertices[i]])
            .collect();
        Ok(triangles)
    }
}

/// Triangulates an open vertex ring and returns index triples.
fn ear_clip<F: Float>(vertices: &[Point2<F>]) -> Vec<(usize, usize, usize)> {
    let n = vertices.len();

    if n == 3 {
        return vec![(0, 1, 2)];
    }

    // Work on a CCW copy; `index_map` leads back to the caller's indices
    let clockwise = polygon_signed_area(vertices) < F::zero();
    let mut index_map: Vec<usize> = if clockwise {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };
    let mut remaining: Vec<Point2<F>> = index_map.iter().map(|&i| vertices[i]).collect();
    let mut triangles: Vec<(usize, usize, usize)> = Vec::with_capacity(n - 2);

    let mut max_iterations = n * n; // Safety limit

    while remaining.len() > 3 && max_iterations > 0 {
        max_iterations -= 1;
        let m = remaining.len();
        let mut ear_found = false;

        for i in 0..m {
            let prev = (i + m - 1) % m;
            let next = (i + 1) % m;

            if is_ear(&remaining, prev, i, next) {
                triangles.push((index_map[prev], index_map[i], index_map[next]));
                remaining.remove(i);
                index_map.remove(i);
                ear_found = true;
                break;
            }
        }

        if !ear_found {
            tracing::warn!(
                remaining = remaining.len(),
                "ear clipping found no ear"
            );
            break;
        }
    }

    if remaining.len() == 3 {
        triangles.push((index_map[0], index_map[1], index_map[2]));
    }

    triangles
}

/// Checks if vertex at index `curr` forms an ear with its neighbors.
fn is_ear<F: Float>(vertices: &[Point2<F>], prev: usize, curr: usize, next: usize) -> bool {
    let a = vertices[prev];
    let b = vertices[curr];
    let c = vertices[next];

    // Convex means a left turn for a CCW ring
    if (b - a).cross(c - a) <= F::zero() {
        return false;
    }

    vertices
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != prev && i != curr && i != next)
        .all(|(_, &vertex)| !point_in_triangle(vertex, a, b, c))
}

/// Checks if point p is inside or on triangle abc.
fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);

    let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
    let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

    !(has_neg && has_pos)
}

#[inline]
fn sign<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
