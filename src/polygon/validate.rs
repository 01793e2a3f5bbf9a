//! Boundary validation for incrementally built polygons.
//!
//! A polygon grows one vertex at a time. Before a vertex is committed the
//! edge that joins it to the boundary is tested against every existing edge;
//! the vertex is accepted only if that edge crosses none of them. Edges that
//! merely touch (meet at an endpoint) or run parallel are not crossings.
//!
//! # Example
//!
//! ```
//! use art_gallery::{Point2, polygon::can_extend};
//!
//! let accepted = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! // (0,4) -> (2,-2) would cut through the bottom edge
//! assert!(!can_extend(&accepted, Point2::new(2.0, -2.0), false));
//!
//! // Closing edge (0,4) -> (0,0) is fine
//! assert!(can_extend(&accepted, accepted[0], true));
//! ```

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Decides whether the boundary may be extended with a new edge.
///
/// The candidate edge always starts at the last accepted vertex and ends at
/// `candidate`.
///
/// * `closing == false`: a new vertex is being appended. The last existing
///   edge ends where the candidate edge starts, so it is not tested.
/// * `closing == true`: the boundary is being closed and `candidate` is the
///   first vertex. Every existing edge is eligible.
///
/// In both modes an existing edge that shares an endpoint with the candidate
/// edge is skipped, as is an existing edge joining the same two points.
///
/// Returns `true` when nothing eligible crosses the candidate edge. With fewer
/// than two accepted vertices there are no edges and the answer is `true`.
/// Zero-length candidates are not detected here.
pub fn can_extend<F: Float>(existing: &[Point2<F>], candidate: Point2<F>, closing: bool) -> bool {
    let n = existing.len();
    if n < 2 {
        return true;
    }

    let edge = Segment2::new(existing[n - 1], candidate);
    let eligible = if closing { n - 1 } else { n - 2 };

    !existing[..=eligible]
        .windows(2)
        .map(|w| Segment2::new(w[0], w[1]))
        .filter(|other| !other.same_endpoints(edge) && !other.shares_endpoint(edge))
        .any(|other| lines_cross(edge, other))
}

/// Tests whether two segments cross at a point strictly inside both.
///
/// With `a -> b` and `c -> d` the two segments, the crossing parameters are
///
/// ```text
/// den = (b - a) x (d - c)
/// r   = ((a.y - c.y)(d.x - c.x) - (a.x - c.x)(d.y - c.y)) / den
/// s   = ((a.y - c.y)(b.x - a.x) - (a.x - c.x)(b.y - a.y)) / den
/// ```
///
/// and the segments cross iff `0 < r < 1` and `0 < s < 1`. A zero
/// denominator (parallel or collinear segments) is never a crossing, and
/// neither is a parameter landing exactly on 0 or 1.
pub fn lines_cross<F: Float>(first: Segment2<F>, second: Segment2<F>) -> bool {
    let (a, b) = (first.start, first.end);
    let (c, d) = (second.start, second.end);

    let denominator = first.direction().cross(second.direction());
    if denominator == F::zero() {
        return false;
    }

    let r = ((a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y)) / denominator;
    let s = ((a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y)) / denominator;

    let zero = F::zero();
    let one = F::one();
    r > zero && r < one && s > zero && s < one
}

/// Checks a closed ring for crossings between non-adjacent edges.
///
/// `vertices` lists the ring without repeating the first vertex. Rings with
/// fewer than 4 vertices cannot cross themselves.
pub fn has_self_intersection<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let a = Segment2::new(vertices[i], vertices[(i + 1) % n]);

        for j in (i + 2)..n {
            let j_next = (j + 1) % n;
            if j_next == i {
                continue; // adjacent through the closing edge
            }

            let b = Segment2::new(vertices[j], vertices[j_next]);
            if lines_cross(a, b) {
                return true;
            }
        }
    }

    false
}

/// Checks if a closed ring is simple (no crossing edges).
pub fn is_simple<F: Float>(vertices: &[Point2<F>]) -> bool {
    !has_self_intersection(vertices)
}
