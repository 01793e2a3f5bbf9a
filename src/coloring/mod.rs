//! Proper k-coloring of adjacency graphs and art gallery guard selection.
//!
//! The triangulation graph of a simple polygon is always 3-colorable. In
//! any proper 3-coloring every triangle holds all three colors, so the
//! vertices of any one color see the whole polygon. The smallest color class
//! therefore is a guard set of at most `floor(n / 3)` vertices.
//!
//! # Example
//!
//! ```
//! use art_gallery::coloring::{color_graph, select_guard_color, ColoringOptions};
//! use art_gallery::graph::AdjacencyGraph;
//! use art_gallery::triangulation::Triangle;
//! use art_gallery::Point2;
//!
//! let triangles = vec![
//!     Triangle::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(4.0, 4.0)),
//!     Triangle::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0), Point2::new(0.0, 4.0)),
//! ];
//! let graph = AdjacencyGraph::build(&triangles, 6).unwrap();
//!
//! let coloring = color_graph(&graph, &ColoringOptions::default()).unwrap();
//! assert!(coloring.is_proper(&graph));
//!
//! let guard = select_guard_color(&coloring).unwrap();
//! assert_eq!(coloring.vertices_with(guard).count(), 1);
//! ```

mod backtrack;
mod guards;

pub use backtrack::{color_graph, ColoringOptions, DEFAULT_COLORS};
pub use guards::{select_guard_color, GuardSet};

use crate::graph::AdjacencyGraph;
use crate::key::VertexKey;
use std::collections::BTreeMap;
use std::fmt;

/// A color label in `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Creates a color from its label. Label 0 is reserved and yields `None`.
    #[inline]
    pub fn new(label: u8) -> Option<Self> {
        (label > 0).then_some(Self(label))
    }

    /// The numeric label.
    #[inline]
    pub fn label(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete assignment of colors to graph vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    assignment: BTreeMap<VertexKey, Color>,
    colors: usize,
}

impl Coloring {
    pub(crate) fn new(assignment: BTreeMap<VertexKey, Color>, colors: usize) -> Self {
        Self { assignment, colors }
    }

    /// Number of colors the coloring was allowed to use.
    #[inline]
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// Number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Returns true if no vertex is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Color of `key`, if it is part of the coloring.
    #[inline]
    pub fn get(&self, key: &VertexKey) -> Option<Color> {
        self.assignment.get(key).copied()
    }

    /// `(vertex, color)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&VertexKey, &Color)> + '_ {
        self.assignment.iter()
    }

    /// Vertices holding `color`, in ascending key order.
    pub fn vertices_with(&self, color: Color) -> impl Iterator<Item = &VertexKey> + '_ {
        self.assignment
            .iter()
            .filter(move |&(_, &c)| c == color)
            .map(|(key, _)| key)
    }

    /// Number of vertices per color. Colors that are not used are absent.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        let mut counts = BTreeMap::new();
        for &color in self.assignment.values() {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Checks that every vertex of `graph` is colored and no edge joins two
    /// vertices of the same color.
    pub fn is_proper(&self, graph: &AdjacencyGraph) -> bool {
        graph.vertices().all(|v| self.assignment.contains_key(v))
            && graph
                .edges()
                .all(|(a, b)| self.get(&a) != self.get(&b))
    }
}
