//! Vertex adjacency graph of a triangulation.
//!
//! Two vertices are adjacent iff they appear together in at least one
//! triangle. Vertices are identified by [`VertexKey`], and both the vertex
//! map and every neighbor set are ordered, so the same triangles always
//! produce the same graph no matter which order they arrive in.
//!
//! # Example
//!
//! ```
//! use art_gallery::graph::AdjacencyGraph;
//! use art_gallery::triangulation::Triangle;
//! use art_gallery::{Point2, VertexKey};
//!
//! let triangles = vec![
//!     Triangle::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(4.0, 4.0)),
//!     Triangle::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0), Point2::new(0.0, 4.0)),
//! ];
//!
//! let graph = AdjacencyGraph::build(&triangles, 6).unwrap();
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 5); // four sides plus the shared diagonal
//!
//! let corner = VertexKey::from_point(Point2::new(0.0, 0.0), 6).unwrap();
//! assert_eq!(graph.degree(&corner), 3);
//! ```

use crate::error::Result;
use crate::key::VertexKey;
use crate::triangulation::Triangle;
use num_traits::Float;
use std::collections::{BTreeMap, BTreeSet};

/// Undirected graph mapping each vertex to its set of neighbors.
///
/// Invariants: symmetric (`b` in `neighbors(a)` iff `a` in `neighbors(b)`),
/// no self-loops, and every vertex of every source triangle is a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<VertexKey, BTreeSet<VertexKey>>,
}

impl AdjacencyGraph {
    /// Creates a graph with no vertices.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the adjacency graph of a triangle collection.
    ///
    /// Vertex coordinates are quantized to `decimals` places (see
    /// [`VertexKey::from_point`]). The three vertices of each triangle become
    /// pairwise adjacent; repeated edges collapse.
    ///
    /// # Errors
    ///
    /// [`GalleryError::NonFiniteCoordinate`](crate::GalleryError::NonFiniteCoordinate)
    /// if a vertex cannot be keyed.
    pub fn build<F: Float>(triangles: &[Triangle<F>], decimals: u32) -> Result<Self> {
        let mut graph = Self::new();

        for triangle in triangles {
            let [a, b, c] = triangle.vertices();
            let keys = [
                VertexKey::from_point(a, decimals)?,
                VertexKey::from_point(b, decimals)?,
                VertexKey::from_point(c, decimals)?,
            ];

            for &key in &keys {
                graph.add_vertex(key);
            }
            graph.add_edge(keys[0], keys[1]);
            graph.add_edge(keys[1], keys[2]);
            graph.add_edge(keys[2], keys[0]);
        }

        tracing::debug!(
            triangles = triangles.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built adjacency graph"
        );

        Ok(graph)
    }

    /// Builds a graph directly from vertex-key pairs.
    ///
    /// Self-loops are ignored, though their vertex is still added.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexKey, VertexKey)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_vertex(a);
            graph.add_vertex(b);
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds an isolated vertex if it is not present yet.
    pub fn add_vertex(&mut self, key: VertexKey) {
        self.adjacency.entry(key).or_default();
    }

    /// Inserts the undirected edge `a`-`b`.
    ///
    /// Both directions are recorded. Inserting an existing edge or a
    /// self-loop has no effect on the edge set.
    pub fn add_edge(&mut self, a: VertexKey, b: VertexKey) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `key` is a vertex of the graph.
    #[inline]
    pub fn contains_vertex(&self, key: &VertexKey) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Vertices in ascending key order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexKey> + '_ {
        self.adjacency.keys()
    }

    /// Neighbors of `key`, or `None` if it is not a vertex.
    #[inline]
    pub fn neighbors(&self, key: &VertexKey) -> Option<&BTreeSet<VertexKey>> {
        self.adjacency.get(key)
    }

    /// Degree of `key`; zero for unknown vertices.
    pub fn degree(&self, key: &VertexKey) -> usize {
        self.adjacency.get(key).map_or(0, BTreeSet::len)
    }

    /// Returns true if `a` and `b` are adjacent.
    pub fn contains_edge(&self, a: &VertexKey, b: &VertexKey) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// Each undirected edge once, as `(smaller, larger)` key pairs.
    pub fn edges(&self) -> impl Iterator<Item = (VertexKey, VertexKey)> + '_ {
        self.adjacency.iter().flat_map(|(&a, neighbors)| {
            neighbors
                .range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded))
                .map(move |&b| (a, b))
        })
    }

    /// Checks that every edge is recorded in both directions.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(a, neighbors)| {
            neighbors.iter().all(|b| self.contains_edge(b, a))
        })
    }
}
