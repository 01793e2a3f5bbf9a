//! Backtracking search for a proper k-coloring.
//!
//! Vertices are visited in maximum cardinality search order: the next vertex
//! is the one with the most already-visited neighbors, ties going to the
//! smallest key. Each vertex takes the smallest color that none of its
//! already-colored neighbors hold; when no color fits, the search undoes the
//! previous vertex and moves it to its next color. The search runs on an
//! explicit stack, so its depth is not bounded by the call stack.
//!
//! Triangulation graphs are chordal, and on a chordal graph this order puts
//! every vertex after a clique of its neighbors, so three colors never hit a
//! dead end there.

use super::{Color, Coloring};
use crate::error::{GalleryError, Result};
use crate::graph::AdjacencyGraph;
use crate::key::VertexKey;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Number of colors needed to color any polygon triangulation.
pub const DEFAULT_COLORS: usize = 3;

/// Largest supported number of colors.
const MAX_COLORS: usize = u8::MAX as usize;

/// Options for the coloring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringOptions {
    /// Number of colors `k`; labels run from 1 to `k`.
    pub colors: usize,
    /// Upper bound on color attempts before the search gives up.
    /// `None` searches exhaustively.
    pub max_steps: Option<usize>,
}

impl Default for ColoringOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            max_steps: None,
        }
    }
}

impl ColoringOptions {
    /// Creates options for a `colors`-coloring with no step limit.
    pub fn with_colors(colors: usize) -> Self {
        Self {
            colors,
            ..Default::default()
        }
    }

    /// Sets the step budget.
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

/// Finds a proper coloring of `graph` with at most `options.colors` colors.
///
/// An empty graph yields an empty coloring.
///
/// # Errors
///
/// * [`GalleryError::InvalidColorCount`] if `colors` is 0 or above 255
/// * [`GalleryError::ColoringFailed`] if no proper coloring exists, or the
///   step budget runs out first
pub fn color_graph(graph: &AdjacencyGraph, options: &ColoringOptions) -> Result<Coloring> {
    let k = options.colors;
    if k == 0 || k > MAX_COLORS {
        return Err(GalleryError::InvalidColorCount { colors: k });
    }

    let order = search_order(graph);
    let position: BTreeMap<VertexKey, usize> =
        order.iter().enumerate().map(|(i, &key)| (key, i)).collect();
    let neighbors: Vec<Vec<usize>> = order
        .iter()
        .map(|key| {
            graph
                .neighbors(key)
                .into_iter()
                .flatten()
                .filter_map(|n| position.get(n).copied())
                .collect()
        })
        .collect();

    let n = order.len();
    // 0 is the "no color" sentinel; labels are 1..=k
    let mut assigned: Vec<usize> = vec![0; n];
    let mut next_color: Vec<usize> = vec![1; n];
    let mut depth = 0;
    let mut steps = 0usize;

    while depth < n {
        let mut placed = false;

        while next_color[depth] <= k {
            let color = next_color[depth];
            next_color[depth] += 1;

            steps += 1;
            if options.max_steps.is_some_and(|limit| steps > limit) {
                tracing::warn!(
                    steps,
                    vertices = n,
                    colors = k,
                    "coloring search budget exhausted"
                );
                return Err(GalleryError::ColoringFailed { colors: k });
            }

            if neighbors[depth].iter().all(|&u| assigned[u] != color) {
                assigned[depth] = color;
                placed = true;
                break;
            }
        }

        if placed {
            depth += 1;
            if depth < n {
                next_color[depth] = 1;
            }
            continue;
        }

        // Every color clashes: undo and revisit the previous vertex
        assigned[depth] = 0;
        next_color[depth] = 1;
        if depth == 0 {
            tracing::warn!(steps, vertices = n, colors = k, "no proper coloring exists");
            return Err(GalleryError::ColoringFailed { colors: k });
        }
        depth -= 1;
        assigned[depth] = 0;
    }

    tracing::debug!(steps, vertices = n, colors = k, "found proper coloring");

    let assignment = order
        .into_iter()
        .zip(assigned)
        .map(|(key, label)| {
            let color = u8::try_from(label)
                .ok()
                .and_then(Color::new)
                .ok_or(GalleryError::ColoringFailed { colors: k })?;
            Ok((key, color))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Coloring::new(assignment, k))
}

/// Maximum cardinality search over `graph`, ties broken by smallest key.
fn search_order(graph: &AdjacencyGraph) -> Vec<VertexKey> {
    let keys: Vec<VertexKey> = graph.vertices().copied().collect();
    let index: BTreeMap<VertexKey, usize> =
        keys.iter().enumerate().map(|(i, &key)| (key, i)).collect();

    let mut weight = vec![0usize; keys.len()];
    let mut visited = vec![false; keys.len()];
    let mut heap: BinaryHeap<(usize, Reverse<usize>)> =
        (0..keys.len()).map(|i| (0, Reverse(i))).collect();
    let mut order = Vec::with_capacity(keys.len());

    while let Some((w, Reverse(i))) = heap.pop() {
        // Stale entries carry an outdated weight
        if visited[i] || w != weight[i] {
            continue;
        }
        visited[i] = true;
        order.push(keys[i]);

        for n in graph.neighbors(&keys[i]).into_iter().flatten() {
            if let Some(&j) = index.get(n) {
                if !visited[j] {
                    weight[j] += 1;
                    heap.push((weight[j], Reverse(j)));
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(i: i64) -> VertexKey {
        VertexKey::new(i, 0, 0)
    }

    fn complete_graph(n: i64) -> AdjacencyGraph {
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                edges.push((k(a), k(b)));
            }
        }
        AdjacencyGraph::from_edges(edges)
    }

    fn cycle(n: i64) -> AdjacencyGraph {
        AdjacencyGraph::from_edges((0..n).map(|i| (k(i), k((i + 1) % n))))
    }

    #[test]
    fn test_empty_graph() {
        let coloring = color_graph(&AdjacencyGraph::new(), &ColoringOptions::default()).unwrap();
        assert!(coloring.is_empty());
    }

    #[test]
    fn test_triangle_uses_three_colors() {
        let graph = complete_graph(3);
        let coloring = color_graph(&graph, &ColoringOptions::default()).unwrap();
        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.color_counts().len(), 3);
    }

    #[test]
    fn test_k4_fails_with_three_colors() {
        let graph = complete_graph(4);
        assert_eq!(
            color_graph(&graph, &ColoringOptions::default()),
            Err(GalleryError::ColoringFailed { colors: 3 })
        );
    }

    #[test]
    fn test_k4_succeeds_with_four_colors() {
        let graph = complete_graph(4);
        let coloring = color_graph(&graph, &ColoringOptions::with_colors(4)).unwrap();
        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.colors(), 4);
    }

    #[test]
    fn test_odd_cycle_needs_three_colors() {
        let graph = cycle(5);
        assert_eq!(
            color_graph(&graph, &ColoringOptions::with_colors(2)),
            Err(GalleryError::ColoringFailed { colors: 2 })
        );
        let coloring = color_graph(&graph, &ColoringOptions::default()).unwrap();
        assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn test_even_cycle_two_colors() {
        let graph = cycle(6);
        let coloring = color_graph(&graph, &ColoringOptions::with_colors(2)).unwrap();
        assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn test_search_order_follows_visited_neighbors() {
        let graph = AdjacencyGraph::from_edges([
            (k(0), k(5)),
            (k(5), k(1)),
            (k(1), k(4)),
            (k(0), k(1)),
        ]);
        let order = search_order(&graph);
        assert_eq!(order, vec![k(0), k(1), k(5), k(4)]);
    }

    #[test]
    fn test_search_order_covers_components() {
        let graph = AdjacencyGraph::from_edges([(k(3), k(4)), (k(0), k(1))]);
        assert_eq!(search_order(&graph), vec![k(0), k(1), k(3), k(4)]);
    }

    #[test]
    fn test_backtracking_recovers_from_greedy_dead_end() {
        // Visit order is 0, 2, 1, 3, 4, 5. Greedy gives 0=1, 2=2, 1=1, 3=2,
        // 4=3 and then vertex 5 (adjacent to 0, 3 and 4) has nothing left.
        // A proper coloring exists once vertex 1 moves to color 3.
        let graph = AdjacencyGraph::from_edges([
            (k(0), k(2)),
            (k(0), k(5)),
            (k(1), k(2)),
            (k(1), k(3)),
            (k(1), k(4)),
            (k(3), k(4)),
            (k(3), k(5)),
            (k(4), k(5)),
        ]);
        let coloring = color_graph(&graph, &ColoringOptions::default()).unwrap();
        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.get(&k(1)), Color::new(3));
        assert_eq!(coloring.get(&k(5)), Color::new(3));
    }

    #[test]
    fn test_first_color_preferred() {
        let graph = complete_graph(2);
        let coloring = color_graph(&graph, &ColoringOptions::default()).unwrap();
        assert_eq!(coloring.get(&k(0)), Color::new(1));
        assert_eq!(coloring.get(&k(1)), Color::new(2));
    }

    #[test]
    fn test_isolated_vertices() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex(k(0));
        graph.add_vertex(k(1));
        let coloring = color_graph(&graph, &ColoringOptions::with_colors(1)).unwrap();
        assert_eq!(coloring.len(), 2);
        assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn test_invalid_color_count() {
        let graph = complete_graph(2);
        assert_eq!(
            color_graph(&graph, &ColoringOptions::with_colors(0)),
            Err(GalleryError::InvalidColorCount { colors: 0 })
        );
        assert_eq!(
            color_graph(&graph, &ColoringOptions::with_colors(256)),
            Err(GalleryError::InvalidColorCount { colors: 256 })
        );
    }

    #[test]
    fn test_step_budget() {
        // K4 with 3 colors needs many attempts before failing outright
        let graph = complete_graph(4);
        let options = ColoringOptions::default().max_steps(2);
        assert_eq!(
            color_graph(&graph, &options),
            Err(GalleryError::ColoringFailed { colors: 3 })
        );

        let easy = complete_graph(3);
        let generous = ColoringOptions::default().max_steps(100);
        assert!(color_graph(&easy, &generous).is_ok());
    }

    #[test]
    fn test_max_colors_accepted() {
        let graph = complete_graph(5);
        let coloring = color_graph(&graph, &ColoringOptions::with_colors(255)).unwrap();
        assert!(coloring.is_proper(&graph));
    }
}
