//! Interactive art gallery session.
//!
//! [`GallerySession`] owns everything one interactive run produces: the
//! polygon being drawn, its triangulation and adjacency graph, the last
//! coloring and the last guard set. Each method corresponds to one user
//! action and either succeeds or leaves the session exactly as it was.
//!
//! # Example
//!
//! ```
//! use art_gallery::triangulation::EarClipping;
//! use art_gallery::{GallerySession, Point2};
//!
//! let mut session = GallerySession::new();
//! for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)] {
//!     session.add_vertex(Point2::new(x, y)).unwrap();
//! }
//! session.close().unwrap();
//!
//! let guards = session.run(&EarClipping).unwrap();
//! assert_eq!(guards.len(), 1);
//! ```

use crate::coloring::{color_graph, Color, Coloring, ColoringOptions, GuardSet, DEFAULT_COLORS};
use crate::error::{GalleryError, Result};
use crate::graph::AdjacencyGraph;
use crate::key::{VertexKey, DEFAULT_KEY_DECIMALS, MAX_KEY_DECIMALS};
use crate::polygon::{Polygon, MIN_POLYGON_VERTICES};
use crate::primitives::{Point2, Segment2};
use crate::triangulation::{normalize, Triangle, Triangulator};
use num_traits::Float;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryOptions {
    /// Number of colors used by the coloring search.
    pub colors: usize,
    /// Decimal places kept when turning points into vertex keys.
    pub key_decimals: u32,
    /// Optional bound on coloring search steps.
    pub max_search_steps: Option<usize>,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            key_decimals: DEFAULT_KEY_DECIMALS,
            max_search_steps: None,
        }
    }
}

impl GalleryOptions {
    /// Sets the number of colors.
    pub fn colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the vertex key precision, clamped to the supported maximum.
    pub fn key_decimals(mut self, decimals: u32) -> Self {
        self.key_decimals = decimals.min(MAX_KEY_DECIMALS);
        self
    }

    /// Bounds the coloring search.
    pub fn max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = Some(steps);
        self
    }

    /// Options handed to [`color_graph`].
    pub fn coloring_options(&self) -> ColoringOptions {
        ColoringOptions {
            colors: self.colors,
            max_steps: self.max_search_steps,
        }
    }
}

/// State of one interactive art gallery run.
#[derive(Debug, Clone)]
pub struct GallerySession<F> {
    options: GalleryOptions,
    polygon: Polygon<F>,
    triangles: Option<Vec<Triangle<F>>>,
    graph: Option<AdjacencyGraph>,
    coloring: Option<Coloring>,
    guards: Option<GuardSet>,
}

impl<F: Float> Default for GallerySession<F> {
    fn default() -> Self {
        Self::with_options(GalleryOptions::default())
    }
}

impl<F: Float> GallerySession<F> {
    /// Creates a session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given options.
    pub fn with_options(options: GalleryOptions) -> Self {
        Self {
            options,
            polygon: Polygon::empty(),
            triangles: None,
            graph: None,
            coloring: None,
            guards: None,
        }
    }

    /// The session configuration.
    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    /// Discards all state and starts a new polygon.
    pub fn reset(&mut self) {
        *self = Self::with_options(self.options);
    }

    /// Appends a vertex to the polygon.
    ///
    /// Besides the failure cases of [`Polygon::try_push`], a point that
    /// cannot be keyed at the configured precision is refused with
    /// [`GalleryError::NonFiniteCoordinate`], so every accepted vertex can
    /// later become a graph vertex.
    pub fn add_vertex(&mut self, point: Point2<F>) -> Result<()> {
        let keyed = VertexKey::from_point(point, self.options.key_decimals);
        let pushed = match keyed {
            Err(err) if !self.polygon.is_complete() => Err(err),
            _ => self.polygon.try_push(point),
        };
        pushed.map_err(|err| {
            tracing::debug!(%err, "vertex rejected");
            err
        })?;
        tracing::debug!(vertices = self.polygon.len(), "vertex accepted");
        Ok(())
    }

    /// Closes the polygon boundary.
    ///
    /// See [`Polygon::close`] for the failure cases.
    pub fn close(&mut self) -> Result<()> {
        self.polygon.close()?;
        tracing::debug!(vertices = self.polygon.len(), "polygon closed");
        Ok(())
    }

    /// Triangulates the closed polygon and builds its adjacency graph.
    ///
    /// A previous coloring and guard set are discarded on success.
    ///
    /// # Errors
    ///
    /// * [`GalleryError::InsufficientVertices`] with fewer than 3 vertices
    /// * [`GalleryError::PolygonNotComplete`] if the polygon is still open
    /// * any error of the triangulator, [`normalize`] or [`AdjacencyGraph::build`]
    pub fn triangulate<T>(&mut self, triangulator: &T) -> Result<&[Triangle<F>]>
    where
        T: Triangulator<F> + ?Sized,
    {
        let n = self.polygon.len();
        if n < MIN_POLYGON_VERTICES {
            return Err(GalleryError::InsufficientVertices {
                required: MIN_POLYGON_VERTICES,
                actual: n,
            });
        }

        let ring = self.polygon.ring()?;
        let raw = triangulator.triangulate(&ring)?;
        let triangles = normalize(&raw)?;
        let graph = AdjacencyGraph::build(&triangles, self.options.key_decimals)?;

        tracing::debug!(triangles = triangles.len(), "polygon triangulated");

        self.graph = Some(graph);
        self.coloring = None;
        self.guards = None;
        let triangles: &[Triangle<F>] = self.triangles.insert(triangles);
        Ok(triangles)
    }

    /// Colors the triangulation graph.
    ///
    /// A previous guard set is discarded on success.
    ///
    /// # Errors
    ///
    /// * [`GalleryError::NoTriangulation`] before a successful [`triangulate`](Self::triangulate)
    /// * any error of [`color_graph`]
    pub fn color(&mut self) -> Result<&Coloring> {
        let graph = self.graph.as_ref().ok_or(GalleryError::NoTriangulation)?;
        if graph.is_empty() {
            return Err(GalleryError::NoTriangulation);
        }

        let coloring = color_graph(graph, &self.options.coloring_options())?;
        self.guards = None;
        let coloring: &Coloring = self.coloring.insert(coloring);
        Ok(coloring)
    }

    /// Selects the guard set from the current coloring.
    ///
    /// # Errors
    ///
    /// [`GalleryError::GuardSelectionUnavailable`] before a successful
    /// [`color`](Self::color).
    pub fn select_guards(&mut self) -> Result<&GuardSet> {
        let coloring = self
            .coloring
            .as_ref()
            .ok_or(GalleryError::GuardSelectionUnavailable)?;
        let guards = GuardSet::from_coloring(coloring)?;

        tracing::debug!(color = %guards.color(), guards = guards.len(), "guards selected");

        let guards: &GuardSet = self.guards.insert(guards);
        Ok(guards)
    }

    /// Triangulates, colors and selects guards in one go.
    pub fn run<T>(&mut self, triangulator: &T) -> Result<&GuardSet>
    where
        T: Triangulator<F> + ?Sized,
    {
        self.triangulate(triangulator)?;
        self.color()?;
        self.select_guards()
    }

    /// The polygon drawn so far.
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// Accepted vertices in insertion order.
    pub fn points(&self) -> &[Point2<F>] {
        self.polygon.vertices()
    }

    /// Accepted boundary edges, including the closing edge once complete.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        self.polygon.edges()
    }

    /// Triangles of the last successful triangulation.
    pub fn triangles(&self) -> Option<&[Triangle<F>]> {
        self.triangles.as_deref()
    }

    /// Adjacency graph of the last successful triangulation.
    pub fn graph(&self) -> Option<&AdjacencyGraph> {
        self.graph.as_ref()
    }

    /// The last successful coloring.
    pub fn coloring(&self) -> Option<&Coloring> {
        self.coloring.as_ref()
    }

    /// The last selected guard set.
    pub fn guards(&self) -> Option<&GuardSet> {
        self.guards.as_ref()
    }

    /// Each polygon vertex with its color, if it has been colored.
    pub fn vertex_colors(&self) -> Vec<(Point2<F>, Option<Color>)> {
        self.polygon
            .vertices()
            .iter()
            .map(|&p| {
                let color = self
                    .coloring
                    .as_ref()
                    .zip(self.key(p))
                    .and_then(|(coloring, key)| coloring.get(&key));
                (p, color)
            })
            .collect()
    }

    /// Polygon vertices that are guards, in insertion order.
    pub fn guard_points(&self) -> Vec<Point2<F>> {
        let Some(guards) = self.guards.as_ref() else {
            return Vec::new();
        };
        self.polygon
            .vertices()
            .iter()
            .copied()
            .filter(|&p| self.key(p).is_some_and(|key| guards.contains(&key)))
            .collect()
    }

    fn key(&self, point: Point2<F>) -> Option<VertexKey> {
        VertexKey::from_point(point, self.options.key_decimals).ok()
    }
}
