//! art-gallery - Guard placement for simple polygons
//!
//! Builds a simple polygon one vertex at a time, refusing any edge that
//! would cross the boundary, then triangulates it, 3-colors the
//! triangulation graph by backtracking search and picks the smallest color
//! class as a set of guards that together see the whole polygon.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`polygon`]: validated, incremental boundary construction
//! 2. [`triangulation`]: triangulator boundary and triangle normalization
//! 3. [`graph`]: vertex adjacency graph of the triangles
//! 4. [`coloring`]: backtracking k-coloring and guard selection
//!
//! [`GallerySession`] drives these stages one user action at a time.

pub mod coloring;
pub mod error;
pub mod graph;
pub mod key;
pub mod polygon;
pub mod primitives;
pub mod session;
pub mod triangulation;

pub use coloring::{Color, Coloring, GuardSet};
pub use error::{GalleryError, Notice, Result, Severity};
pub use key::VertexKey;
pub use primitives::{Point2, Segment2, Vec2};
pub use session::{GalleryOptions, GallerySession};
