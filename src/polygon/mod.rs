//! Incrementally built simple polygons.
//!
//! This module provides:
//! - [`Polygon`], a boundary that grows one validated vertex at a time
//! - [`can_extend`], the edge test deciding whether a vertex may be added
//! - Crossing checks for finished rings
//!
//! # Example
//!
//! ```
//! use art_gallery::polygon::Polygon;
//! use art_gallery::{GalleryError, Point2};
//!
//! let mut poly = Polygon::empty();
//! poly.try_push(Point2::new(0.0, 0.0)).unwrap();
//! poly.try_push(Point2::new(4.0, 0.0)).unwrap();
//! poly.try_push(Point2::new(4.0, 4.0)).unwrap();
//! poly.try_push(Point2::new(0.0, 4.0)).unwrap();
//!
//! // Heading back down through the bottom edge is refused
//! assert_eq!(
//!     poly.try_push(Point2::new(2.0, -2.0)),
//!     Err(GalleryError::IntersectionRejected { closing: false })
//! );
//!
//! poly.close().unwrap();
//! assert!(poly.is_complete());
//! ```

mod core;
mod validate;

pub use self::core::{polygon_signed_area, Polygon, MIN_POLYGON_VERTICES};
pub use self::validate::{can_extend, has_self_intersection, is_simple, lines_cross};
