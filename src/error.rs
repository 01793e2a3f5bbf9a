//! Error types for art gallery operations.
//!
//! Every error is local to the operation that raised it: a rejected
//! operation never modifies previously accepted state. Each variant can be
//! turned into a [`Notice`] for display by a notification front end.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Errors that can occur while building, triangulating or coloring a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The candidate boundary edge would cross an existing edge.
    #[error("candidate edge intersects the polygon boundary (closing: {closing})")]
    IntersectionRejected {
        /// True when the rejected edge was the one closing the polygon.
        closing: bool,
    },

    /// The candidate boundary edge has zero length.
    #[error("candidate edge has zero length")]
    DegenerateEdge,

    /// An operation needing a closed polygon was invoked with too few vertices.
    #[error("polygon needs at least {required} vertices, found {actual}")]
    InsufficientVertices {
        /// Minimum number of vertices the operation needs.
        required: usize,
        /// Number of vertices accepted so far.
        actual: usize,
    },

    /// The polygon has already been closed and cannot grow.
    #[error("polygon is already complete")]
    PolygonAlreadyComplete,

    /// Triangulation was requested before the boundary was closed.
    #[error("polygon is not complete")]
    PolygonNotComplete,

    /// Coloring was requested before a non-empty triangulation exists.
    #[error("no triangulation available")]
    NoTriangulation,

    /// The triangulator produced no triangles.
    #[error("triangle collection is empty")]
    NoTriangles,

    /// The triangulator could not decompose the whole polygon.
    #[error("triangulation produced {produced} of {expected} triangles")]
    TriangulationFailed {
        /// Number of triangles found before the triangulator gave up.
        produced: usize,
        /// Number of triangles a full triangulation has (`n - 2`).
        expected: usize,
    },

    /// A raw triangle carried fewer than three coordinates.
    #[error("triangle {index} has {len} coordinates, expected at least 3")]
    MalformedTriangle {
        /// Position of the offending triangle in the input.
        index: usize,
        /// Number of coordinates it carried.
        len: usize,
    },

    /// A coordinate is NaN, infinite, or too large to key at the configured precision.
    #[error("coordinate cannot be converted to a vertex key")]
    NonFiniteCoordinate,

    /// The requested number of colors is outside `1..=255`.
    #[error("invalid color count {colors}")]
    InvalidColorCount {
        /// The rejected color count.
        colors: usize,
    },

    /// Backtracking search found no proper coloring.
    #[error("no proper {colors}-coloring found")]
    ColoringFailed {
        /// Number of colors the search was allowed to use.
        colors: usize,
    },

    /// Guard selection was requested before a valid coloring exists.
    #[error("no coloring available for guard selection")]
    GuardSelectionUnavailable,
}

/// Severity tag attached to a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational status message.
    Info,
    /// Something unexpected that did not stop the operation.
    Warning,
    /// The operation was rejected.
    Danger,
}

/// A human-readable message with a severity, ready for a notification front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub message: String,
    /// Severity of the message.
    pub severity: Severity,
}

impl Notice {
    /// Creates a notice.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Creates an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

impl GalleryError {
    /// Returns the user-facing notice for this error.
    pub fn notice(&self) -> Notice {
        let message = match self {
            Self::IntersectionRejected { closing: false } => {
                "Line intersect with the polygon!".to_string()
            }
            Self::IntersectionRejected { closing: true } => {
                "Cannot complete the polygon: the connecting line intersects with another line!"
                    .to_string()
            }
            Self::DegenerateEdge => "Point coincides with the previous point!".to_string(),
            Self::InsufficientVertices { required, .. } => {
                format!("Please add at least {required} points to form a polygon!")
            }
            Self::PolygonAlreadyComplete => "The polygon is already complete!".to_string(),
            Self::PolygonNotComplete => "Please complete the polygon first!".to_string(),
            Self::NoTriangulation => "Please triangulate the polygon first!".to_string(),
            Self::NoTriangles => "The triangulator returned no triangles!".to_string(),
            Self::TriangulationFailed { .. } => {
                "Triangulation failed: the polygon touches itself and cannot be split into triangles!"
                    .to_string()
            }
            Self::MalformedTriangle { index, .. } => {
                format!("Triangle {index} is malformed!")
            }
            Self::NonFiniteCoordinate => "Point coordinates are out of range!".to_string(),
            Self::InvalidColorCount { colors } => {
                format!("Cannot color with {colors} colors!")
            }
            Self::ColoringFailed { colors } => {
                format!("Coloring failed: no proper {colors}-coloring exists for this graph!")
            }
            Self::GuardSelectionUnavailable => "Please run Art Gallery Algorithm!".to_string(),
        };
        Notice::new(message, Severity::Danger)
    }
}

impl From<GalleryError> for Notice {
    fn from(err: GalleryError) -> Self {
        err.notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GalleryError::InsufficientVertices {
            required: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, found 2");
        assert_eq!(
            GalleryError::ColoringFailed { colors: 3 }.to_string(),
            "no proper 3-coloring found"
        );
    }

    #[test]
    fn test_notice_severity() {
        let notice = GalleryError::IntersectionRejected { closing: false }.notice();
        assert_eq!(notice.severity, Severity::Danger);
        assert_eq!(notice.message, "Line intersect with the polygon!");
    }

    #[test]
    fn test_closing_intersection_notice() {
        let err = GalleryError::IntersectionRejected { closing: true };
        assert_eq!(
            err.notice().message,
            "Cannot complete the polygon: the connecting line intersects with another line!"
        );
        assert_eq!(
            err.to_string(),
            "candidate edge intersects the polygon boundary (closing: true)"
        );
    }

    #[test]
    fn test_triangulation_failed_notice() {
        let err = GalleryError::TriangulationFailed {
            produced: 2,
            expected: 6,
        };
        assert_eq!(err.to_string(), "triangulation produced 2 of 6 triangles");
        assert!(err.notice().message.starts_with("Triangulation failed"));
        assert_ne!(
            GalleryError::NoTriangles.notice().message,
            GalleryError::NoTriangulation.notice().message
        );
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            GalleryError::PolygonNotComplete.notice().message,
            "Please complete the polygon first!"
        );
        assert_eq!(
            GalleryError::InsufficientVertices {
                required: 3,
                actual: 1
            }
            .notice()
            .message,
            "Please add at least 3 points to form a polygon!"
        );
        assert_eq!(
            Notice::from(GalleryError::NoTriangulation).message,
            "Please triangulate the polygon first!"
        );
    }

    #[test]
    fn test_info_notice() {
        let notice = Notice::info("Polygon closed");
        assert_eq!(notice.severity, Severity::Info);
    }
}
