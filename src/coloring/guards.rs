//! Guard selection from a completed coloring.

use super::{Color, Coloring};
use crate::error::{GalleryError, Result};
use crate::key::VertexKey;
use std::collections::BTreeSet;

/// Returns the color held by the fewest vertices.
///
/// Ties go to the smallest label. Only colors that actually occur are
/// considered.
///
/// # Errors
///
/// [`GalleryError::GuardSelectionUnavailable`] for an empty coloring.
pub fn select_guard_color(coloring: &Coloring) -> Result<Color> {
    // color_counts iterates labels in ascending order, so the first strict
    // minimum is also the smallest label among ties
    let mut best: Option<(Color, usize)> = None;
    for (color, count) in coloring.color_counts() {
        if best.map_or(true, |(_, fewest)| count < fewest) {
            best = Some((color, count));
        }
    }
    best.map(|(color, _)| color)
        .ok_or(GalleryError::GuardSelectionUnavailable)
}

/// The guard color of a coloring together with the vertices holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSet {
    color: Color,
    vertices: BTreeSet<VertexKey>,
}

impl GuardSet {
    /// Selects the guard color of `coloring` and collects its vertices.
    pub fn from_coloring(coloring: &Coloring) -> Result<Self> {
        let color = select_guard_color(coloring)?;
        let vertices = coloring.vertices_with(color).copied().collect();
        Ok(Self { color, vertices })
    }

    /// The guard color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of guards.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if there are no guards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if `key` is a guard.
    #[inline]
    pub fn contains(&self, key: &VertexKey) -> bool {
        self.vertices.contains(key)
    }

    /// Guard vertices in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexKey> + '_ {
        self.vertices.iter()
    }
}
