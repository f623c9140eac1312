use serde::{Deserialize, Serialize};

use crate::Rect;

/// The exact intersection rectangle of one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapRegion {
    /// Indices `(i, j)`, `i < j`, into the analyzer's rectangle list.
    pub rect_indices: (usize, usize),
    /// The intersection rectangle; positive width and height by
    /// construction, since the pair is confirmed overlapping.
    pub region: Rect,
}

/// A witness point of maximal overlap multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxOverlapPoint {
    pub x: i64,
    pub y: i64,
    /// Number of rectangles covering the point.
    pub count: usize,
}

/// Aggregate coverage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_rectangles: usize,
    pub overlapping_pairs: usize,
    /// Exact union area (overlaps counted once).
    pub total_area: i64,
    /// Sum of all pairwise overlap-region areas. A region covered by
    /// three or more rectangles is counted once per overlapping pair,
    /// so this is not the same as union area minus individual areas.
    pub overlap_area: i64,
    /// Union area divided by the sum of individual rectangle areas.
    pub coverage_efficiency: f64,
}
