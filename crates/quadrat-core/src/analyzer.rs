use crate::report::{MaxOverlapPoint, OverlapRegion, Stats};
use crate::{AnalysisError, Rect, sweep};

/// Analyzes a fixed collection of axis-aligned rectangles.
///
/// The rectangle list is immutable for the lifetime of the analyzer,
/// and rectangles are identified by their 0-based position in it.
/// Every query is a pure function that recomputes from scratch; no
/// intermediate state is cached between calls, so queries may run
/// concurrently from multiple readers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rectangles: Vec<Rect>,
}

impl Analyzer {
    /// Creates an analyzer over the given rectangles.
    ///
    /// Dimensions are not validated: rectangles with zero or negative
    /// width or height are accepted, contribute no area, and flow
    /// through every query's arithmetic as-is.
    pub fn new(rectangles: Vec<Rect>) -> Self {
        Self { rectangles }
    }

    /// The rectangles under analysis, in input order.
    pub fn rectangles(&self) -> &[Rect] {
        &self.rectangles
    }

    /// All pairs `(i, j)`, `i < j`, whose interiors intersect, in
    /// ascending lexicographic order.
    ///
    /// Direct pairwise test over the upper triangle of the index grid;
    /// O(n²) with no pruning. Edge-touching pairs are excluded.
    pub fn find_overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.rectangles.len() {
            for j in (i + 1)..self.rectangles.len() {
                if self.rectangles[i].overlaps(&self.rectangles[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Exact area covered by the union of all rectangles, overlaps
    /// counted once.
    pub fn coverage_area(&self) -> i64 {
        sweep::union_area(&self.rectangles)
    }

    /// The intersection rectangle of every overlapping pair, in the
    /// same order as [`Analyzer::find_overlaps`].
    pub fn overlap_regions(&self) -> Vec<OverlapRegion> {
        self.find_overlaps()
            .into_iter()
            .filter_map(|(i, j)| {
                let region = self.rectangles[i].intersection(&self.rectangles[j])?;
                Some(OverlapRegion {
                    rect_indices: (i, j),
                    region,
                })
            })
            .collect()
    }

    /// Returns true if at least one rectangle's closed region contains
    /// the point. Boundary points count; short-circuits on the first
    /// match.
    pub fn is_point_covered(&self, x: i64, y: i64) -> bool {
        self.rectangles.iter().any(|r| r.contains(x, y))
    }

    /// A point covered by the maximum number of rectangles, or `None`
    /// when no rectangle has positive extent. See
    /// [`sweep::max_overlap`] for the tie-break and fallback contract.
    pub fn max_overlap_point(&self) -> Option<MaxOverlapPoint> {
        sweep::max_overlap(&self.rectangles)
    }

    /// Aggregate coverage statistics.
    ///
    /// Fails with [`AnalysisError::ZeroTotalArea`] when the summed
    /// individual areas are zero, since coverage efficiency would
    /// divide by zero.
    pub fn stats(&self) -> Result<Stats, AnalysisError> {
        let individual_area: i64 = self.rectangles.iter().map(Rect::area).sum();
        if individual_area == 0 {
            return Err(AnalysisError::ZeroTotalArea);
        }

        let pairs = self.find_overlaps();
        let total_area = self.coverage_area();
        let overlap_area: i64 = self
            .overlap_regions()
            .iter()
            .map(|overlap| overlap.region.area())
            .sum();

        Ok(Stats {
            total_rectangles: self.rectangles.len(),
            overlapping_pairs: pairs.len(),
            total_area,
            overlap_area,
            coverage_efficiency: total_area as f64 / individual_area as f64,
        })
    }
}
