//! Plane-sweep engine for exact union area and overlap multiplicity.
//!
//! Both queries share the same two-phase structure. Phase one cuts every
//! rectangle at each event column (a distinct x coordinate where some
//! rectangle starts or ends) that falls strictly inside its x-extent,
//! producing fragments confined to a single vertical strip between two
//! consecutive columns. Phase two groups the fragments by strip, sorts
//! them by y, and hands each strip to a per-strip reduction: interval
//! merging for the union area, stabbing counts for the overlap peak.

use log::debug;

use crate::Rect;
use crate::report::MaxOverlapPoint;

/// Sorted, deduplicated x coordinates of every left and right edge.
fn event_columns(rects: &[Rect]) -> Vec<i64> {
    let mut columns: Vec<i64> = rects.iter().flat_map(|r| [r.x, r.right()]).collect();
    columns.sort_unstable();
    columns.dedup();
    columns
}

/// Runs the shared sweep, invoking `visit` once per non-empty strip.
///
/// Each call receives the strip's fragments sorted by ascending y. All
/// fragments in a strip share the same x and the same width (the strip
/// width), and strips are visited in ascending x order. Rectangles
/// without positive width produce no fragments.
fn for_each_strip(rects: &[Rect], mut visit: impl FnMut(&[Rect])) {
    let columns = event_columns(rects);

    let mut fragments: Vec<Rect> = Vec::new();
    for r in rects {
        // Columns in [r.x, r.right()) each start one fragment; the
        // right edge is itself a column, so the next column after any
        // of these is still within the rectangle.
        let start = columns.partition_point(|&c| c < r.x);
        let end = columns.partition_point(|&c| c < r.right());
        for i in start..end {
            fragments.push(Rect::new(
                columns[i],
                r.y,
                columns[i + 1] - columns[i],
                r.height,
            ));
        }
    }
    debug!(
        "sweep: {} rectangles over {} columns yielded {} fragments",
        rects.len(),
        columns.len(),
        fragments.len()
    );

    fragments.sort_unstable_by_key(|f| (f.x, f.y));

    let mut start = 0;
    while start < fragments.len() {
        let x = fragments[start].x;
        let mut end = start + 1;
        while end < fragments.len() && fragments[end].x == x {
            end += 1;
        }
        visit(&fragments[start..end]);
        start = end;
    }
}

/// Exact area of the union of all rectangles.
///
/// Overlapping regions are counted once. Within each strip the sorted
/// y-intervals are merged into disjoint bands; the strip contributes
/// its width times the summed band heights.
pub fn union_area(rects: &[Rect]) -> i64 {
    let mut total = 0;
    for_each_strip(rects, |strip| {
        let width = strip[0].width;
        let mut merged_heights = 0;
        let mut band_y = strip[0].y;
        let mut band_top = strip[0].top();
        for frag in &strip[1..] {
            if frag.top() <= band_top {
                // Fully contained in the running band.
                continue;
            } else if frag.y < band_top {
                // Overlaps the running band: extend it.
                band_top = frag.top();
            } else {
                // Disjoint: close the band and start a new one.
                merged_heights += band_top - band_y;
                band_y = frag.y;
                band_top = frag.top();
            }
        }
        merged_heights += band_top - band_y;
        total += width * merged_heights;
    });
    total
}

/// A point covered by the maximum number of rectangles.
///
/// Within each strip, a fragment's bottom-left corner is stabbed by
/// every earlier fragment whose y-interval is still open there; the
/// stabbing count plus the fragment itself is the overlap multiplicity
/// at that point. The first point in sweep order to reach the globally
/// highest count wins.
///
/// Returns `None` when no rectangle has positive width. If the input is
/// non-empty but nothing overlaps, the witness is the first fragment's
/// bottom-left corner with `count = 1`.
pub fn max_overlap(rects: &[Rect]) -> Option<MaxOverlapPoint> {
    let mut best: Option<MaxOverlapPoint> = None;
    let mut fallback: Option<MaxOverlapPoint> = None;
    for_each_strip(rects, |strip| {
        if fallback.is_none() {
            fallback = Some(MaxOverlapPoint {
                x: strip[0].x,
                y: strip[0].y,
                count: 1,
            });
        }
        for (i, frag) in strip.iter().enumerate().skip(1) {
            let count = 1 + strip[..i].iter().filter(|s| s.top() > frag.y).count();
            if best.as_ref().is_none_or(|b| count > b.count) {
                best = Some(MaxOverlapPoint {
                    x: frag.x,
                    y: frag.y,
                    count,
                });
            }
        }
    });
    best.or(fallback)
}
