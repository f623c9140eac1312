use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the 2D plane.
///
/// Two different boundary conventions apply, and every query in this
/// crate must use the same two:
///
/// - Point containment treats the rectangle as the **closed** region
///   `[x, x+width] × [y, y+height]` — a point exactly on an edge is
///   covered.
/// - Overlap detection treats it as the **open** region
///   `(x, x+width) × (y, y+height)` — rectangles that merely share an
///   edge do not overlap.
///
/// Dimensions are not validated; zero or negative width/height flow
/// through the arithmetic unchanged (no area contribution, and the
/// overlap test reports whatever the strict comparisons yield).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> i64 {
        self.y + self.height
    }

    /// Signed area. Negative dimensions produce a signed result rather
    /// than panicking.
    pub fn area(&self) -> i64 {
        self.width * self.height
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Strict inequalities on every edge: rectangles that only touch
    /// along an edge or at a corner are not overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.top() > other.y
            && self.y < other.top()
    }

    /// Returns true if the point lies within the closed region,
    /// boundary included.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.top()
    }

    /// The intersection rectangle of two overlapping rectangles.
    ///
    /// Returns `None` when the interiors do not intersect; otherwise the
    /// result has strictly positive width and height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Rect {
            x,
            y,
            width: self.right().min(other.right()) - x,
            height: self.top().min(other.top()) - y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_interiors() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn edge_touching_is_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let above = Rect::new(0, 10, 10, 10);
        let corner = Rect::new(10, 10, 5, 5);

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn containment_includes_boundary() {
        let r = Rect::new(2, 3, 4, 5);

        assert!(r.contains(2, 3)); // bottom-left corner
        assert!(r.contains(6, 8)); // top-right corner
        assert!(r.contains(4, 5)); // interior
        assert!(!r.contains(7, 5));
        assert!(!r.contains(4, 9));
    }

    #[test]
    fn intersection_of_overlapping_pair() {
        let a = Rect::new(1, 1, 3, 2);
        let b = Rect::new(3, 2, 3, 3);

        assert_eq!(a.intersection(&b), Some(Rect::new(3, 2, 1, 1)));
    }

    #[test]
    fn intersection_of_touching_pair_is_none() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(4, 0, 4, 4);

        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn zero_sized_rect_propagates_through_arithmetic() {
        let degenerate = Rect::new(5, 5, 0, 0);
        let outside = Rect::new(6, 6, 4, 4);
        let around = Rect::new(0, 0, 10, 10);

        assert_eq!(degenerate.area(), 0);
        assert!(!degenerate.overlaps(&outside));
        // Strictly inside another rectangle the strict comparisons all
        // hold, so the pair is reported; the intersection is zero-sized.
        assert!(degenerate.overlaps(&around));
        assert_eq!(
            around.intersection(&degenerate),
            Some(Rect::new(5, 5, 0, 0))
        );
    }
}
