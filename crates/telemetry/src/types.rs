use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in CSS pixels, stored by its edges the way
/// `getBoundingClientRect()` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Intersection of two rects. Empty and degenerate (zero width or
    /// height) intersections yield `None`.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom.min(other.bottom);
        let right = self.right.min(other.right);
        if right > left && bottom > top {
            Some(Rect {
                top,
                left,
                bottom,
                right,
            })
        } else {
            None
        }
    }
}

/// Visible viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// The viewport as a rect anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.height, self.width)
    }
}

/// Scrollable document content dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentSize {
    pub width: f64,
    pub height: f64,
}

/// Page geometry as read once at measurement time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub viewport: Viewport,
    pub document: DocumentSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 150.0, 150.0);
        let i = a.intersect(&b).expect("rects overlap");
        assert_eq!(i, Rect::new(50.0, 50.0, 100.0, 100.0));
        assert!((i.area() - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        // Shared edge has zero area — treated as no intersection.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn collapsed_rect_has_no_intersection() {
        let a = Rect::new(5.0, 5.0, 5.0, 5.0);
        let vp = Viewport {
            width: 100.0,
            height: 100.0,
        };
        assert!(a.intersect(&vp.bounds()).is_none());
    }

    #[test]
    fn viewport_bounds_anchor_at_origin() {
        let vp = Viewport {
            width: 1024.0,
            height: 768.0,
        };
        let b = vp.bounds();
        assert_eq!(b.left, 0.0);
        assert_eq!(b.top, 0.0);
        assert_eq!(b.right, 1024.0);
        assert_eq!(b.bottom, 768.0);
    }
}
