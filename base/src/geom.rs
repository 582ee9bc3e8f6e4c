/*!
 * Geometric primitives.
 *
 * Chart layout happens on the integer pixel grid. Paths and transforms, used
 * to outline glyphs, are publicly imported from tiny-skia-path.
 *
 * Y low coordinates are at the top.
 */

pub use tiny_skia_path::{Path, PathBuilder, Transform};

/// A point on the pixel grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Build a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A size in pixels represented by width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    w: u32,
    h: u32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: u32, h: u32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> u32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> u32 {
        self.h
    }

    /// The smallest of width and height
    pub const fn min_dim(&self) -> u32 {
        if self.w < self.h { self.w } else { self.h }
    }
}

/// Padding on the four sides of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Top padding
    pub top: i32,
    /// Right padding
    pub right: i32,
    /// Bottom padding
    pub bottom: i32,
    /// Left padding
    pub left: i32,
}

impl Padding {
    /// Same padding on all sides
    pub const fn even(p: i32) -> Self {
        Padding {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Build a padding from top, right, bottom and left
    pub const fn from_trbl(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// An axis-aligned rectangle on the pixel grid.
///
/// Sides are stored directly because layout grows and constrains them one by one.
/// A rectangle can be transiently inverted during layout; [`Rect::normalized`]
/// restores `right >= left` and `bottom >= top`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top Y coordinate
    pub top: i32,
    /// Left X coordinate
    pub left: i32,
    /// Right X coordinate
    pub right: i32,
    /// Bottom Y coordinate
    pub bottom: i32,
}

impl Rect {
    /// Build a rectangle from top, right, bottom and left
    pub const fn from_trbl(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Rect {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Build a rectangle from x, y, width and height
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect {
            top: y,
            left: x,
            right: x + w,
            bottom: y + h,
        }
    }

    /// A rectangle anchored at the origin and covering the given size
    pub const fn from_size(size: Size) -> Self {
        Rect::from_xywh(0, 0, size.width() as i32, size.height() as i32)
    }

    /// Whether all sides are zero
    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.left == 0 && self.right == 0 && self.bottom == 0
    }

    /// The width of the rectangle
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// The height of the rectangle
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// The horizontal center X coordinate
    pub const fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    /// The vertical center Y coordinate
    pub const fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }

    /// The top-left corner
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The bottom-right corner
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Remove padding from the four sides
    pub const fn pad(&self, padding: &Padding) -> Self {
        Rect {
            top: self.top + padding.top,
            left: self.left + padding.left,
            right: self.right - padding.right,
            bottom: self.bottom - padding.bottom,
        }
    }

    /// Translate the rectangle by dx and dy
    pub const fn shift(&self, dx: i32, dy: i32) -> Self {
        Rect {
            top: self.top + dy,
            left: self.left + dx,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// The smallest rectangle covering both `self` and `other`
    pub fn grow(&self, other: &Rect) -> Rect {
        Rect {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Pull the sides of `self` inward by the amount `other` overflows `bounds`.
    ///
    /// `other` is typically the footprint of the content laid around `self`
    /// (axis labels and ticks) and `bounds` the area that footprint must fit in.
    pub fn outer_constrain(&self, bounds: &Rect, other: &Rect) -> Rect {
        let mut res = *self;
        if other.top < bounds.top {
            res.top = res.top.saturating_add(bounds.top.saturating_sub(other.top));
        }
        if other.left < bounds.left {
            res.left = res.left.saturating_add(bounds.left.saturating_sub(other.left));
        }
        if other.right > bounds.right {
            res.right = res.right.saturating_sub(other.right.saturating_sub(bounds.right));
        }
        if other.bottom > bounds.bottom {
            res.bottom = res.bottom.saturating_sub(other.bottom.saturating_sub(bounds.bottom));
        }
        res
    }

    /// A copy with `right >= left` and `bottom >= top`.
    ///
    /// Inverted sides collapse onto the left (resp. top) side.
    pub const fn normalized(&self) -> Rect {
        let right = if self.right < self.left {
            self.left
        } else {
            self.right
        };
        let bottom = if self.bottom < self.top {
            self.top
        } else {
            self.bottom
        };
        Rect {
            top: self.top,
            left: self.left,
            right,
            bottom,
        }
    }

    /// Whether the point lies in the rectangle, edges included
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_unites() {
        let a = Rect::from_trbl(10, 50, 40, 20);
        let b = Rect::from_trbl(5, 45, 60, 30);
        assert_eq!(a.grow(&b), Rect::from_trbl(5, 50, 60, 20));
    }

    #[test]
    fn outer_constrain_pulls_overflowing_sides() {
        let bounds = Rect::from_trbl(20, 1014, 350, 20);
        let footprint = Rect::from_trbl(15, 1040, 370, 20);
        let res = bounds.outer_constrain(&bounds, &footprint);
        assert_eq!(res, Rect::from_trbl(25, 988, 330, 20));
    }

    #[test]
    fn outer_constrain_keeps_fitting_content() {
        let bounds = Rect::from_trbl(20, 1014, 350, 20);
        let footprint = Rect::from_trbl(30, 900, 300, 40);
        assert_eq!(bounds.outer_constrain(&bounds, &footprint), bounds);
    }

    #[test]
    fn outer_constrain_saturates() {
        let bounds = Rect::from_trbl(20, 1014, 350, 20);
        let footprint = Rect::from_trbl(20, i32::MAX, 370, i32::MIN);
        let res = bounds.outer_constrain(&bounds, &footprint).normalized();
        assert_eq!(res, Rect::from_trbl(20, i32::MAX, 330, i32::MAX));
        assert_eq!(res.width(), 0);
    }

    #[test]
    fn normalized_collapses_inverted() {
        let r = Rect::from_trbl(100, 10, 50, 40).normalized();
        assert_eq!(r, Rect::from_trbl(100, 40, 100, 40));
        assert!(r.width() >= 0);
        assert!(r.height() >= 0);
    }

    #[test]
    fn pad_and_size() {
        let r = Rect::from_size(Size::new(1024, 400)).pad(&Padding::from_trbl(20, 10, 50, 20));
        assert_eq!(r, Rect::from_trbl(20, 1014, 350, 20));
        assert_eq!(r.width(), 994);
        assert_eq!(r.height(), 330);
    }
}
