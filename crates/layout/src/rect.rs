//! Rectangle helpers missing from `embedded-graphics`.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Smallest rectangle containing both `a` and `b`.
#[must_use]
pub fn union(a: &Rectangle, b: &Rectangle) -> Rectangle {
    let left = a.top_left.x.min(b.top_left.x);
    let top = a.top_left.y.min(b.top_left.y);
    let right = (a.top_left.x + a.size.width as i32).max(b.top_left.x + b.size.width as i32);
    let bottom = (a.top_left.y + a.size.height as i32).max(b.top_left.y + b.size.height as i32);
    Rectangle::new(
        Point::new(left, top),
        Size::new((right - left) as u32, (bottom - top) as u32),
    )
}

/// Shrink `r` by `dx` on the left and right and `dy` on the top and bottom.
///
/// Negative values grow the rectangle. Shrinking past the rectangle's own
/// extent clamps the size to zero around the moved corner.
#[must_use]
pub fn inset(r: &Rectangle, dx: i32, dy: i32) -> Rectangle {
    let top_left = Point::new(r.top_left.x + dx, r.top_left.y + dy);
    let width = (r.size.width as i32 - 2 * dx).max(0);
    let height = (r.size.height as i32 - 2 * dy).max(0);
    Rectangle::new(top_left, Size::new(width as u32, height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_disjoint_rects_spans_both() {
        let a = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
        let b = Rectangle::new(Point::new(50, 5), Size::new(10, 10));
        let u = union(&a, &b);
        assert_eq!(u, Rectangle::new(Point::new(10, 5), Size::new(50, 25)));
    }

    #[test]
    fn union_with_contained_rect_is_identity() {
        let a = Rectangle::new(Point::new(0, 0), Size::new(100, 100));
        let b = Rectangle::new(Point::new(10, 10), Size::new(5, 5));
        assert_eq!(union(&a, &b), a);
        assert_eq!(union(&b, &a), a);
    }

    #[test]
    fn inset_shrinks_both_axes() {
        let r = Rectangle::new(Point::new(10, 10), Size::new(100, 60));
        assert_eq!(
            inset(&r, 7, 20),
            Rectangle::new(Point::new(17, 30), Size::new(86, 20))
        );
    }

    #[test]
    fn negative_inset_grows() {
        let r = Rectangle::new(Point::new(10, 10), Size::new(30, 30));
        assert_eq!(
            inset(&r, -5, -5),
            Rectangle::new(Point::new(5, 5), Size::new(40, 40))
        );
    }

    #[test]
    fn overshooting_inset_clamps_to_zero_size() {
        let r = Rectangle::new(Point::new(0, 0), Size::new(10, 10));
        let shrunk = inset(&r, 20, 20);
        assert_eq!(shrunk.size, Size::new(0, 0));
    }
}
