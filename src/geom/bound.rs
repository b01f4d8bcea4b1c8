use core::fmt;

use super::{Point, H, W, X, Y};

/// Axis-aligned rectangle with inclusive corners.
///
/// Corners are stored as given; nothing enforces `top_left <= bottom_right`.
/// `width()` and `height()` are signed corner differences and a bound with a
/// non-positive extent is treated as empty by the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound {
    top_left: Point,
    bottom_right: Point,
}

impl Bound {
    /// Creates a bound from its two inclusive corners.
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Creates a bound from raw corner coordinates.
    #[inline]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Inclusive top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Inclusive bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Leftmost column.
    #[inline]
    pub fn left(&self) -> X {
        self.top_left.x
    }

    /// Rightmost column.
    #[inline]
    pub fn right(&self) -> X {
        self.bottom_right.x
    }

    /// Topmost row.
    #[inline]
    pub fn top(&self) -> Y {
        self.top_left.y
    }

    /// Bottom row.
    #[inline]
    pub fn bottom(&self) -> Y {
        self.bottom_right.y
    }

    /// Signed horizontal extent `right - left`.
    #[inline]
    pub fn width(&self) -> W {
        self.right() - self.left()
    }

    /// Signed vertical extent `bottom - top`.
    #[inline]
    pub fn height(&self) -> H {
        self.bottom() - self.top()
    }

    /// Signed product of `width()` and `height()`.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// True when either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width().0 <= 0 || self.height().0 <= 0
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Midpoint of the two corners, each axis rounded toward negative infinity.
    pub fn center(&self) -> Point {
        Point::from_axes(
            X::midpoint(self.left(), self.right()),
            Y::midpoint(self.top(), self.bottom()),
        )
    }

    /// Iterates every point strictly inside the bound in row-major order.
    ///
    /// The boundary ring is excluded, so bounds with an extent below 2 yield
    /// nothing.
    pub fn inner_coords(&self) -> impl Iterator<Item = Point> {
        let (x0, x1) = (self.left().0 + 1, self.right().0);
        let (y0, y1) = (self.top().0 + 1, self.bottom().0);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Point::new(x, y)))
    }

    /// Translates both corners by `offset`.
    #[inline]
    pub fn shift_pos(&self, offset: Point) -> Self {
        Self::new(self.top_left + offset, self.bottom_right + offset)
    }

    /// Translates both corners by `-offset`.
    #[inline]
    pub fn shift_neg(&self, offset: Point) -> Self {
        Self::new(self.top_left - offset, self.bottom_right - offset)
    }

    /// Same top-left corner with a different bottom-right corner.
    #[inline]
    pub fn with_bottom_right(&self, bottom_right: Point) -> Self {
        Self::new(self.top_left, bottom_right)
    }

    /// Intersects the bound with the pixel grid `[0, width) x [0, height)`.
    ///
    /// Returns `None` when no pixel of the grid lies inside the bound.
    pub fn clip_to(&self, width: usize, height: usize) -> Option<Self> {
        let max_x = i32::try_from(width).ok()?.checked_sub(1)?;
        let max_y = i32::try_from(height).ok()?.checked_sub(1)?;
        let x0 = self.left().0.max(0);
        let y0 = self.top().0.max(0);
        let x1 = self.right().0.min(max_x);
        let y1 = self.bottom().0.min(max_y);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Self::from_coords(x0, y0, x1, y1))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TopLeft: {}, BottomRight: {}",
            self.top_left, self.bottom_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::geom::{Point, H, W};

    #[test]
    fn extents_are_signed_differences() {
        let b = Bound::from_coords(2, 3, 10, 5);
        assert_eq!(b.width(), W(8));
        assert_eq!(b.height(), H(2));
        assert_eq!(b.area(), 16);

        let flipped = Bound::from_coords(10, 5, 2, 3);
        assert_eq!(flipped.width(), W(-8));
        assert_eq!(flipped.height(), H(-2));
        assert!(flipped.is_empty());
        assert!(Bound::from_coords(1, 1, 1, 9).is_empty());
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bound::from_coords(0, 0, 4, 4);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(4, 4)));
        assert!(b.contains(Point::new(2, 3)));
        assert!(!b.contains(Point::new(5, 4)));
        assert!(!b.contains(Point::new(-1, 2)));
    }

    #[test]
    fn center_floors_each_axis() {
        assert_eq!(Bound::from_coords(0, 0, 5, 4).center(), Point::new(2, 2));
        assert_eq!(Bound::from_coords(-5, -4, 0, 0).center(), Point::new(-3, -2));
    }

    #[test]
    fn inner_coords_skip_boundary_ring() {
        let b = Bound::from_coords(0, 0, 3, 2);
        let inner: Vec<_> = b.inner_coords().collect();
        assert_eq!(inner, vec![Point::new(1, 1), Point::new(2, 1)]);
        assert_eq!(Bound::from_coords(0, 0, 1, 1).inner_coords().count(), 0);
        assert_eq!(Bound::from_coords(4, 4, 0, 0).inner_coords().count(), 0);
    }

    #[test]
    fn shifts_commute() {
        let b = Bound::from_coords(3, 4, 9, 12);
        let offset = Point::new(-7, 5);
        assert_eq!(b.shift_pos(offset).shift_neg(offset), b);
        assert_eq!(b.shift_neg(offset).shift_pos(offset), b);
        assert_eq!(b.shift_pos(offset), Bound::from_coords(-4, 9, 2, 17));
    }

    #[test]
    fn with_bottom_right_keeps_top_left() {
        let b = Bound::from_coords(3, 4, 9, 12);
        let partial = b.with_bottom_right(Point::new(5, 12));
        assert_eq!(partial, Bound::from_coords(3, 4, 5, 12));
        assert_eq!(partial.top_left(), b.top_left());
    }

    #[test]
    fn clip_to_grid() {
        let b = Bound::from_coords(-3, 2, 20, 4);
        assert_eq!(b.clip_to(10, 10), Some(Bound::from_coords(0, 2, 9, 4)));
        assert_eq!(Bound::from_coords(12, 0, 15, 3).clip_to(10, 10), None);
        assert_eq!(b.clip_to(0, 10), None);
    }
}
