use core::fmt;
use core::ops::{Add, Sub};

use super::{H, W, X, Y};

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: X,
    pub y: Y,
}

impl Point {
    /// Creates a point from raw column and row values.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x: X(x), y: Y(y) }
    }

    /// Creates a point from typed axes.
    #[inline]
    pub const fn from_axes(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// One row up.
    #[inline]
    pub fn up(self) -> Self {
        self.add_y(H(-1))
    }

    /// One row down.
    #[inline]
    pub fn down(self) -> Self {
        self.add_y(H(1))
    }

    /// One column left.
    #[inline]
    pub fn left(self) -> Self {
        self.add_x(W(-1))
    }

    /// One column right.
    #[inline]
    pub fn right(self) -> Self {
        self.add_x(W(1))
    }

    /// Moves along the X axis only.
    #[inline]
    pub fn add_x(self, dx: W) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }

    /// Moves along the Y axis only.
    #[inline]
    pub fn add_y(self, dy: H) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }

    /// Translates by `offset`.
    #[inline]
    pub fn shift_pos(self, offset: Point) -> Self {
        self + offset
    }

    /// Translates by `-offset`.
    #[inline]
    pub fn shift_neg(self, offset: Point) -> Self {
        self - offset
    }

    /// Row-major index of this point inside a `width x height` grid.
    ///
    /// Returns `None` when the point lies outside the grid, including any
    /// negative coordinate.
    #[inline]
    pub fn index_in(self, width: usize, height: usize) -> Option<usize> {
        let x = usize::try_from(self.x.0).ok()?;
        let y = usize::try_from(self.y.0).ok()?;
        if x >= width || y >= height {
            return None;
        }
        Some(y * width + x)
    }

    /// Inverse of [`Point::index_in`] for a row-major grid of `width` columns.
    ///
    /// Returns `None` for a zero `width` or a coordinate beyond `i32`.
    #[inline]
    pub fn from_index(width: usize, index: usize) -> Option<Self> {
        if width == 0 {
            return None;
        }
        let x = i32::try_from(index % width).ok()?;
        let y = i32::try_from(index / width).ok()?;
        Some(Self::new(x, y))
    }

    /// Scales the offset from `center` by `factor`, truncating toward zero.
    pub fn scale(self, factor: f64, center: Point) -> Self {
        let dx = f64::from((self.x - center.x).0) * factor;
        let dy = f64::from((self.y - center.y).0) * factor;
        Self {
            x: center.x + W(dx as i32),
            y: center.y + H(dy as i32),
        }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x + W(rhs.x.0),
            y: self.y + H(rhs.y.0),
        }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x - W(rhs.x.0),
            y: self.y - H(rhs.y.0),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
