//! Integer geometry used to address pixels.
//!
//! Coordinates and extents are distinct newtypes so that an X offset can never
//! be passed where a Y is expected. `X`/`Y` are absolute positions and `W`/`H`
//! are signed extents along the same axes:
//!
//! - `X + W -> X`, `X - W -> X`, `X - X -> W` (and likewise for `Y`/`H`);
//! - `W * H -> i64`, an area that cannot overflow for `i32` extents.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

mod bound;
mod point;

pub use bound::Bound;
pub use point::Point;

macro_rules! axis_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub i32);

        impl $name {
            /// Returns the raw integer value.
            #[inline]
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Returns the absolute value.
            #[inline]
            pub const fn abs(self) -> Self {
                Self(self.0.abs())
            }
        }

        impl Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

axis_newtype!(
    /// Horizontal pixel coordinate (column).
    X
);
axis_newtype!(
    /// Vertical pixel coordinate (row).
    Y
);
axis_newtype!(
    /// Signed horizontal extent.
    W
);
axis_newtype!(
    /// Signed vertical extent.
    H
);

macro_rules! axis_arith {
    ($coord:ident, $extent:ident) => {
        impl Add<$extent> for $coord {
            type Output = $coord;

            #[inline]
            fn add(self, rhs: $extent) -> Self::Output {
                $coord(self.0 + rhs.0)
            }
        }

        impl Sub<$extent> for $coord {
            type Output = $coord;

            #[inline]
            fn sub(self, rhs: $extent) -> Self::Output {
                $coord(self.0 - rhs.0)
            }
        }

        impl Sub<$coord> for $coord {
            type Output = $extent;

            #[inline]
            fn sub(self, rhs: $coord) -> Self::Output {
                $extent(self.0 - rhs.0)
            }
        }

        impl AddAssign<$extent> for $coord {
            #[inline]
            fn add_assign(&mut self, rhs: $extent) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign<$extent> for $coord {
            #[inline]
            fn sub_assign(&mut self, rhs: $extent) {
                self.0 -= rhs.0;
            }
        }

        impl $coord {
            /// Midpoint of two coordinates, rounded toward negative infinity.
            #[inline]
            pub fn midpoint(a: $coord, b: $coord) -> $coord {
                let sum = i64::from(a.0) + i64::from(b.0);
                // The floor of the mean lies between `a` and `b`, so it fits.
                $coord(sum.div_euclid(2) as i32)
            }
        }
    };
}

axis_arith!(X, W);
axis_arith!(Y, H);

impl Mul<H> for W {
    type Output = i64;

    #[inline]
    fn mul(self, rhs: H) -> Self::Output {
        i64::from(self.0) * i64::from(rhs.0)
    }
}

impl Mul<W> for H {
    type Output = i64;

    #[inline]
    fn mul(self, rhs: W) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::{H, W, X, Y};

    #[test]
    fn coordinate_minus_coordinate_is_extent() {
        assert_eq!(X(7) - X(3), W(4));
        assert_eq!(Y(2) - Y(5), H(-3));
        assert_eq!(X(3) + W(4), X(7));
        assert_eq!(Y(5) - H(3), Y(2));
    }

    #[test]
    fn midpoint_floors_toward_negative_infinity() {
        assert_eq!(X::midpoint(X(0), X(3)), X(1));
        assert_eq!(X::midpoint(X(-3), X(0)), X(-2));
        assert_eq!(Y::midpoint(Y(-1), Y(-2)), Y(-2));
        assert_eq!(Y::midpoint(Y(i32::MAX), Y(i32::MAX)), Y(i32::MAX));
    }

    #[test]
    fn area_uses_wide_accumulator() {
        assert_eq!(W(100_000) * H(100_000), 10_000_000_000i64);
        assert_eq!(H(-2) * W(3), -6);
    }
}
