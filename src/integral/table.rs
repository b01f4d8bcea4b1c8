//! Single-channel summed-area table.

use crate::geom::{Bound, Point};
use crate::util::{HaarError, HaarResult};

/// Summed-area table over one channel plane.
///
/// Cell `(x, y)` holds the sum of the source over `[0, 0]..=[x, y]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralTable {
    sums: Vec<i64>,
    width: usize,
    height: usize,
}

impl IntegralTable {
    /// Integrates a row-major plane of `width * height` samples.
    ///
    /// Fails with [`HaarError::DimensionMismatch`] when either dimension is
    /// zero or the plane length differs from `width * height`.
    pub fn build<T>(width: usize, height: usize, samples: &[T]) -> HaarResult<Self>
    where
        T: Copy + Into<i64>,
    {
        let mismatch = HaarError::DimensionMismatch {
            width,
            height,
            len: samples.len(),
        };
        if width == 0 || height == 0 {
            return Err(mismatch);
        }
        let len = width.checked_mul(height).ok_or_else(|| mismatch.clone())?;
        if samples.len() != len {
            return Err(mismatch);
        }

        let mut sums = vec![0i64; len];
        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let up = if y > 0 { sums[idx - width] } else { 0 };
                let left = if x > 0 { sums[idx - 1] } else { 0 };
                let diag = if x > 0 && y > 0 {
                    sums[idx - width - 1]
                } else {
                    0
                };
                let sample: i64 = samples[idx].into();
                sums[idx] = up + left - diag + sample;
            }
        }

        Ok(Self {
            sums,
            width,
            height,
        })
    }

    /// Returns the table width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the table height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cumulative sums in row-major order.
    pub fn as_slice(&self) -> &[i64] {
        &self.sums
    }

    /// Cumulative sum at `p`, zero for any coordinate outside the table.
    #[inline]
    pub fn at(&self, p: Point) -> i64 {
        p.index_in(self.width, self.height)
            .map_or(0, |idx| self.sums[idx])
    }

    /// Sum of the source over the inclusive rectangle `top_left..=bottom_right`.
    ///
    /// The rectangle is first clipped to the table, so parts outside the image
    /// contribute nothing; a rectangle with no cell inside the table, or with
    /// corners in the wrong order, sums to zero.
    pub fn sum(&self, top_left: Point, bottom_right: Point) -> i64 {
        let Some(clipped) =
            Bound::new(top_left, bottom_right).clip_to(self.width, self.height)
        else {
            return 0;
        };
        let tl = clipped.top_left();
        let br = clipped.bottom_right();
        self.at(br) - self.at(Point::from_axes(tl.x, br.y).left())
            - self.at(Point::from_axes(br.x, tl.y).up())
            + self.at(tl.left().up())
    }

    /// Sum of the source over `bound`.
    #[inline]
    pub fn sum_bound(&self, bound: &Bound) -> i64 {
        self.sum(bound.top_left(), bound.bottom_right())
    }
}
