//! Weight patterns and the feature splitter.
//!
//! A pattern is a rectangular matrix of signed weights. Splitting a bound by a
//! pattern lays the matrix over the bound as evenly as integer extents allow
//! and pairs every cell's sub-bound with its weight.

mod presets;
mod split;

pub use presets::PatternKind;
pub use split::{split, Feature};

use crate::util::{HaarError, HaarResult};

/// Rectangular grid of signed weights.
///
/// Implementors must report a fixed `rows() x cols()` shape and answer
/// `weight` for every cell inside it.
pub trait Pattern {
    /// Number of rows.
    fn rows(&self) -> usize;
    /// Number of columns.
    fn cols(&self) -> usize;
    /// Weight at `(row, col)`; only called with in-range indices.
    fn weight(&self, row: usize, col: usize) -> i32;
}

/// Validated, row-major weight matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightMatrix {
    weights: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl WeightMatrix {
    /// Creates a matrix from its rows.
    ///
    /// Fails with [`HaarError::InvalidPattern`] when there are no rows, the
    /// first row is empty, or any row differs in length from the first.
    pub fn new(rows: Vec<Vec<i32>>) -> HaarResult<Self> {
        let first = rows.first().ok_or(HaarError::InvalidPattern {
            reason: "pattern has no rows",
        })?;
        let cols = first.len();
        if cols == 0 {
            return Err(HaarError::InvalidPattern {
                reason: "pattern has no columns",
            });
        }
        if rows.iter().any(|row| row.len() != cols) {
            return Err(HaarError::InvalidPattern {
                reason: "inconsistent row width",
            });
        }
        let n_rows = rows.len();
        Ok(Self {
            weights: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols,
        })
    }

    /// Builds a matrix from a fixed-size array; the shape is valid by type.
    pub(crate) fn from_array<const R: usize, const C: usize>(rows: [[i32; C]; R]) -> Self {
        Self {
            weights: rows.iter().flatten().copied().collect(),
            rows: R,
            cols: C,
        }
    }

    /// Weight at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.weights.get(row * self.cols + col).copied()
    }

    /// Returns the weights as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.weights.chunks(self.cols).map(<[i32]>::to_vec).collect()
    }

    /// Sum of all weights; zero for balanced edge detectors.
    pub fn total(&self) -> i64 {
        self.weights.iter().map(|&w| i64::from(w)).sum()
    }
}

impl Pattern for WeightMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.cols + col]
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn weight(&self, row: usize, col: usize) -> i32 {
        (**self).weight(row, col)
    }
}
