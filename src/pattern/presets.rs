//! Named weight patterns.

use super::WeightMatrix;
use crate::util::{HaarError, HaarResult};

/// Named pattern shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// `[[1, -1]]`: left half minus right half.
    Horizontal,
    /// `[[1], [-1]]`: top half minus bottom half.
    Vertical,
    /// 2x2 checkerboard.
    Diagonal,
    /// 3x3 center-surround, center weighted 8.
    Inner3,
    /// 4x4 center-surround, inner 2x2 weighted 3.
    Inner4,
    /// 5x5 radial kernel: corners negative, weights growing toward the center.
    Inner5,
    /// `1 x n` row of ones.
    DynamicHorizontal(usize),
    /// `n x 1` column of ones.
    DynamicVertical(usize),
}

impl PatternKind {
    /// Builds the weight matrix for this shape.
    ///
    /// Only the dynamic shapes can fail, when their size is zero.
    pub fn to_matrix(self) -> HaarResult<WeightMatrix> {
        Ok(match self {
            PatternKind::Horizontal => WeightMatrix::horizontal(),
            PatternKind::Vertical => WeightMatrix::vertical(),
            PatternKind::Diagonal => WeightMatrix::diagonal(),
            PatternKind::Inner3 => WeightMatrix::inner3(),
            PatternKind::Inner4 => WeightMatrix::inner4(),
            PatternKind::Inner5 => WeightMatrix::inner5(),
            PatternKind::DynamicHorizontal(n) => WeightMatrix::dynamic_horizontal(n)?,
            PatternKind::DynamicVertical(n) => WeightMatrix::dynamic_vertical(n)?,
        })
    }
}

impl WeightMatrix {
    /// Left half positive, right half negative.
    pub fn horizontal() -> Self {
        Self::from_array([[1, -1]])
    }

    /// Top half positive, bottom half negative.
    pub fn vertical() -> Self {
        Self::from_array([[1], [-1]])
    }

    /// 2x2 checkerboard.
    pub fn diagonal() -> Self {
        Self::from_array([[1, -1], [-1, 1]])
    }

    /// 3x3 center-surround, center weighted 8.
    pub fn inner3() -> Self {
        Self::from_array([[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]])
    }

    /// 4x4 ring of -1 around a 2x2 core weighted 3.
    pub fn inner4() -> Self {
        Self::from_array([
            [-1, -1, -1, -1],
            [-1, 3, 3, -1],
            [-1, 3, 3, -1],
            [-1, -1, -1, -1],
        ])
    }

    /// Corner cells are -1, the cross around the center grows 0, 2, 4.
    pub fn inner5() -> Self {
        Self::from_array([
            [-1, -1, 0, -1, -1],
            [-1, 0, 2, 0, -1],
            [0, 2, 4, 2, 0],
            [-1, 0, 2, 0, -1],
            [-1, -1, 0, -1, -1],
        ])
    }

    /// A single row of `n` ones.
    pub fn dynamic_horizontal(n: usize) -> HaarResult<Self> {
        if n == 0 {
            return Err(HaarError::InvalidPattern {
                reason: "pattern has no columns",
            });
        }
        Self::new(vec![vec![1; n]])
    }

    /// A single column of `n` ones.
    pub fn dynamic_vertical(n: usize) -> HaarResult<Self> {
        if n == 0 {
            return Err(HaarError::InvalidPattern {
                reason: "pattern has no rows",
            });
        }
        Self::new(vec![vec![1]; n])
    }
}

#[cfg(test)]
mod tests {
    use super::PatternKind;
    use crate::pattern::{Pattern, WeightMatrix};

    #[test]
    fn edge_and_center_surround_presets_balance() {
        for m in [
            WeightMatrix::horizontal(),
            WeightMatrix::vertical(),
            WeightMatrix::diagonal(),
            WeightMatrix::inner3(),
            WeightMatrix::inner4(),
            WeightMatrix::inner5(),
        ] {
            assert_eq!(m.total(), 0, "{:?}", m.to_rows());
        }
    }

    #[test]
    fn preset_shapes() {
        assert_eq!(WeightMatrix::horizontal().to_rows(), vec![vec![1, -1]]);
        assert_eq!(WeightMatrix::vertical().to_rows(), vec![vec![1], vec![-1]]);
        let inner5 = WeightMatrix::inner5();
        assert_eq!((inner5.rows(), inner5.cols()), (5, 5));
        assert_eq!(inner5.weight(2, 2), 4);
        assert_eq!(inner5.weight(0, 0), -1);
    }

    #[test]
    fn dynamic_presets_reject_zero() {
        let row = PatternKind::DynamicHorizontal(4).to_matrix().unwrap();
        assert_eq!((row.rows(), row.cols()), (1, 4));
        let col = PatternKind::DynamicVertical(3).to_matrix().unwrap();
        assert_eq!((col.rows(), col.cols()), (3, 1));
        assert!(PatternKind::DynamicHorizontal(0).to_matrix().is_err());
        assert!(PatternKind::DynamicVertical(0).to_matrix().is_err());
    }
}
