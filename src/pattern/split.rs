//! Partitioning a bound into weighted sub-bounds.

use core::fmt;

use super::Pattern;
use crate::geom::{Bound, Point, H, W};

/// One pattern cell mapped onto a concrete sub-bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub bound: Bound,
    pub weight: i32,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.weight, self.bound)
    }
}

/// Splits `bound` into `rows x cols` features, row-major.
///
/// Each axis extent is cut into segments whose lengths differ by at most one;
/// the first `size % n` segments take the extra unit. Segment `i` spans
/// `[edge[i], edge[i + 1]]` relative to the top-left corner, so neighboring
/// sub-bounds share their edge coordinate and the sub-bound extents sum to
/// the parent extent. A bound with a non-positive width or height, or a
/// pattern without cells, yields no features.
pub fn split<P: Pattern + ?Sized>(bound: &Bound, pattern: &P) -> Vec<Feature> {
    let rows = pattern.rows();
    let cols = pattern.cols();
    if bound.is_empty() || rows == 0 || cols == 0 {
        return Vec::new();
    }

    let (Some(x_edges), Some(y_edges)) = (
        split_edges(bound.width().get(), cols),
        split_edges(bound.height().get(), rows),
    ) else {
        return Vec::new();
    };

    let origin = bound.top_left();
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let y0 = origin.y + H(y_edges[r]);
        let y1 = origin.y + H(y_edges[r + 1]);
        for c in 0..cols {
            let x0 = origin.x + W(x_edges[c]);
            let x1 = origin.x + W(x_edges[c + 1]);
            out.push(Feature {
                bound: Bound::new(Point::from_axes(x0, y0), Point::from_axes(x1, y1)),
                weight: pattern.weight(r, c),
            });
        }
    }
    out
}

/// Cumulative cut positions for `n` fair segments of `size`.
///
/// Returns `n + 1` edges from 0 to `size`, or `None` for `n == 0` or an `n`
/// that does not fit the coordinate type.
pub(crate) fn split_edges(size: i32, n: usize) -> Option<Vec<i32>> {
    let parts = i32::try_from(n).ok().filter(|&p| p > 0)?;
    let base = size / parts;
    let extra = size % parts;
    let mut edges = Vec::with_capacity(n + 1);
    let mut acc = 0;
    edges.push(acc);
    for i in 0..parts {
        acc += base + i32::from(i < extra);
        edges.push(acc);
    }
    Some(edges)
}

#[cfg(test)]
mod tests {
    use super::{split, split_edges, Feature};
    use crate::geom::Bound;
    use crate::pattern::WeightMatrix;

    #[test]
    fn edges_front_load_remainder() {
        assert_eq!(split_edges(10, 3), Some(vec![0, 4, 7, 10]));
        assert_eq!(split_edges(9, 3), Some(vec![0, 3, 6, 9]));
        assert_eq!(split_edges(2, 4), Some(vec![0, 1, 2, 2, 2]));
        assert_eq!(split_edges(5, 0), None);
    }

    #[test]
    fn horizontal_split_of_offset_bound() {
        let bound = Bound::from_coords(10, 20, 15, 24);
        let feats = split(&bound, &WeightMatrix::horizontal());
        assert_eq!(
            feats,
            vec![
                Feature {
                    bound: Bound::from_coords(10, 20, 13, 24),
                    weight: 1,
                },
                Feature {
                    bound: Bound::from_coords(13, 20, 15, 24),
                    weight: -1,
                },
            ]
        );
        assert_eq!(feats[0].to_string(), "1@TopLeft: (10, 20), BottomRight: (13, 24)");
    }

    #[test]
    fn grid_is_row_major() {
        let bound = Bound::from_coords(0, 0, 4, 4);
        let feats = split(&bound, &WeightMatrix::diagonal());
        let weights: Vec<_> = feats.iter().map(|f| f.weight).collect();
        assert_eq!(weights, vec![1, -1, -1, 1]);
        assert_eq!(feats[3].bound, Bound::from_coords(2, 2, 4, 4));
    }

    #[test]
    fn degenerate_bounds_yield_nothing() {
        let p = WeightMatrix::inner3();
        assert!(split(&Bound::from_coords(3, 3, 3, 9), &p).is_empty());
        assert!(split(&Bound::from_coords(3, 3, 9, 3), &p).is_empty());
        assert!(split(&Bound::from_coords(9, 9, 3, 3), &p).is_empty());
    }
}
