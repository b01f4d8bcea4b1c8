use crate::geom::{Bound, Point, X, Y};
use crate::integral::IntegralTable;
use crate::search::RecenterConfig;

/// Point that splits the mass of `bound` in half along each axis.
///
/// For X, finds the smallest column `c` in `[left, right)` whose partial
/// rectangle `top_left..=(c, bottom)` holds more than half of the bound's
/// total, and reports `c - 1`; Y is searched the same way over rows with the
/// partial rectangle `top_left..=(right, r)`. If no column crosses the half,
/// the search settles on `right` and the result is `right - 1`.
pub fn center_of_mass(table: &IntegralTable, bound: &Bound, cfg: &RecenterConfig) -> Point {
    let half = table.sum_bound(bound) / 2;

    let x = bisect(
        bound.left().get(),
        bound.right().get(),
        cfg.max_axis_steps,
        |c| {
            let partial = bound.with_bottom_right(Point::from_axes(X(c), bound.bottom()));
            table.sum_bound(&partial) > half
        },
    );
    let y = bisect(
        bound.top().get(),
        bound.bottom().get(),
        cfg.max_axis_steps,
        |r| {
            let partial = bound.with_bottom_right(Point::from_axes(bound.right(), Y(r)));
            table.sum_bound(&partial) > half
        },
    );

    Point::new(x - 1, y - 1)
}

/// Lower-bound binary search over `[lo, hi)` for the first value where
/// `exceeds` holds.
fn bisect(mut lo: i32, mut hi: i32, max_steps: usize, exceeds: impl Fn(i32) -> bool) -> i32 {
    for _ in 0..max_steps {
        if lo >= hi {
            break;
        }
        let mid = X::midpoint(X(lo), X(hi)).get();
        if exceeds(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::{bisect, center_of_mass};
    use crate::geom::{Bound, Point};
    use crate::integral::IntegralTable;
    use crate::search::RecenterConfig;

    #[test]
    fn bisect_finds_first_true() {
        assert_eq!(bisect(0, 100, 100, |v| v >= 37), 37);
        assert_eq!(bisect(-50, 50, 100, |v| v > -20), -19);
        assert_eq!(bisect(0, 10, 100, |_| false), 10);
        assert_eq!(bisect(5, 5, 100, |_| true), 5);
    }

    #[test]
    fn bisect_honours_step_cap() {
        // one step: mid = 50 is false, so lo moves to 51 and the search stops
        assert_eq!(bisect(0, 100, 1, |v| v >= 77), 51);
    }

    #[test]
    fn uniform_plane_centers_near_middle() {
        let plane = vec![1u8; 21 * 21];
        let table = IntegralTable::build(21, 21, &plane).unwrap();
        let bound = Bound::from_coords(0, 0, 20, 20);
        // total 441, half 220; column 10 is the first with 11 * 21 = 231 > 220
        let com = center_of_mass(&table, &bound, &RecenterConfig::default());
        assert_eq!(com, Point::new(9, 9));
    }

    #[test]
    fn empty_mass_settles_on_far_edge() {
        let plane = vec![0u16; 16];
        let table = IntegralTable::build(4, 4, &plane).unwrap();
        let bound = Bound::from_coords(0, 0, 3, 3);
        let com = center_of_mass(&table, &bound, &RecenterConfig::default());
        assert_eq!(com, Point::new(2, 2));
    }
}
