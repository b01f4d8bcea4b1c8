//! Center-of-mass search and iterative recentering.
//!
//! `center_of_mass` bisects the channel mass of a bound along each axis with
//! a bounded binary search over partial-rectangle sums. `recenter` repeatedly
//! translates a bound by the offset between its geometric center and its mass
//! center until the offset falls under a threshold or the iteration budget
//! runs out.

mod mass;
mod recenter;

pub use mass::center_of_mass;
pub use recenter::recenter;

use crate::geom::Bound;

/// Tuning knobs for the mass search and recentering loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecenterConfig {
    /// Recentering stops once both axis offsets are strictly below this many pixels.
    pub threshold: i32,
    /// Cap on binary-search steps per axis.
    pub max_axis_steps: usize,
}

impl Default for RecenterConfig {
    fn default() -> Self {
        Self {
            threshold: 5,
            max_axis_steps: 100,
        }
    }
}

/// Result of a recentering run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecenterOutcome {
    /// Last bound computed.
    pub bound: Bound,
    /// Mass evaluations performed.
    pub iterations: usize,
    /// False when the budget ran out before the offset fell under the threshold.
    pub converged: bool,
}
