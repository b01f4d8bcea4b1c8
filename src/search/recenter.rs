use crate::geom::Bound;
use crate::integral::IntegralTable;
use crate::search::{center_of_mass, RecenterConfig, RecenterOutcome};
use crate::trace::{trace_event, trace_span, trace_step};

/// Translates `bound` toward its mass center until it stabilizes.
///
/// Each iteration compares the bound's geometric center with
/// [`center_of_mass`]. When both axis offsets are below `cfg.threshold` the
/// current bound is returned as converged; otherwise the bound is shifted by
/// the offset (its size never changes). After `max_iterations` evaluations the
/// last shifted bound is returned unconverged. A zero budget returns `bound`
/// untouched.
pub fn recenter(
    table: &IntegralTable,
    bound: &Bound,
    max_iterations: usize,
    cfg: &RecenterConfig,
) -> RecenterOutcome {
    let _span = trace_span!("recenter", max_iterations = max_iterations).entered();

    let mut current = *bound;
    for iteration in 1..=max_iterations {
        let center = current.center();
        let mass = center_of_mass(table, &current, cfg);
        let shift = mass.shift_neg(center);
        trace_step!(
            "recenter_step",
            iteration = iteration,
            dx = shift.x.get(),
            dy = shift.y.get(),
        );

        if shift.x.abs().get() < cfg.threshold && shift.y.abs().get() < cfg.threshold {
            trace_event!("recenter_converged", iterations = iteration);
            return RecenterOutcome {
                bound: current,
                iterations: iteration,
                converged: true,
            };
        }
        current = current.shift_pos(shift);
    }

    trace_event!("recenter_exhausted", iterations = max_iterations);
    RecenterOutcome {
        bound: current,
        iterations: max_iterations,
        converged: false,
    }
}
