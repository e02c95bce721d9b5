use metonic_core::{Cycle, CyclicWindow, MetonicError};
use rayon::prelude::*;
use tracing::debug;

use crate::generate::combinations;
use crate::rules::CycleSource;

/// Offset of the lexicographically smallest rotation.
///
/// When several offsets produce the same rotation (periodic cycles) the
/// smallest offset is returned.
pub fn minimal_rotation_offset(cycle: &Cycle) -> usize {
    let ring = cycle.symbols();
    let len = ring.len();
    (1..len).fold(0, |best, candidate| {
        let current = CyclicWindow::new(ring, best, len);
        if CyclicWindow::new(ring, candidate, len).lt(current) {
            candidate
        } else {
            best
        }
    })
}

/// Canonical representative of the rotation class of `cycle`.
pub fn canonical_form(cycle: &Cycle) -> Cycle {
    cycle.rotate(minimal_rotation_offset(cycle))
}

/// Returns true when `a` and `b` are rotations of one another.
pub fn are_rotations(a: &Cycle, b: &Cycle) -> bool {
    a.len() == b.len() && canonical_form(a) == canonical_form(b)
}

/// Smallest shift that maps the cycle onto itself.
pub fn minimal_period(cycle: &Cycle) -> usize {
    let len = cycle.len();
    (1..len)
        .filter(|shift| len % shift == 0)
        .find(|&shift| cycle.window(shift, len).eq(cycle.symbols().iter().copied()))
        .unwrap_or(len)
}

/// Number of distinct rotations of `cycle`.
///
/// Equals the minimal period: shifts beyond it repeat earlier rotations.
/// A cycle without rotational symmetry has an orbit as long as itself.
pub fn orbit_size(cycle: &Cycle) -> usize {
    minimal_period(cycle)
}

/// Reduces the source to one canonical cycle per rotation class.
///
/// The result is sorted ascending and free of duplicates.
pub fn cycle_set(source: impl Into<CycleSource>) -> Result<Vec<Cycle>, MetonicError> {
    let cycles = combinations(source)?;
    let mut classes: Vec<Cycle> = cycles.par_iter().map(canonical_form).collect();
    classes.sort_unstable();
    classes.dedup();
    debug!(
        inputs = cycles.len(),
        classes = classes.len(),
        "reduced cycles to rotation classes"
    );
    Ok(classes)
}
