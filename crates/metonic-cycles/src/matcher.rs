use metonic_core::{window_matches, Cycle, Segment};
use rayon::prelude::*;
use tracing::debug;

/// Returns true when `segment` can be read around `cycle` from some start.
pub fn occurs_in(segment: &Segment, cycle: &Cycle) -> bool {
    (0..cycle.len()).any(|start| window_matches(cycle.symbols(), start, segment.symbols()))
}

/// Candidates containing `segment`, in their original order.
///
/// A single cycle is matched by passing `std::slice::from_ref(&cycle)`.
pub fn in_cycle(segment: &Segment, candidates: &[Cycle]) -> Vec<Cycle> {
    let matches: Vec<Cycle> = candidates
        .par_iter()
        .filter(|candidate| occurs_in(segment, candidate))
        .cloned()
        .collect();
    debug!(
        segment = %segment,
        candidates = candidates.len(),
        matches = matches.len(),
        "matched segment against candidates"
    );
    matches
}
