use std::collections::BTreeSet;

use metonic_core::{Cycle, ErrorInfo, MetonicError, Segment};
use tracing::debug;

fn check_length(k: usize) -> Result<(), MetonicError> {
    if k == 0 {
        return Err(MetonicError::Argument(
            ErrorInfo::new("segment-length", "segments must be at least one year long")
                .with_context("k", k),
        ));
    }
    Ok(())
}

fn collect_windows(
    cycle: &Cycle,
    k: usize,
    into: &mut BTreeSet<Segment>,
) -> Result<(), MetonicError> {
    for start in 0..cycle.len() {
        into.insert(Segment::from_symbols(cycle.window(start, k).collect())?);
    }
    Ok(())
}

/// Unique windows of length `k` read around `cycle`, sorted ascending.
///
/// Windows start at every position and wrap past the end; when `k` exceeds
/// the cycle length the cycle repeats as often as needed.
pub fn segments(cycle: &Cycle, k: usize) -> Result<Vec<Segment>, MetonicError> {
    check_length(k)?;
    let mut unique = BTreeSet::new();
    collect_windows(cycle, k, &mut unique)?;
    Ok(unique.into_iter().collect())
}

/// Union of [`segments`] over several cycles, sorted ascending.
pub fn segments_of_all(cycles: &[Cycle], k: usize) -> Result<Vec<Segment>, MetonicError> {
    check_length(k)?;
    let mut unique = BTreeSet::new();
    for cycle in cycles {
        collect_windows(cycle, k, &mut unique)?;
    }
    debug!(cycles = cycles.len(), k, segments = unique.len(), "extracted segments");
    Ok(unique.into_iter().collect())
}
