#![deny(missing_docs)]
#![doc = "Generation and analysis of intercalation cycles: cyclic run-length constrained \
enumeration, rotation canonicalisation, segment extraction and segment membership."]

/// Rotation canonicalisation and orbit helpers.
pub mod canonical;
/// Constrained enumeration of raw cycles.
pub mod generate;
/// Content digests for cycle listings.
pub mod hash;
/// Segment membership tests.
pub mod matcher;
/// Generation rules and cycle sources.
pub mod rules;
/// Segment extraction.
pub mod segments;
/// JSON helpers and report payloads.
#[path = "serde.rs"]
pub mod serde_io;

pub use canonical::{
    are_rotations, canonical_form, cycle_set, minimal_period, minimal_rotation_offset, orbit_size,
};
pub use generate::{combinations, generate, longest_cyclic_run, within_run_limits, PositionChoices};
pub use hash::cycle_set_digest;
pub use matcher::{in_cycle, occurs_in};
pub use rules::{CycleSource, IntercalaryCounts, Rules};
pub use segments::{segments, segments_of_all};
pub use serde_io::{from_json_slice, to_canonical_json_bytes, CycleReport};
