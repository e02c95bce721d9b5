use metonic_core::Cycle;
use sha2::{Digest, Sha256};

/// SHA-256 digest over an ordered cycle listing, rendered as lowercase hex.
///
/// The digest depends on order, so canonical listings from `cycle_set`
/// compare equal exactly when they contain the same classes.
pub fn cycle_set_digest(cycles: &[Cycle]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((cycles.len() as u64).to_le_bytes());
    for cycle in cycles {
        hasher.update((cycle.len() as u64).to_le_bytes());
        hasher.update(cycle.to_string().as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
