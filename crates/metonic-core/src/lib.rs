#![deny(missing_docs)]
#![doc = "Core value types for the metonic cycle engine: year symbols, cycles, segments, \
the cyclic window primitive and the shared error type."]

pub mod errors;
mod sequence;
mod symbol;
pub mod window;

pub use errors::{ErrorInfo, MetonicError};
pub use sequence::{Cycle, Segment};
pub use symbol::Symbol;
pub use window::{window_matches, CyclicWindow};

use crate::symbol::Symbol::{Intercalary as I, Ordinary as O};

/// The Athenian 19-year cycle as traditionally reconstructed.
pub const ATHENS: &str = "0100100101001001010";

const ATHENS_SYMBOLS: [Symbol; 19] = [O, I, O, O, I, O, O, I, O, I, O, O, I, O, O, I, O, I, O];

/// Returns [`ATHENS`] as a [`Cycle`].
pub fn athens() -> Cycle {
    Cycle::from_static(&ATHENS_SYMBOLS)
}
