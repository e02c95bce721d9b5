pub mod calendar;
pub mod cycles;
pub mod matching;
pub mod segments;
pub mod version;

use std::error::Error;

use metonic_cycles::to_canonical_json_bytes;
use serde::Serialize;

/// Prints `value` as canonical JSON on stdout.
pub fn emit<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
