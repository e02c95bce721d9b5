use std::error::Error;

use clap::Args;
use metonic_calendar::{from_metonic, to_metonic};
use serde_json::json;

use super::emit;

#[derive(Args, Debug)]
pub struct ToMetonicArgs {
    /// Astronomical year (1 BCE is 0, 2 BCE is -1).
    #[arg(allow_negative_numbers = true)]
    pub year: i64,
}

#[derive(Args, Debug)]
pub struct FromMetonicArgs {
    /// Cycle number; cycle 1 starts in -431.
    #[arg(allow_negative_numbers = true)]
    pub cycle: i64,
    /// Position within the cycle, from 1 to 19.
    pub position: u32,
}

pub fn run_to_metonic(args: &ToMetonicArgs) -> Result<(), Box<dyn Error>> {
    let located = to_metonic(args.year);
    emit(&json!({
        "year": args.year,
        "cycle": located.cycle,
        "position": located.position,
    }))
}

pub fn run_from_metonic(args: &FromMetonicArgs) -> Result<(), Box<dyn Error>> {
    let year = from_metonic(args.cycle, args.position)?;
    emit(&json!({
        "year": year,
        "cycle": args.cycle,
        "position": args.position,
    }))
}
