use std::error::Error;

use clap::Args;
use metonic_core::{Cycle, Segment};
use metonic_cycles::{cycle_set, in_cycle, Rules};
use serde::Serialize;

use super::emit;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Segment to look for.
    pub segment: Segment,
    /// Candidate cycles; the default Metonic cycle set when omitted.
    #[arg(value_name = "CYCLE")]
    pub candidates: Vec<Cycle>,
}

#[derive(Debug, Serialize)]
struct MatchReport {
    segment: Segment,
    candidates: usize,
    matches: Vec<Cycle>,
}

pub fn run(args: &MatchArgs) -> Result<(), Box<dyn Error>> {
    let candidates = if args.candidates.is_empty() {
        cycle_set(Rules::default())?
    } else {
        args.candidates.clone()
    };
    let matches = in_cycle(&args.segment, &candidates);
    emit(&MatchReport {
        segment: args.segment.clone(),
        candidates: candidates.len(),
        matches,
    })
}
