use std::error::Error;

use clap::Args;
use metonic_core::{Cycle, Segment};
use metonic_cycles::segments_of_all;
use serde::Serialize;

use super::emit;

#[derive(Args, Debug)]
pub struct SegmentsArgs {
    /// Cycles to read segments from.
    #[arg(required = true, value_name = "CYCLE")]
    pub cycles: Vec<Cycle>,
    /// Segment length in years.
    #[arg(long, short = 'k')]
    pub length: usize,
}

#[derive(Debug, Serialize)]
struct SegmentsReport {
    length: usize,
    count: usize,
    segments: Vec<Segment>,
}

pub fn run(args: &SegmentsArgs) -> Result<(), Box<dyn Error>> {
    let segments = segments_of_all(&args.cycles, args.length)?;
    emit(&SegmentsReport {
        length: args.length,
        count: segments.len(),
        segments,
    })
}
