use std::error::Error;

use clap::Args;
use metonic_core::{Cycle, MetonicError};
use metonic_cycles::{combinations, cycle_set, CycleReport, CycleSource, IntercalaryCounts, Rules};
use tracing::info;

use super::emit;

#[derive(Args, Debug)]
pub struct CyclesArgs {
    /// Cycle length in years.
    #[arg(long, default_value_t = 19)]
    pub n: usize,
    /// Admissible number of intercalary years; repeat for several counts.
    #[arg(long = "i-count", default_values_t = [7], allow_negative_numbers = true)]
    pub i_count: Vec<i64>,
    /// Longest permitted run of intercalary years.
    #[arg(long = "max-i", default_value_t = 1)]
    pub max_i: usize,
    /// Longest permitted run of ordinary years.
    #[arg(long = "max-o", default_value_t = 2)]
    pub max_o: usize,
    /// Use these cycles instead of generating from the rules.
    #[arg(long = "cycle", value_name = "CYCLE")]
    pub cycles: Vec<Cycle>,
}

impl CyclesArgs {
    fn source(&self) -> Result<(Option<Rules>, CycleSource), MetonicError> {
        if !self.cycles.is_empty() {
            return Ok((None, CycleSource::Cycles(self.cycles.clone())));
        }
        let rules = Rules {
            n: self.n,
            i_count: IntercalaryCounts::from_signed(&self.i_count)?,
            max_i: self.max_i,
            max_o: self.max_o,
        };
        Ok((Some(rules.clone()), CycleSource::Rules(rules)))
    }
}

pub fn run_combinations(args: &CyclesArgs) -> Result<(), Box<dyn Error>> {
    let (rules, source) = args.source()?;
    let cycles = combinations(source)?;
    info!(count = cycles.len(), "generated combinations");
    emit(&CycleReport::new(rules, cycles))
}

pub fn run_cycle_set(args: &CyclesArgs) -> Result<(), Box<dyn Error>> {
    let (rules, source) = args.source()?;
    let cycles = cycle_set(source)?;
    info!(count = cycles.len(), "reduced to rotation classes");
    emit(&CycleReport::new(rules, cycles))
}
