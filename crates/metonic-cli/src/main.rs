use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    calendar::{self, FromMetonicArgs, ToMetonicArgs},
    cycles::{self, CyclesArgs},
    matching::{self, MatchArgs},
    segments::{self, SegmentsArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "metonic", about = "Lunisolar intercalation cycle explorer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every cycle satisfying the rules, rotations included.
    Combinations(CyclesArgs),
    /// List one canonical cycle per rotation class.
    Cycles(CyclesArgs),
    /// List the unique segments of one or more cycles.
    Segments(SegmentsArgs),
    /// Find the candidate cycles containing a segment.
    Match(MatchArgs),
    /// Convert an astronomical year to a Metonic cycle and position.
    ToMetonic(ToMetonicArgs),
    /// Convert a Metonic cycle and position to an astronomical year.
    FromMetonic(FromMetonicArgs),
    /// Print the tool version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Combinations(args) => cycles::run_combinations(&args),
        Command::Cycles(args) => cycles::run_cycle_set(&args),
        Command::Segments(args) => segments::run(&args),
        Command::Match(args) => matching::run(&args),
        Command::ToMetonic(args) => calendar::run_to_metonic(&args),
        Command::FromMetonic(args) => calendar::run_from_metonic(&args),
        Command::Version(args) => version::run(&args),
    }
}
