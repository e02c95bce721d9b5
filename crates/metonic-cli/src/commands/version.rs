use std::error::Error;

use clap::Args;
use serde::Serialize;

use super::emit;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit name, version and target architecture as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    arch: &'static str,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    emit(&VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        arch: std::env::consts::ARCH,
    })
}
