//! VPCPLAN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, plan the
//! batch geometry, and print the JSON report. For programmatic use, prefer
//! the library API (`vpcplan::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
