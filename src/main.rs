mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use aoc2025::{logger, report::processor_name, run_days, select_days};
use cli::Args;

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);
    debug!(?args, "parsed arguments");

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let report = run_days(
        select_days(&args.day),
        &args.input_source(),
        args.repeats,
        args.no_results,
        &processor_name(),
    )?;
    print!("{report}");
    Ok(())
}
