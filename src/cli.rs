//! CLI argument parsing using clap

use std::path::PathBuf;

use aoc2025::{InputKind, InputSource};
use clap::Parser;

/// Advent of Code 2025 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2025", about = "Run Advent of Code 2025 solvers", version)]
pub struct Args {
    /// One or more specific days to run. Add flag multiple times for multiple days.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub day: Vec<u8>,

    /// Run test inputs instead of real inputs
    #[arg(short, long)]
    pub test: bool,

    /// Number of repeats to run for average timing
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeats: u32,

    /// Don't report results, just timings
    #[arg(long)]
    pub no_results: bool,

    /// Directory holding the `test/` and `eval/` puzzle inputs [default: the crate's `data/`]
    #[arg(long, env = "AOC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn input_source(&self) -> InputSource {
        let kind = InputKind::from_test_flag(self.test);
        match &self.data_dir {
            Some(dir) => InputSource::new(dir, kind),
            None => InputSource::bundled(kind),
        }
    }
}
