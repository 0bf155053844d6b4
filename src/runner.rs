use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::{Answer, Day, DayRow, InputSource, Part, Report, Solver};

/// Outcome of running one part `repeats` times.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRun {
    pub answer: Answer,
    pub mean: Duration,
    pub repeats: u32,
}

impl PartRun {
    pub fn mean_millis(&self) -> f64 {
        self.mean.as_secs_f64() * 1e3
    }
}

/// Runs `solver` on `input` `repeats` times (at least once), keeping the last answer and the
/// mean wall-clock time.
pub fn run_part(solver: Solver, input: &str, repeats: u32) -> Result<PartRun> {
    let repeats = repeats.max(1);

    let (mut answer, mut total) = timed(solver, input)?;
    for iteration in 1..repeats {
        let (next, elapsed) = timed(solver, input)?;
        trace!(iteration, ?elapsed, "repeat finished");
        answer = next;
        total += elapsed;
    }

    let mean = total / repeats;
    debug!(%answer, ?mean, repeats, "part finished");
    Ok(PartRun {
        answer,
        mean,
        repeats,
    })
}

fn timed(solver: Solver, input: &str) -> Result<(Answer, Duration)> {
    let start = Instant::now();
    let answer = solver(input)?;
    Ok((answer, start.elapsed()))
}

/// Runs every solved part of `days` against `source`, in order, and collects the results table.
///
/// A missing input file aborts the whole run, as does a failing solver.
pub fn run_days<'a>(
    days: impl IntoIterator<Item = &'a Day>,
    source: &InputSource,
    repeats: u32,
    no_results: bool,
    processor: &str,
) -> Result<Report> {
    let mut report = Report::new(repeats, no_results, processor);
    let mut total = Duration::default();
    for day in days {
        let mut row = DayRow::new(day.number);
        for part in Part::BOTH {
            let Some(solver) = day.runner(part, source.kind()) else {
                debug!(day = day.number, %part, "no solver registered");
                continue;
            };
            let input = source.load(&day.input_name(part))?;
            let run = run_part(solver, &input, repeats)
                .with_context(|| format!("Day {} part {} failed", day.number, part))?;
            debug!(
                day = day.number,
                %part,
                answer = %run.answer,
                "finished in {}",
                format_duration(run.mean)
            );
            total += run.mean;
            row.set(part, run);
        }
        report.push(row);
    }
    debug!("Total processing time: {}", format_duration(total));
    Ok(report)
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}
