//! The results table printed after a run.

use std::fmt::{self, Display, Write};

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::{Part, PartRun};

const TITLE: &str = "Advent of Code 2025";
const SIGNIFICANT_DIGITS: i32 = 7;

/// Results for both parts of one day. Parts without a solver stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: u8,
    parts: [Option<PartRun>; 2],
}

impl DayRow {
    pub fn new(day: u8) -> Self {
        Self {
            day,
            parts: [None, None],
        }
    }

    pub fn set(&mut self, part: Part, run: PartRun) {
        self.parts[part.index()] = Some(run);
    }

    pub fn part(&self, part: Part) -> Option<&PartRun> {
        self.parts[part.index()].as_ref()
    }
}

#[derive(Debug)]
pub struct Report {
    caption: String,
    no_results: bool,
    rows: Vec<DayRow>,
}

impl Report {
    pub fn new(repeats: u32, no_results: bool, processor: &str) -> Self {
        let mut caption = format!("Run on {processor}.");
        if repeats != 1 {
            caption.insert_str(0, &format!("Timings show average of {repeats} runs. "));
        }
        Self {
            caption,
            no_results,
            rows: Vec::new(),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn push(&mut self, row: DayRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[DayRow] {
        &self.rows
    }

    fn header(&self) -> &'static [&'static str] {
        if self.no_results {
            &["Day", "Part 1 (ms)", "Part 2 (ms)"]
        } else {
            &["Day", "Part 1", "Time (ms)", "Part 2", "Time (ms)"]
        }
    }

    fn cells(&self, row: &DayRow) -> Vec<String> {
        let mut cells = vec![row.day.to_string()];
        for part in Part::BOTH {
            let run = row.part(part);
            if !self.no_results {
                cells.push(run.map(|r| r.answer.to_string()).unwrap_or_default());
            }
            cells.push(run.map(|r| format_millis(r.mean_millis())).unwrap_or_default());
        }
        cells
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let body: Vec<Vec<String>> = self.rows.iter().map(|row| self.cells(row)).collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        // Each column carries one space of padding either side plus its left border.
        let table_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;

        writeln!(f, "{TITLE:^table_width$}")?;
        write_rule(f, &widths, ['┌', '┬', '┐'])?;
        write_cells(f, &widths, header)?;
        write_rule(f, &widths, ['├', '┼', '┤'])?;
        for cells in &body {
            write_cells(f, &widths, cells.as_slice())?;
        }
        write_rule(f, &widths, ['└', '┴', '┘'])?;
        writeln!(f, "{:^table_width$}", self.caption)
    }
}

fn write_rule(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    [left, mid, right]: [char; 3],
) -> fmt::Result {
    f.write_char(left)?;
    for (i, width) in widths.iter().enumerate() {
        f.write_str(&"─".repeat(width + 2))?;
        f.write_char(if i + 1 == widths.len() { right } else { mid })?;
    }
    writeln!(f)
}

fn write_cells<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: &[S],
) -> fmt::Result {
    f.write_char('│')?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, " {:<width$} │", cell.as_ref())?;
    }
    writeln!(f)
}

/// Formats milliseconds to seven significant digits. Trailing zeros are dropped, but fixed-point
/// output keeps at least one decimal (`2.0`). Values of a million or more, or below `0.0001`,
/// switch to exponent notation (`1.234568e+06`).
pub fn format_millis(ms: f64) -> String {
    if !ms.is_finite() {
        return ms.to_string();
    }
    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{ms:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (-4..SIGNIFICANT_DIGITS - 1).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        let fixed = format!("{ms:.decimals$}");
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{trimmed}0")
        } else {
            trimmed.to_owned()
        }
    } else {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// Brand string of the first CPU, for the table caption.
pub fn processor_name() -> String {
    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));
    system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_owned())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown processor".to_owned())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::Answer;

    fn run(answer: u64, micros: u64) -> PartRun {
        PartRun {
            answer: Answer::Number(answer),
            mean: Duration::from_micros(micros),
            repeats: 1,
        }
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0.123456789), "0.1234568");
        assert_eq!(format_millis(12.3456789), "12.34568");
        assert_eq!(format_millis(0.00012345678), "0.0001234568");
        assert_eq!(format_millis(1.5), "1.5");
        assert_eq!(format_millis(2.0), "2.0");
        assert_eq!(format_millis(0.0), "0.0");
    }

    #[test]
    fn test_format_millis_exponent() {
        assert_eq!(format_millis(1234567.8), "1.234568e+06");
        assert_eq!(format_millis(12345678.9), "1.234568e+07");
        assert_eq!(format_millis(9999999.6), "1e+07");
        assert_eq!(format_millis(0.0000123456), "1.23456e-05");
    }

    #[test]
    fn test_caption() {
        assert_eq!(Report::new(1, false, "Test CPU").caption(), "Run on Test CPU.");
        assert_eq!(
            Report::new(10, false, "Test CPU").caption(),
            "Timings show average of 10 runs. Run on Test CPU."
        );
    }

    #[test]
    fn test_render() {
        let mut report = Report::new(1, false, "CPU");
        let mut row = DayRow::new(1);
        row.set(Part::One, run(3, 1500));
        row.set(Part::Two, run(6, 250));
        report.push(row);
        report.push(DayRow::new(10));

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "│ Day │ Part 1 │ Time (ms) │ Part 2 │ Time (ms) │");
        assert_eq!(lines[4], "│ 1   │ 3      │ 1.5       │ 6      │ 0.25      │");
        assert_eq!(lines[5], "│ 10  │        │           │        │           │");
        assert_eq!(lines[0].trim(), TITLE);
        assert_eq!(lines[7].trim(), "Run on CPU.");
    }

    #[test]
    fn test_render_without_results() {
        let mut report = Report::new(1, true, "CPU");
        let mut row = DayRow::new(2);
        row.set(Part::One, run(1227775554, 2000));
        report.push(row);

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "│ Day │ Part 1 (ms) │ Part 2 (ms) │");
        assert_eq!(lines[4], "│ 2   │ 2.0         │             │");
        assert!(!rendered.contains("1227775554"));
    }
}
