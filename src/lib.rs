pub mod answer;
pub mod days;
pub mod input;
pub mod logger;
pub mod report;
pub mod runner;

pub use answer::Answer;
pub use days::{select_days, Day, Part, Solver, ALL_DAYS};
pub use input::{InputError, InputKind, InputSource};
pub use report::{DayRow, Report};
pub use runner::{run_days, run_part, PartRun};

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters!
pub fn parse_digits(bytes: &[u8]) -> u64 {
    let mut ret = 0;
    for b in bytes {
        ret = ret * 10 + u64::from(b - b'0');
    }
    ret
}
