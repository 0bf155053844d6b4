pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;

use std::{borrow::Cow, fmt};

use anyhow::Result;

use crate::{Answer, InputKind};

/// Every puzzle part has this shape once registered.
pub type Solver = fn(&str) -> Result<Answer>;

/// Adapts a `fn(&str) -> Result<T>` with `T: Into<Answer>` into a [`Solver`].
macro_rules! solver {
    ($f:path) => {
        |input: &str| $f(input).map(Answer::from)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];

    pub fn index(self) -> usize {
        match self {
            Part::One => 0,
            Part::Two => 1,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A registry entry for one day of the calendar.
///
/// The `_test` solvers override the regular ones when running against test input; some puzzles
/// use a different parameter for their examples than for the real data.
#[derive(Clone, Copy)]
pub struct Day {
    pub number: u8,
    pub p1: Option<Solver>,
    pub p2: Option<Solver>,
    pub p1_test: Option<Solver>,
    pub p2_test: Option<Solver>,
    pub input_p1: Option<&'static str>,
    pub input_p2: Option<&'static str>,
}

impl Day {
    pub const fn unsolved(number: u8) -> Self {
        Self {
            number,
            p1: None,
            p2: None,
            p1_test: None,
            p2_test: None,
            input_p1: None,
            input_p2: None,
        }
    }

    pub const fn new(number: u8, p1: Solver, p2: Solver) -> Self {
        Self {
            p1: Some(p1),
            p2: Some(p2),
            ..Self::unsolved(number)
        }
    }

    pub const fn with_test_solver(self, part: Part, solver: Solver) -> Self {
        match part {
            Part::One => Self {
                p1_test: Some(solver),
                ..self
            },
            Part::Two => Self {
                p2_test: Some(solver),
                ..self
            },
        }
    }

    pub const fn with_input(self, part: Part, name: &'static str) -> Self {
        match part {
            Part::One => Self {
                input_p1: Some(name),
                ..self
            },
            Part::Two => Self {
                input_p2: Some(name),
                ..self
            },
        }
    }

    /// The solver to use for `part`, if the part has been solved at all.
    pub fn runner(&self, part: Part, kind: InputKind) -> Option<Solver> {
        match (part, kind) {
            (Part::One, InputKind::Test) => self.p1_test.or(self.p1),
            (Part::Two, InputKind::Test) => self.p2_test.or(self.p2),
            (Part::One, InputKind::Eval) => self.p1,
            (Part::Two, InputKind::Eval) => self.p2,
        }
    }

    /// Input file name for `part`. Part 1 defaults to `d<number>`, part 2 to part 1's file.
    pub fn input_name(&self, part: Part) -> Cow<'static, str> {
        match part {
            Part::One => self
                .input_p1
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(format!("d{}", self.number))),
            Part::Two => self
                .input_p2
                .map(Cow::Borrowed)
                .unwrap_or_else(|| self.input_name(Part::One)),
        }
    }
}

pub static ALL_DAYS: [Day; 12] = [
    Day::new(1, solver!(day01::part1), solver!(day01::part2)),
    Day::new(2, solver!(day02::part1), solver!(day02::part2)),
    Day::new(3, solver!(day03::part1), solver!(day03::part2)),
    Day::new(4, solver!(day04::part1), solver!(day04::part2)),
    Day::new(5, solver!(day05::part1), solver!(day05::part2)),
    Day::new(6, solver!(day06::part1), solver!(day06::part2)),
    Day::new(7, solver!(day07::part1), solver!(day07::part2)),
    Day::new(8, solver!(day08::part1), solver!(day08::part2))
        .with_test_solver(Part::One, solver!(day08::part1_test)),
    Day::new(9, solver!(day09::part1), solver!(day09::part2)),
    Day::unsolved(10),
    Day::unsolved(11),
    Day::unsolved(12),
];

/// The registered days whose numbers appear in `numbers`, or every day when it is empty.
pub fn select_days(numbers: &[u8]) -> impl Iterator<Item = &'static Day> + '_ {
    ALL_DAYS
        .iter()
        .filter(move |day| numbers.is_empty() || numbers.contains(&day.number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(_: &str) -> Result<Answer> {
        Ok(Answer::Number(1))
    }

    fn second(_: &str) -> Result<Answer> {
        Ok(Answer::Number(2))
    }

    fn example(_: &str) -> Result<Answer> {
        Ok(Answer::from("example"))
    }

    #[test]
    fn test_runner_prefers_test_override() -> Result<()> {
        let day = Day::new(8, first, second).with_test_solver(Part::One, example);

        let test_runner = day.runner(Part::One, InputKind::Test).unwrap();
        assert_eq!(test_runner("")?, Answer::from("example"));
        let eval_runner = day.runner(Part::One, InputKind::Eval).unwrap();
        assert_eq!(eval_runner("")?, Answer::Number(1));
        // No override for part 2, so both kinds share the regular solver.
        let test_runner = day.runner(Part::Two, InputKind::Test).unwrap();
        assert_eq!(test_runner("")?, Answer::Number(2));
        Ok(())
    }

    #[test]
    fn test_unsolved_day_has_no_runner() {
        let day = Day::unsolved(12);
        for part in Part::BOTH {
            assert!(day.runner(part, InputKind::Test).is_none());
            assert!(day.runner(part, InputKind::Eval).is_none());
        }
    }

    #[test]
    fn test_input_names() {
        let day = Day::new(3, first, second);
        assert_eq!(day.input_name(Part::One), "d3");
        assert_eq!(day.input_name(Part::Two), "d3");

        let day = day.with_input(Part::One, "d3a");
        assert_eq!(day.input_name(Part::Two), "d3a");

        let day = day.with_input(Part::Two, "d3b");
        assert_eq!(day.input_name(Part::One), "d3a");
        assert_eq!(day.input_name(Part::Two), "d3b");
    }

    #[test]
    fn test_registry_is_in_calendar_order() {
        let numbers: Vec<u8> = ALL_DAYS.iter().map(|d| d.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert!(ALL_DAYS[..9].iter().all(|d| d.p1.is_some() && d.p2.is_some()));
    }

    #[test]
    fn test_select_days() {
        let all: Vec<u8> = select_days(&[]).map(|d| d.number).collect();
        assert_eq!(all.len(), 12);

        // Calendar order regardless of the order asked for; unknown numbers are ignored.
        let picked: Vec<u8> = select_days(&[7, 2, 7]).map(|d| d.number).collect();
        assert_eq!(picked, vec![2, 7]);
        assert_eq!(select_days(&[13]).count(), 0);
    }
}
