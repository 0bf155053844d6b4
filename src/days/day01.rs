use anyhow::{bail, Context, Result};
use num::Integer;

const POSITIONS: i64 = 100;
const START: i64 = 50;

/// A safe dial numbered `0..positions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    positions: i64,
    position: i64,
}

impl Dial {
    pub fn new(positions: i64, initial: i64) -> Self {
        Self {
            positions,
            position: Integer::mod_floor(&initial, &positions),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Turns the dial by `by` clicks (negative is left) and returns how many times it pointed at
    /// zero along the way, including where it stops.
    pub fn turn(&mut self, by: i64) -> u64 {
        let passes = if by >= 0 {
            Integer::div_floor(&(self.position + by), &self.positions)
        } else {
            // Mirror the dial so a left turn counts like a right one.
            let mirrored = Integer::mod_floor(&(self.positions - self.position), &self.positions);
            Integer::div_floor(&(mirrored - by), &self.positions)
        };
        self.position = Integer::mod_floor(&(self.position + by), &self.positions);
        passes as u64
    }

    pub fn apply(&mut self, instruction: &str) -> Result<u64> {
        Ok(self.turn(parse_instruction(instruction)?))
    }
}

fn parse_instruction(instruction: &str) -> Result<i64> {
    let clicks = |rest: &str| -> Result<i64> {
        rest.parse()
            .with_context(|| format!("invalid click count in {instruction:?}"))
    };
    if let Some(rest) = instruction.strip_prefix('L') {
        Ok(-clicks(rest)?)
    } else if let Some(rest) = instruction.strip_prefix('R') {
        clicks(rest)
    } else {
        bail!("invalid dial instruction {instruction:?}")
    }
}

pub fn part1(input: &str) -> Result<u64> {
    let mut dial = Dial::new(POSITIONS, START);
    let mut zeros = 0;
    for line in input.lines() {
        dial.apply(line)?;
        if dial.position() == 0 {
            zeros += 1;
        }
    }
    Ok(zeros)
}

pub fn part2(input: &str) -> Result<u64> {
    let mut dial = Dial::new(POSITIONS, START);
    input.lines().map(|line| dial.apply(line)).sum()
}
