use anyhow::{ensure, Result};

use crate::parse_digits;

/// One line of batteries, each an ASCII digit joltage rating.
#[derive(Debug, Clone, Copy)]
pub struct BatteryBank<'a> {
    batteries: &'a [u8],
}

impl<'a> BatteryBank<'a> {
    pub fn new(line: &'a str) -> Result<Self> {
        let batteries = line.as_bytes();
        ensure!(
            batteries.iter().all(u8::is_ascii_digit),
            "battery bank {line:?} contains non-digits"
        );
        Ok(Self { batteries })
    }

    /// Index and value of the first maximum in `batteries[from..to]`.
    fn max_of_section(&self, from: usize, to: usize) -> (usize, u8) {
        // max_by_key keeps the last of equal maxima, so scan from the right.
        self.batteries[from..to]
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &b)| b)
            .map_or((from, b'0'), |(i, &b)| (from + i, b))
    }

    /// Largest joltage obtainable by switching on exactly `using` batteries, keeping their order.
    pub fn joltage(&self, using: usize) -> Result<u64> {
        let len = self.batteries.len();
        ensure!(
            (1..=len).contains(&using),
            "cannot switch on {using} of {len} batteries"
        );

        let mut picked = Vec::with_capacity(using);
        let mut start = 0;
        // Each pick must leave enough batteries to its right for the remaining picks.
        for end in len - using + 1..=len {
            let (index, max) = self.max_of_section(start, end);
            picked.push(max);
            start = index + 1;
        }
        Ok(parse_digits(&picked))
    }
}

fn total_joltage(input: &str, using: usize) -> Result<u64> {
    input
        .lines()
        .map(|line| BatteryBank::new(line)?.joltage(using))
        .sum()
}

pub fn part1(input: &str) -> Result<u64> {
    total_joltage(input, 2)
}

pub fn part2(input: &str) -> Result<u64> {
    total_joltage(input, 12)
}
