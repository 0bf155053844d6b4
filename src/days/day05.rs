use std::{ops::RangeInclusive, str::FromStr};

use anyhow::{Context, Result};

/// The kitchen's inventory database: fresh ID ranges followed by available IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl FromStr for Inventory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines();
        let fresh = lines
            .by_ref()
            .take_while(|line| !line.is_empty())
            .map(|line| {
                let (min, max) = line
                    .split_once('-')
                    .with_context(|| format!("invalid range {line:?}"))?;
                Ok(min.parse::<u64>()?..=max.parse::<u64>()?)
            })
            .collect::<Result<_>>()?;
        let available = lines
            .map(|line| line.parse::<u64>().with_context(|| format!("invalid ID {line:?}")))
            .collect::<Result<_>>()?;
        Ok(Self { fresh, available })
    }
}

/// Merges overlapping ranges into an equivalent set of disjoint ranges, sorted by start.
pub fn consolidate(ranges: &[RangeInclusive<u64>]) -> Vec<RangeInclusive<u64>> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl Inventory {
    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh.iter().any(|range| range.contains(&id))
    }

    pub fn available_fresh_count(&self) -> usize {
        self.available
            .iter()
            .filter(|&&id| self.is_fresh(id))
            .count()
    }

    /// Number of distinct IDs any fresh range covers.
    pub fn fresh_id_count(&self) -> u64 {
        consolidate(&self.fresh)
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .sum()
    }
}

pub fn part1(input: &str) -> Result<usize> {
    Ok(input.parse::<Inventory>()?.available_fresh_count())
}

pub fn part2(input: &str) -> Result<u64> {
    Ok(input.parse::<Inventory>()?.fresh_id_count())
}
