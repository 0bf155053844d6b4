use anyhow::{Context, Result};
use memchr::memchr;
use rustc_hash::FxHashMap;

/// A manifold diagram: one `S` beam source and `^` splitters below it.
#[derive(Debug, Clone)]
pub struct Manifold<'a> {
    rows: Vec<&'a [u8]>,
    source: (usize, usize),
}

/// What came out of the bottom of the manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Propagation {
    /// Splitters hit, counting coincident beams once
    pub splits: u64,
    /// Beams leaving the last row, counting every path separately
    pub timelines: u64,
}

impl<'a> Manifold<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let rows: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
        let source = rows
            .iter()
            .enumerate()
            .find_map(|(row, line)| memchr(b'S', line).map(|col| (row, col)))
            .context("manifold has no beam source")?;
        Ok(Self { rows, source })
    }

    fn is_splitter(row: &[u8], col: isize) -> bool {
        usize::try_from(col).is_ok_and(|col| row.get(col) == Some(&b'^'))
    }

    /// Sends the beam down row by row. Beams landing on a splitter continue in the columns either
    /// side of it; beams that share a column add up.
    pub fn propagate(&self) -> Propagation {
        let (source_row, source_col) = self.source;
        let mut beams: FxHashMap<isize, u64> = FxHashMap::default();
        beams.insert(source_col as isize, 1);
        let mut splits = 0;

        for row in &self.rows[source_row + 1..] {
            if memchr(b'^', row).is_none() {
                continue;
            }
            let mut next: FxHashMap<isize, u64> = FxHashMap::default();
            for (col, count) in beams {
                if Self::is_splitter(row, col) {
                    splits += 1;
                    *next.entry(col - 1).or_default() += count;
                    *next.entry(col + 1).or_default() += count;
                } else {
                    *next.entry(col).or_default() += count;
                }
            }
            beams = next;
        }

        Propagation {
            splits,
            timelines: beams.values().sum(),
        }
    }
}

pub fn part1(input: &str) -> Result<u64> {
    Ok(Manifold::new(input)?.propagate().splits)
}

pub fn part2(input: &str) -> Result<u64> {
    Ok(Manifold::new(input)?.propagate().timelines)
}
