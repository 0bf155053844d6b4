use anyhow::Result;
use rustc_hash::FxHashSet;

type Position = (isize, isize);

const NEIGHBOURS: [Position; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rolls of paper on the warehouse floor, as `(row, col)` positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    rolls: FxHashSet<Position>,
}

impl From<&str> for Warehouse {
    fn from(value: &str) -> Self {
        Self {
            rolls: value
                .lines()
                .enumerate()
                .flat_map(|(row, line)| {
                    line.bytes()
                        .enumerate()
                        .filter(|&(_, b)| b == b'@')
                        .map(move |(col, _)| (row as isize, col as isize))
                })
                .collect(),
        }
    }
}

impl Warehouse {
    fn neighbour_count(&self, (row, col): Position) -> usize {
        NEIGHBOURS
            .iter()
            .filter(|&&(dr, dc)| self.rolls.contains(&(row + dr, col + dc)))
            .count()
    }

    /// Rolls a forklift can reach: those with fewer than four rolls around them.
    pub fn accessible(&self) -> Vec<Position> {
        self.rolls
            .iter()
            .copied()
            .filter(|&pos| self.neighbour_count(pos) < 4)
            .collect()
    }

    /// Removes every currently accessible roll and returns how many went.
    pub fn remove_accessible(&mut self) -> usize {
        let removed = self.accessible();
        for pos in &removed {
            self.rolls.remove(pos);
        }
        removed.len()
    }
}

pub fn part1(input: &str) -> Result<usize> {
    Ok(Warehouse::from(input).accessible().len())
}

pub fn part2(input: &str) -> Result<usize> {
    let mut warehouse = Warehouse::from(input);
    let mut total = 0;
    loop {
        match warehouse.remove_accessible() {
            0 => return Ok(total),
            removed => total += removed,
        }
    }
}
