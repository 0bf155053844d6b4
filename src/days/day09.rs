use std::str::FromStr;

use anyhow::{Context, Result};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    x: i64,
    y: i64,
}

impl Tile {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Tiles covered by the rectangle with opposite corners `a` and `b`.
fn area(a: Tile, b: Tile) -> u64 {
    (a.x.abs_diff(b.x) + 1) * (a.y.abs_diff(b.y) + 1)
}

/// The red tiles, in order; consecutive tiles (wrapping around) are joined by straight runs of
/// green tiles, enclosing a green region.
#[derive(Debug, Clone)]
pub struct Floor {
    red: Vec<Tile>,
}

impl FromStr for Floor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let red = s
            .lines()
            .map(|line| {
                let (x, y) = line
                    .split_once(',')
                    .with_context(|| format!("expected x,y in {line:?}"))?;
                Ok(Tile::new(x.parse::<i64>()?, y.parse::<i64>()?))
            })
            .collect::<Result<_>>()?;
        Ok(Self { red })
    }
}

impl Floor {
    fn pairs(&self) -> impl ParallelIterator<Item = (Tile, Tile)> + '_ {
        (0..self.red.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                (i + 1..self.red.len()).map(move |j| (self.red[i], self.red[j]))
            })
    }

    fn edges(&self) -> impl Iterator<Item = (Tile, Tile)> + '_ {
        self.red
            .iter()
            .copied()
            .zip(self.red.iter().copied().cycle().skip(1))
    }

    /// Whether the point `(x / 2, y / 2)` lies inside the loop or on it. Coordinates come in
    /// doubled so rectangle centres stay integral.
    fn contains_doubled(&self, x: i64, y: i64) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            let (ax, ay, bx, by) = (2 * a.x, 2 * a.y, 2 * b.x, 2 * b.y);
            let on_edge = (ax.min(bx)..=ax.max(bx)).contains(&x)
                && (ay.min(by)..=ay.max(by)).contains(&y);
            if on_edge {
                return true;
            }
            // Cast a ray towards +x; only vertical edges can cross it.
            if ax == bx && ax > x && (ay > y) != (by > y) {
                inside = !inside;
            }
        }
        inside
    }

    /// A rectangle fits when no edge of the loop cuts through its interior and its centre is
    /// inside the loop.
    fn fits(&self, a: Tile, b: Tile) -> bool {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        let cuts_interior = self.edges().any(|(p, q)| {
            p.x.max(q.x) > min_x
                && p.x.min(q.x) < max_x
                && p.y.max(q.y) > min_y
                && p.y.min(q.y) < max_y
        });
        !cuts_interior && self.contains_doubled(min_x + max_x, min_y + max_y)
    }

    pub fn largest_rectangle(&self) -> Option<u64> {
        self.pairs().map(|(a, b)| area(a, b)).max()
    }

    /// Largest rectangle with red corners made only of red or green tiles.
    pub fn largest_inner_rectangle(&self) -> Option<u64> {
        self.pairs()
            .filter(|&(a, b)| self.fits(a, b))
            .map(|(a, b)| area(a, b))
            .max()
    }
}

pub fn part1(input: &str) -> Result<u64> {
    input
        .parse::<Floor>()?
        .largest_rectangle()
        .context("need at least two red tiles")
}

pub fn part2(input: &str) -> Result<u64> {
    input
        .parse::<Floor>()?
        .largest_inner_rectangle()
        .context("no rectangle fits inside the loop")
}
