use std::str::FromStr;

use anyhow::{Context, Result};
use nalgebra::Vector3;
use petgraph::unionfind::UnionFind;
use rustc_hash::FxHashMap;

type Point = Vector3<i64>;

const EVAL_CONNECTIONS: usize = 1000;
const TEST_CONNECTIONS: usize = 10;

/// Junction boxes hanging in the playground, with every pair ordered by distance.
#[derive(Debug, Clone)]
pub struct Playground {
    boxes: Vec<Point>,
    pairs: Vec<(usize, usize)>,
}

fn squared_distance(a: &Point, b: &Point) -> i64 {
    let d = a - b;
    d.dot(&d)
}

impl FromStr for Playground {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let boxes = s
            .lines()
            .map(|line| {
                let mut coords = line.split(',').map(str::parse::<i64>);
                let mut next = || -> Result<i64> {
                    Ok(coords
                        .next()
                        .with_context(|| format!("expected x,y,z in {line:?}"))??)
                };
                Ok(Point::new(next()?, next()?, next()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut by_distance: Vec<(i64, usize, usize)> = (0..boxes.len())
            .flat_map(|i| (i + 1..boxes.len()).map(move |j| (i, j)))
            .map(|(i, j)| (squared_distance(&boxes[i], &boxes[j]), i, j))
            .collect();
        by_distance.sort_unstable();
        let pairs = by_distance.into_iter().map(|(_, i, j)| (i, j)).collect();

        Ok(Self { boxes, pairs })
    }
}

impl Playground {
    /// Circuit sizes, largest first, after wiring up the `connections` closest pairs.
    pub fn circuit_sizes(&self, connections: usize) -> Vec<usize> {
        let mut circuits = UnionFind::new(self.boxes.len());
        for &(i, j) in self.pairs.iter().take(connections) {
            circuits.union(i, j);
        }

        let mut sizes: FxHashMap<usize, usize> = FxHashMap::default();
        for root in circuits.into_labeling() {
            *sizes.entry(root).or_default() += 1;
        }
        let mut sizes: Vec<usize> = sizes.into_values().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// The pair whose connection first joins every box into a single circuit.
    pub fn closing_pair(&self) -> Option<(&Point, &Point)> {
        let mut circuits = UnionFind::new(self.boxes.len());
        let mut remaining = self.boxes.len();
        self.pairs.iter().find_map(|&(i, j)| {
            if circuits.union(i, j) {
                remaining -= 1;
            }
            (remaining == 1).then(|| (&self.boxes[i], &self.boxes[j]))
        })
    }
}

fn largest_circuits_product(input: &str, connections: usize) -> Result<usize> {
    let playground: Playground = input.parse()?;
    Ok(playground
        .circuit_sizes(connections)
        .into_iter()
        .take(3)
        .product())
}

pub fn part1(input: &str) -> Result<usize> {
    largest_circuits_product(input, EVAL_CONNECTIONS)
}

/// The worked example only wires up ten pairs.
pub fn part1_test(input: &str) -> Result<usize> {
    largest_circuits_product(input, TEST_CONNECTIONS)
}

pub fn part2(input: &str) -> Result<u64> {
    let playground: Playground = input.parse()?;
    let (a, b) = playground
        .closing_pair()
        .context("junction boxes never form a single circuit")?;
    Ok((a.x * b.x).try_into()?)
}
