use anyhow::{bail, ensure, Context, Result};

use crate::parse_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl TryFrom<u8> for Operation {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            b'+' => Ok(Operation::Add),
            b'*' => Ok(Operation::Multiply),
            _ => bail!("invalid operation {:?}", value as char),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Problem {
    values: Vec<u64>,
    operation: Operation,
}

impl Problem {
    fn solve(&self) -> u64 {
        match self.operation {
            Operation::Add => self.values.iter().sum(),
            Operation::Multiply => self.values.iter().product(),
        }
    }
}

/// A worksheet of problems laid out side by side, operators on the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    problems: Vec<Problem>,
}

fn split_operator_line(input: &str) -> Result<(Vec<&str>, &str)> {
    let mut lines: Vec<&str> = input.lines().collect();
    let operators = lines.pop().context("empty homework")?;
    ensure!(!lines.is_empty(), "homework has no numbers");
    Ok((lines, operators))
}

impl Homework {
    /// Reads the sheet the way humans do: whitespace-separated numbers in each row.
    pub fn read_rows(input: &str) -> Result<Self> {
        let (lines, operators) = split_operator_line(input)?;
        let rows = lines
            .iter()
            .map(|line| {
                line.split_whitespace()
                    .map(|v| Ok(v.parse::<u64>()?))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let problems = operators
            .split_whitespace()
            .enumerate()
            .map(|(col, op)| {
                let values = rows
                    .iter()
                    .map(|row| row.get(col).copied())
                    .collect::<Option<Vec<_>>>()
                    .with_context(|| format!("problem {col} is missing a number"))?;
                Ok(Problem {
                    values,
                    operation: Operation::try_from(op.as_bytes()[0])?,
                })
            })
            .collect::<Result<_>>()?;
        Ok(Self { problems })
    }

    /// Reads the sheet the cephalopod way: every character column is one number written top to
    /// bottom, and problems are separated by fully blank columns.
    pub fn read_columns(input: &str) -> Result<Self> {
        let (lines, operators) = split_operator_line(input)?;
        let width = lines
            .iter()
            .chain([&operators])
            .map(|line| line.len())
            .max()
            .unwrap_or_default();
        let cell = |line: &str, col: usize| line.as_bytes().get(col).copied().unwrap_or(b' ');

        let mut problems = Vec::new();
        let mut values = Vec::new();
        let mut operation = None;
        let mut digits = Vec::with_capacity(lines.len());
        // One past the last column acts as a final separator.
        for col in 0..=width {
            digits.clear();
            digits.extend(
                lines
                    .iter()
                    .map(|&line| cell(line, col))
                    .filter(u8::is_ascii_digit),
            );
            if !digits.is_empty() {
                values.push(parse_digits(&digits));
            }
            let op = cell(operators, col);
            if op != b' ' {
                operation = Some(Operation::try_from(op)?);
            }

            let blank = digits.is_empty() && op == b' ';
            if blank && !values.is_empty() {
                let operation = operation
                    .take()
                    .with_context(|| format!("problem ending at column {col} has no operator"))?;
                problems.push(Problem {
                    values: std::mem::take(&mut values),
                    operation,
                });
            }
        }
        Ok(Self { problems })
    }

    pub fn grand_total(&self) -> u64 {
        self.problems.iter().map(Problem::solve).sum()
    }
}

pub fn part1(input: &str) -> Result<u64> {
    Ok(Homework::read_rows(input)?.grand_total())
}

pub fn part2(input: &str) -> Result<u64> {
    Ok(Homework::read_columns(input)?.grand_total())
}
