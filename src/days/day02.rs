use anyhow::Result;
use regex::Regex;
use rustc_hash::FxHashSet;

type IdRange = (u64, u64);

fn parse_ranges(input: &str) -> Result<Vec<IdRange>> {
    let re = Regex::new(r"([0-9]+)-([0-9]+)")?;
    re.captures_iter(input)
        .map(|caps| Ok((caps[1].parse::<u64>()?, caps[2].parse::<u64>()?)))
        .collect()
}

fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// The digits of `value` written out `count` times, or `None` if that overflows.
fn repeat_digits(value: u64, count: u32) -> Option<u64> {
    let shift = 10u64.checked_pow(digit_count(value))?;
    (1..count).try_fold(value, |acc, _| acc.checked_mul(shift)?.checked_add(value))
}

/// Leading half of the digits of `value`, rounded down; `0` for single digits.
fn leading_half(value: u64) -> u64 {
    let digits = digit_count(value);
    value / 10u64.pow(digits - digits / 2)
}

/// IDs within `min..=max` made of one digit block repeated exactly twice, ascending.
pub fn doubled_ids(min: u64, max: u64) -> impl Iterator<Item = u64> {
    (leading_half(min)..)
        .map_while(|half| repeat_digits(half, 2))
        .filter(move |&id| id > 0 && id >= min)
        .take_while(move |&id| id <= max)
}

/// Distinct IDs inside any of `ranges` made of one digit block repeated two or more times.
pub fn repeated_ids(ranges: &[IdRange]) -> FxHashSet<u64> {
    let Some(ceiling) = ranges.iter().map(|&(_, max)| max).max() else {
        return FxHashSet::default();
    };
    let below_ceiling = move |id: &u64| *id <= ceiling;

    (1..)
        .take_while(|&block| repeat_digits(block, 2).is_some_and(|id| below_ceiling(&id)))
        .flat_map(|block| {
            (2..).map_while(move |count| repeat_digits(block, count).filter(below_ceiling))
        })
        .filter(|id| ranges.iter().any(|&(min, max)| (min..=max).contains(id)))
        .collect()
}

pub fn part1(input: &str) -> Result<u64> {
    Ok(parse_ranges(input)?
        .into_iter()
        .flat_map(|(min, max)| doubled_ids(min, max))
        .sum())
}

pub fn part2(input: &str) -> Result<u64> {
    Ok(repeated_ids(&parse_ranges(input)?).into_iter().sum())
}
