//! Calorie Counting

use anyhow::{Context, Result};

crate::soln!(part1, part2);

/// Calories carried by each elf; elves are separated by blank lines.
fn parse(input: &str) -> Result<Vec<u64>> {
    input
        .split("\n\n")
        .map(|elf| {
            elf.lines()
                .map(|l| l.parse::<u64>().with_context(|| format!("bad calorie count `{l}`")))
                .sum()
        })
        .collect()
}

fn part1(input: &str) -> Result<u64> {
    parse(input)?.into_iter().max().context("no elves")
}

fn part2(input: &str) -> Result<u64> {
    let mut calories = parse(input)?;
    calories.sort_unstable_by(|a, b| b.cmp(a));
    Ok(calories.iter().take(3).sum())
}
