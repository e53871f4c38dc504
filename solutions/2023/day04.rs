//! Scratchcards

use std::collections::HashSet;

use anyhow::{Context, Result};

crate::soln!(part1, part2);

fn numbers(list: &str) -> Result<Vec<u32>> {
    list.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number `{n}`")))
        .collect()
}

/// How many of each card's numbers are winning numbers.
fn matches(input: &str) -> Result<Vec<usize>> {
    input
        .lines()
        .map(|line| {
            let (_, card) = line
                .split_once(':')
                .with_context(|| format!("no card id in `{line}`"))?;
            let (winning, have) = card
                .split_once('|')
                .with_context(|| format!("no `|` in `{line}`"))?;
            let winning: HashSet<u32> = numbers(winning)?.into_iter().collect();
            Ok(numbers(have)?.iter().filter(|n| winning.contains(n)).count())
        })
        .collect()
}

/// A card is worth one point for its first match, doubled for each after.
fn points(matches: usize) -> Result<u64> {
    if matches == 0 {
        return Ok(0);
    }
    u32::try_from(matches - 1)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .with_context(|| format!("{matches} matches overflow the card's points"))
}

fn part1(input: &str) -> Result<u64> {
    matches(input)?.into_iter().map(points).sum()
}

fn part2(input: &str) -> Result<u64> {
    let matches = matches(input)?;
    let mut copies = vec![1u64; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        // wins never reach past the last card
        let last = (i + m).min(matches.len() - 1);
        for j in i + 1..=last {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 13);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 30);
    }

    #[test]
    fn points_double_per_match() {
        assert_eq!(points(0).unwrap(), 0);
        assert_eq!(points(1).unwrap(), 1);
        assert_eq!(points(4).unwrap(), 8);
        assert_eq!(points(64).unwrap(), 1 << 63);
    }

    #[test]
    fn too_many_matches_is_an_error() {
        assert!(points(65).is_err());
        let have = (1..=65).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let card = format!("Card 1: {have} | {have}");
        assert!(part1(&card).is_err());
    }
}
