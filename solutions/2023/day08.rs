//! Haunted Wasteland

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result, bail, ensure};
use rayon::prelude::*;
use regex::Regex;

use crate::math::int::lcm_all;

crate::soln!(part1, part2);

struct Network<'a> {
    directions: &'a [u8],
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

fn parse(input: &str) -> Result<Network<'_>> {
    let (directions, body) = input
        .split_once("\n\n")
        .context("expected directions, a blank line, then nodes")?;
    let directions = directions.trim().as_bytes();
    ensure!(!directions.is_empty(), "no directions");
    ensure!(
        directions.iter().all(|d| matches!(d, b'L' | b'R')),
        "directions must be L or R"
    );

    let re = Regex::new(r"^(\w{3}) = \((\w{3}), (\w{3})\)$")?;
    let nodes = body
        .lines()
        .map(|line| {
            let caps = re
                .captures(line.trim())
                .with_context(|| format!("bad node `{line}`"))?;
            let (_, [name, left, right]) = caps.extract();
            Ok((name, (left, right)))
        })
        .collect::<Result<_>>()?;
    Ok(Network { directions, nodes })
}

impl Network<'_> {
    /// Steps taken from `start` until `done` holds. At least one step is
    /// always taken.
    /// Fails if the walk revisits a node at the same position in the
    /// direction list.
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<u64> {
        let mut seen = HashSet::new();
        let mut node = start;
        for (count, (i, dir)) in (1..).zip(self.directions.iter().enumerate().cycle()) {
            if !seen.insert((node, i)) {
                bail!("walk from `{start}` loops without finishing");
            }
            let &(left, right) = self
                .nodes
                .get(node)
                .with_context(|| format!("no node `{node}`"))?;
            node = if *dir == b'L' { left } else { right };
            if done(node) {
                return Ok(count);
            }
        }
        bail!("walk from `{start}` never finishes")
    }
}

fn part1(input: &str) -> Result<u64> {
    parse(input)?.steps("AAA", |n| n == "ZZZ")
}

/// Every ghost walks its own loop; they line up after the LCM of the
/// individual path lengths.
fn part2(input: &str) -> Result<u64> {
    let network = parse(input)?;
    let starts: Vec<&str> = network
        .nodes
        .keys()
        .copied()
        .filter(|n| n.ends_with('A'))
        .collect();
    ensure!(!starts.is_empty(), "no start nodes");

    let lengths = starts
        .par_iter()
        .map(|start| network.steps(start, |n| n.ends_with('Z')))
        .collect::<Result<Vec<u64>>>()?;
    Ok(lcm_all(&lengths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part1_examples() {
        let branching = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)";
        assert_eq!(part1(branching).unwrap(), 2);

        let repeating = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)";
        assert_eq!(part1(repeating).unwrap(), 6);
    }

    #[test]
    fn part2_example() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)";
        assert_eq!(part2(input).unwrap(), 6);
    }

    #[test]
    fn unreachable_target_is_an_error() {
        let input = "LR\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)";
        let err = part1(input).unwrap_err();
        assert_eq!(err.to_string(), "walk from `AAA` loops without finishing");
    }

    #[test]
    fn dangling_node_is_an_error() {
        assert!(part1("L\n\nAAA = (BBB, BBB)").is_err());
    }
}
