//! If You Give A Seed A Fertilizer

use std::ops::Range;

use anyhow::{Context, Result, ensure};
use rayon::prelude::*;

crate::soln!(part1, part2);

/// One line of a map: `len` values starting at `src` move to `dst`.
#[derive(Debug, Clone, Copy)]
struct Mapping {
    dst: i64,
    src: i64,
    len: i64,
}

impl Mapping {
    fn source(&self) -> Range<i64> {
        self.src..self.src + self.len
    }

    fn shift(&self) -> i64 {
        self.dst - self.src
    }
}

/// Seeds plus the seed-to-soil, soil-to-fertilizer, ... maps, in order.
struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<Vec<Mapping>>,
}

fn parse(input: &str) -> Result<Almanac> {
    let mut blocks = input.split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|b| b.strip_prefix("seeds:"))
        .context("missing `seeds:` line")?
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()?;

    let stages = blocks
        .map(|block| {
            block
                .lines()
                .skip(1)
                .map(|line| {
                    let nums: Vec<i64> = line
                        .split_whitespace()
                        .map(str::parse::<i64>)
                        .collect::<Result<_, _>>()?;
                    let &[dst, src, len] = nums.as_slice() else {
                        anyhow::bail!("expected three numbers in `{line}`");
                    };
                    Ok(Mapping { dst, src, len })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;

    Ok(Almanac { seeds, stages })
}

impl Almanac {
    fn location(&self, seed: i64) -> i64 {
        self.stages.iter().fold(seed, |value, stage| {
            stage
                .iter()
                .find(|m| m.source().contains(&value))
                .map_or(value, |m| value + m.shift())
        })
    }

    /// Pushes whole ranges through each stage, splitting them wherever a
    /// mapping boundary cuts through.
    fn locations(&self, seeds: Range<i64>) -> Vec<Range<i64>> {
        let mut ranges = vec![seeds];
        for stage in &self.stages {
            let mut mapped = Vec::new();
            for m in stage {
                let src = m.source();
                let mut unmapped = Vec::new();
                for r in ranges {
                    let lo = r.start.max(src.start);
                    let hi = r.end.min(src.end);
                    if lo >= hi {
                        unmapped.push(r);
                        continue;
                    }
                    mapped.push(lo + m.shift()..hi + m.shift());
                    if r.start < lo {
                        unmapped.push(r.start..lo);
                    }
                    if hi < r.end {
                        unmapped.push(hi..r.end);
                    }
                }
                ranges = unmapped;
            }
            mapped.extend(ranges);
            ranges = mapped;
        }
        ranges
    }
}

fn part1(input: &str) -> Result<i64> {
    let almanac = parse(input)?;
    almanac
        .seeds
        .iter()
        .map(|&s| almanac.location(s))
        .min()
        .context("no seeds")
}

fn part2(input: &str) -> Result<i64> {
    let almanac = parse(input)?;
    ensure!(almanac.seeds.len() % 2 == 0, "seed ranges must come in pairs");

    // each range is independent: fan out, then keep the lowest
    almanac
        .seeds
        .par_chunks(2)
        .filter_map(|pair| {
            almanac
                .locations(pair[0]..pair[0] + pair[1])
                .into_iter()
                .filter(|r| !r.is_empty())
                .map(|r| r.start)
                .min()
        })
        .min()
        .context("no seeds")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 35);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 46);
    }

    #[test]
    fn range_mapping_matches_pointwise() {
        let almanac = parse(EXAMPLE).unwrap();
        let mut by_range: Vec<i64> = almanac
            .locations(79..93)
            .into_iter()
            .flatten()
            .collect();
        let mut by_seed: Vec<i64> = (79..93).map(|s| almanac.location(s)).collect();
        by_range.sort_unstable();
        by_seed.sort_unstable();
        assert_eq!(by_range, by_seed);
    }

    #[test]
    fn odd_seed_count_is_rejected() {
        assert!(part2("seeds: 1 2 3\n\nseed-to-soil map:\n1 1 1").is_err());
    }
}
