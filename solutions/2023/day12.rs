//! Hot Springs

use std::collections::HashMap;

use anyhow::{Context, Result};
use itertools::Itertools;

crate::soln!(part1, part2);

struct Record {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

fn parse(input: &str) -> Result<Vec<Record>> {
    input
        .lines()
        .map(|line| {
            let (springs, groups) = line
                .split_once(' ')
                .with_context(|| format!("malformed record `{line}`"))?;
            let groups = groups
                .split(',')
                .map(str::parse::<usize>)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Record {
                springs: springs.as_bytes().to_vec(),
                groups,
            })
        })
        .collect()
}

impl Record {
    fn unfold(&self, copies: usize) -> Record {
        let springs = std::iter::repeat_n(self.springs.as_slice(), copies)
            .collect_vec()
            .join(&b'?');
        Record {
            springs,
            groups: self.groups.repeat(copies),
        }
    }

    /// Ways to fill in the unknown springs so the damaged runs match `groups`.
    fn arrangements(&self) -> u64 {
        let mut field = self.springs.clone();
        // a trailing operational spring closes any run still open at the end
        field.push(b'.');
        Counter {
            field: &field,
            groups: &self.groups,
            memo: HashMap::new(),
        }
        .count(0, 0, 0)
    }
}

struct Counter<'a> {
    field: &'a [u8],
    groups: &'a [usize],
    memo: HashMap<(usize, usize, usize), u64>,
}

impl Counter<'_> {
    /// `group` runs are complete and the current run has `run` damaged springs.
    fn count(&mut self, pos: usize, group: usize, run: usize) -> u64 {
        let Some(&spring) = self.field.get(pos) else {
            return u64::from(group == self.groups.len() && run == 0);
        };
        if let Some(&n) = self.memo.get(&(pos, group, run)) {
            return n;
        }

        let mut total = 0;
        if matches!(spring, b'#' | b'?') && group < self.groups.len() && run < self.groups[group] {
            total += self.count(pos + 1, group, run + 1);
        }
        if matches!(spring, b'.' | b'?') {
            if run == 0 {
                total += self.count(pos + 1, group, 0);
            } else if run == self.groups[group] {
                total += self.count(pos + 1, group + 1, 0);
            }
        }

        self.memo.insert((pos, group, run), total);
        total
    }
}

fn part1(input: &str) -> Result<u64> {
    Ok(parse(input)?.iter().map(Record::arrangements).sum())
}

fn part2(input: &str) -> Result<u64> {
    Ok(parse(input)?
        .iter()
        .map(|r| r.unfold(5).arrangements())
        .sum())
}
