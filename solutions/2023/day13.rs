//! Point of Incidence

use anyhow::{Result, bail};

crate::soln!(part1, part2);

struct Pattern<'a> {
    rows: Vec<&'a [u8]>,
}

impl Pattern<'_> {
    fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// First row split whose mirrored rows differ in exactly `smudges` cells.
    fn row_mirror(&self, smudges: usize) -> Option<usize> {
        (1..self.rows.len()).find(|&split| {
            let above = self.rows[..split].iter().rev();
            let below = self.rows[split..].iter();
            let diff: usize = above
                .zip(below)
                .map(|(a, b)| a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
                .sum();
            diff == smudges
        })
    }

    fn col_mirror(&self, smudges: usize) -> Option<usize> {
        (1..self.width()).find(|&split| {
            let diff: usize = self
                .rows
                .iter()
                .map(|row| {
                    row[..split]
                        .iter()
                        .rev()
                        .zip(&row[split..])
                        .filter(|(x, y)| x != y)
                        .count()
                })
                .sum();
            diff == smudges
        })
    }

    fn summary(&self, smudges: usize) -> Result<usize> {
        if let Some(cols) = self.col_mirror(smudges) {
            return Ok(cols);
        }
        match self.row_mirror(smudges) {
            Some(rows) => Ok(100 * rows),
            None => bail!("pattern has no line of reflection"),
        }
    }
}

fn parse(input: &str) -> Vec<Pattern<'_>> {
    input
        .split("\n\n")
        .map(|block| Pattern {
            rows: block.lines().map(str::as_bytes).collect(),
        })
        .collect()
}

fn total(input: &str, smudges: usize) -> Result<usize> {
    parse(input).iter().map(|p| p.summary(smudges)).sum()
}

fn part1(input: &str) -> Result<usize> {
    total(input, 0)
}

fn part2(input: &str) -> Result<usize> {
    total(input, 1)
}
