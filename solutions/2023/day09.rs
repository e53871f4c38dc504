//! Mirage Maintenance

use anyhow::Result;

crate::soln!(part1, part2);

fn parse(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .map(|line| {
            Ok(line
                .split_whitespace()
                .map(str::parse::<i64>)
                .collect::<Result<Vec<_>, _>>()?)
        })
        .collect()
}

/// (previous, next) value of a history, found by differencing until
/// everything is zero.
fn extrapolate(history: &[i64]) -> (i64, i64) {
    if history.iter().all(|&v| v == 0) {
        return (0, 0);
    }
    let diffs: Vec<i64> = history.windows(2).map(|w| w[1] - w[0]).collect();
    let (prev, next) = extrapolate(&diffs);
    (history[0] - prev, history[history.len() - 1] + next)
}

fn part1(input: &str) -> Result<i64> {
    Ok(parse(input)?.iter().map(|h| extrapolate(h).1).sum())
}

fn part2(input: &str) -> Result<i64> {
    Ok(parse(input)?.iter().map(|h| extrapolate(h).0).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45";

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 114);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 2);
    }

    #[test]
    fn negative_values() {
        assert_eq!(extrapolate(&[-1, -3, -5]), (1, -7));
        assert_eq!(extrapolate(&[4]), (4, 4));
    }
}
