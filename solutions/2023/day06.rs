//! Wait For It

use anyhow::{Context, Result, ensure};
use regex::Regex;

crate::soln!(part1, part2);

/// Hold times that beat `record` for a race lasting `time` ms.
///
/// Distance is `hold * (time - hold)`, a parabola symmetric about `time / 2`,
/// so the winners form one contiguous run around the middle.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |hold: u64| hold * (time - hold) > record;
    let (mut lo, mut hi) = (0, time / 2);
    if !beats(hi) {
        return 0;
    }
    while lo < hi {
        let mid = (lo + hi) / 2;
        if beats(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time + 1 - 2 * lo
}

fn lines(input: &str) -> Result<(&str, &str)> {
    let mut lines = input.lines();
    let times = lines.next().context("missing `Time:` line")?;
    let records = lines.next().context("missing `Distance:` line")?;
    Ok((times, records))
}

fn part1(input: &str) -> Result<u64> {
    let re = Regex::new(r"\d+")?;
    let numbers = |line: &str| -> Result<Vec<u64>> {
        re.find_iter(line)
            .map(|m| Ok(m.as_str().parse::<u64>()?))
            .collect()
    };
    let (times, records) = lines(input)?;
    let (times, records) = (numbers(times)?, numbers(records)?);
    ensure!(times.len() == records.len(), "every race needs a record");

    Ok(times
        .iter()
        .zip(&records)
        .map(|(&t, &r)| ways_to_win(t, r))
        .product())
}

/// The spaces were bad kerning: each line is one long number.
fn part2(input: &str) -> Result<u64> {
    let joined = |line: &str| -> Result<u64> {
        let digits: String = line.chars().filter(char::is_ascii_digit).collect();
        digits
            .parse()
            .with_context(|| format!("no number in `{line}`"))
    };
    let (time, record) = lines(input)?;
    Ok(ways_to_win(joined(time)?, joined(record)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200";

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 288);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 71503);
    }

    #[test]
    fn single_races() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
        // the record can't be beaten at all
        assert_eq!(ways_to_win(4, 4), 0);
    }
}
