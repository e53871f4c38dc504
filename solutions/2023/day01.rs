//! Trebuchet?!

use anyhow::{Result, bail};

crate::soln!(part1, part2);

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The digit starting at byte `i`, if any. Spelled-out digits may overlap,
/// so `eightwo` holds both an 8 and a 2.
fn digit_at(line: &[u8], i: usize, spelled: bool) -> Option<u32> {
    let b = line[i];
    if b.is_ascii_digit() {
        return Some(u32::from(b - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| line[i..].starts_with(word.as_bytes()))
        .and_then(|p| u32::try_from(p + 1).ok())
}

fn calibration(line: &str, spelled: bool) -> Result<u32> {
    let bytes = line.as_bytes();
    let first = (0..bytes.len()).find_map(|i| digit_at(bytes, i, spelled));
    let last = (0..bytes.len()).rev().find_map(|i| digit_at(bytes, i, spelled));
    match (first, last) {
        (Some(first), Some(last)) => Ok(first * 10 + last),
        _ => bail!("no digit in `{line}`"),
    }
}

fn total(input: &str, spelled: bool) -> Result<u32> {
    input.lines().map(|line| calibration(line, spelled)).sum()
}

fn part1(input: &str) -> Result<u32> {
    total(input, false)
}

fn part2(input: &str) -> Result<u32> {
    total(input, true)
}
