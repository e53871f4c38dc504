//! Gear Ratios

use std::collections::HashMap;

use anyhow::Result;

crate::soln!(part1, part2);

/// A run of digits on one row; `end` is exclusive.
struct PartNumber {
    value: u64,
    row: usize,
    start: usize,
    end: usize,
}

fn numbers(grid: &[&[u8]]) -> Result<Vec<PartNumber>> {
    let mut out = Vec::new();
    for (row, line) in grid.iter().enumerate() {
        let mut col = 0;
        while col < line.len() {
            if !line[col].is_ascii_digit() {
                col += 1;
                continue;
            }
            let start = col;
            while col < line.len() && line[col].is_ascii_digit() {
                col += 1;
            }
            let value = std::str::from_utf8(&line[start..col])?.parse()?;
            out.push(PartNumber {
                value,
                row,
                start,
                end: col,
            });
        }
    }
    Ok(out)
}

/// Symbols touching `n`, diagonals included, with their positions.
fn adjacent_symbols(grid: &[&[u8]], n: &PartNumber) -> Vec<(usize, usize, u8)> {
    let mut out = Vec::new();
    for row in n.row.saturating_sub(1)..=n.row + 1 {
        for col in n.start.saturating_sub(1)..=n.end {
            if let Some(&b) = grid.get(row).and_then(|line| line.get(col)) {
                if b != b'.' && !b.is_ascii_digit() {
                    out.push((row, col, b));
                }
            }
        }
    }
    out
}

fn part1(input: &str) -> Result<u64> {
    let grid: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    Ok(numbers(&grid)?
        .iter()
        .filter(|n| !adjacent_symbols(&grid, n).is_empty())
        .map(|n| n.value)
        .sum())
}

fn part2(input: &str) -> Result<u64> {
    let grid: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let mut gears: HashMap<(usize, usize), Vec<u64>> = HashMap::new();
    for n in numbers(&grid)? {
        for (row, col, symbol) in adjacent_symbols(&grid, &n) {
            if symbol == b'*' {
                gears.entry((row, col)).or_default().push(n.value);
            }
        }
    }
    Ok(gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] * parts[1])
        .sum())
}
