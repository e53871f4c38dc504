//! Cosmic Expansion

use anyhow::Result;
use itertools::Itertools;

crate::soln!(part1, part2);

/// Maps each coordinate to where it lands once every empty line before it has
/// grown to `factor` lines.
fn expand(coords: &[usize], size: usize, factor: usize) -> Vec<usize> {
    let mut occupied = vec![false; size];
    for &c in coords {
        occupied[c] = true;
    }
    let mut shifted = Vec::with_capacity(size);
    let mut empty = 0;
    for &o in &occupied {
        shifted.push(empty);
        if !o {
            empty += 1;
        }
    }
    coords
        .iter()
        .map(|&c| c + (factor - 1) * shifted[c])
        .collect()
}

/// Sum of Manhattan distances between every pair of galaxies.
fn total_distance(input: &str, factor: usize) -> usize {
    let galaxies: Vec<(usize, usize)> = input
        .lines()
        .enumerate()
        .flat_map(|(r, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(c, _)| (r, c))
        })
        .collect();
    let height = input.lines().count();
    let width = input.lines().map(str::len).max().unwrap_or(0);

    let (rows, cols): (Vec<_>, Vec<_>) = galaxies.into_iter().unzip();
    let rows = expand(&rows, height, factor);
    let cols = expand(&cols, width, factor);

    rows.iter()
        .zip(&cols)
        .tuple_combinations()
        .map(|((r1, c1), (r2, c2))| r1.abs_diff(*r2) + c1.abs_diff(*c2))
        .sum()
}

fn part1(input: &str) -> Result<usize> {
    Ok(total_distance(input, 2))
}

fn part2(input: &str) -> Result<usize> {
    Ok(total_distance(input, 1_000_000))
}
