//! Pipe Maze

use std::collections::VecDeque;

use anyhow::{Context, Result, ensure};
use fixedbitset::FixedBitSet;

crate::soln!(part1, part2);

type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    North,
    South,
    East,
    West,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::North, Dir::South, Dir::East, Dir::West];

    fn opposite(self) -> Dir {
        match self {
            Dir::North => Dir::South,
            Dir::South => Dir::North,
            Dir::East => Dir::West,
            Dir::West => Dir::East,
        }
    }

    /// One step from `pos`; `None` when it would leave the top or left edge.
    fn step_from(self, (r, c): Pos) -> Option<Pos> {
        match self {
            Dir::North => Some((r.checked_sub(1)?, c)),
            Dir::South => Some((r + 1, c)),
            Dir::East => Some((r, c + 1)),
            Dir::West => Some((r, c.checked_sub(1)?)),
        }
    }
}

/// Openings of each tile. The start tile may connect anywhere.
fn exits(tile: u8) -> &'static [Dir] {
    match tile {
        b'|' => &[Dir::North, Dir::South],
        b'-' => &[Dir::East, Dir::West],
        b'L' => &[Dir::North, Dir::East],
        b'J' => &[Dir::North, Dir::West],
        b'7' => &[Dir::South, Dir::West],
        b'F' => &[Dir::South, Dir::East],
        b'S' => &Dir::ALL,
        _ => &[],
    }
}

struct Maze<'a> {
    rows: Vec<&'a [u8]>,
    width: usize,
    start: Pos,
}

fn parse(input: &str) -> Result<Maze<'_>> {
    let rows: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let width = rows.first().map_or(0, |r| r.len());
    ensure!(rows.iter().all(|r| r.len() == width), "maze is not rectangular");
    let start = rows
        .iter()
        .enumerate()
        .find_map(|(r, row)| row.iter().position(|&b| b == b'S').map(|c| (r, c)))
        .context("no start tile")?;
    Ok(Maze { rows, width, start })
}

impl Maze<'_> {
    fn tile(&self, (r, c): Pos) -> u8 {
        self.rows[r][c]
    }

    fn index(&self, (r, c): Pos) -> usize {
        r * self.width + c
    }

    fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        let (r, c) = dir.step_from(pos)?;
        (r < self.rows.len() && c < self.width).then_some((r, c))
    }

    /// The neighbour through `dir`, provided its pipe opens back towards us.
    fn follow(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        let next = self.step(pos, dir)?;
        exits(self.tile(next))
            .contains(&dir.opposite())
            .then_some(next)
    }

    /// Tiles on the loop through the start, and the farthest any of them is
    /// from it along the loop.
    fn trace_loop(&self) -> (FixedBitSet, usize) {
        let mut on_loop = FixedBitSet::with_capacity(self.rows.len() * self.width);
        on_loop.insert(self.index(self.start));
        let mut queue = VecDeque::from([(self.start, 0)]);
        let mut farthest = 0;
        while let Some((pos, dist)) = queue.pop_front() {
            farthest = farthest.max(dist);
            for &dir in exits(self.tile(pos)) {
                if let Some(next) = self.follow(pos, dir) {
                    if !on_loop.put(self.index(next)) {
                        queue.push_back((next, dist + 1));
                    }
                }
            }
        }
        (on_loop, farthest)
    }

    /// Counts tiles enclosed by the loop.
    ///
    /// Every tile becomes a 3x3 block with the pipe drawn through its middle,
    /// which opens up the gaps between adjacent pipes. Flooding from the
    /// corner then reaches everything outside, squeezing included.
    fn enclosed(&self) -> usize {
        let (on_loop, _) = self.trace_loop();
        let (height, width) = (self.rows.len() * 3, self.width * 3);
        let cell = |(r, c): Pos| r * width + c;

        let mut wall = FixedBitSet::with_capacity(height * width);
        for r in 0..self.rows.len() {
            for c in 0..self.width {
                if !on_loop[self.index((r, c))] {
                    continue;
                }
                let centre = (3 * r + 1, 3 * c + 1);
                wall.insert(cell(centre));
                for &dir in exits(self.tile((r, c))) {
                    if self.follow((r, c), dir).is_some() {
                        if let Some(arm) = dir.step_from(centre) {
                            wall.insert(cell(arm));
                        }
                    }
                }
            }
        }

        let mut outside = FixedBitSet::with_capacity(height * width);
        outside.insert(0);
        let mut queue = VecDeque::from([(0, 0)]);
        while let Some(pos) = queue.pop_front() {
            for dir in Dir::ALL {
                let Some((r, c)) = dir.step_from(pos) else {
                    continue;
                };
                if r >= height || c >= width || wall[cell((r, c))] {
                    continue;
                }
                if !outside.put(cell((r, c))) {
                    queue.push_back((r, c));
                }
            }
        }

        (0..self.rows.len())
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|&(r, c)| {
                !on_loop[self.index((r, c))] && !outside[cell((3 * r + 1, 3 * c + 1))]
            })
            .count()
    }
}

fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?.trace_loop().1)
}

fn part2(input: &str) -> Result<usize> {
    Ok(parse(input)?.enclosed())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = ".....\n.S-7.\n.|.|.\n.L-J.\n.....";

    #[test]
    fn part1_examples() {
        assert_eq!(part1(SQUARE).unwrap(), 4);
        assert_eq!(part1("..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...").unwrap(), 8);
    }

    #[test]
    fn part2_examples() {
        assert_eq!(part2(SQUARE).unwrap(), 1);

        let squeeze = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";
        assert_eq!(part2(squeeze).unwrap(), 4);

        let larger = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";
        assert_eq!(part2(larger).unwrap(), 8);
    }

    #[test]
    fn junk_pipes_are_enclosed_too() {
        let input = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L";
        assert_eq!(part2(input).unwrap(), 10);
    }

    #[test]
    fn missing_start_is_an_error() {
        assert!(part1("...\n.F7\n.LJ").is_err());
    }
}
