//! The Floor Will Be Lava

use anyhow::{Result, ensure};
use rayon::prelude::*;

crate::soln!(part1, part2);

type Beam = ((usize, usize), (isize, isize));

struct Contraption<'a> {
    rows: Vec<&'a [u8]>,
    width: usize,
}

fn parse(input: &str) -> Result<Contraption<'_>> {
    let rows: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let width = rows.first().map_or(0, |r| r.len());
    ensure!(rows.iter().all(|r| r.len() == width), "grid is not rectangular");
    Ok(Contraption { rows, width })
}

fn dir_bit((dr, dc): (isize, isize)) -> u8 {
    match (dr, dc) {
        (-1, _) => 1,
        (1, _) => 2,
        (_, -1) => 4,
        _ => 8,
    }
}

impl Contraption<'_> {
    fn step(&self, (r, c): (usize, usize), (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let r = r.checked_add_signed(dr)?;
        let c = c.checked_add_signed(dc)?;
        (r < self.rows.len() && c < self.width).then_some((r, c))
    }

    /// Number of tiles a beam entering at `start` ends up crossing.
    fn energized(&self, start: Beam) -> usize {
        // directions each tile has already been entered with
        let mut seen = vec![0u8; self.rows.len() * self.width];
        let mut beams = vec![start];

        while let Some(((r, c), dir)) = beams.pop() {
            let bit = dir_bit(dir);
            let cell = &mut seen[r * self.width + c];
            if *cell & bit != 0 {
                continue;
            }
            *cell |= bit;

            let (dr, dc) = dir;
            let out: &[(isize, isize)] = match self.rows[r][c] {
                b'/' => &[(-dc, -dr)],
                b'\\' => &[(dc, dr)],
                b'|' if dc != 0 => &[(-1, 0), (1, 0)],
                b'-' if dr != 0 => &[(0, -1), (0, 1)],
                _ => &[dir],
            };
            for &next_dir in out {
                if let Some(next) = self.step((r, c), next_dir) {
                    beams.push((next, next_dir));
                }
            }
        }
        seen.iter().filter(|&&s| s != 0).count()
    }

    /// Every beam that can enter from an edge, pointing inwards.
    fn edge_beams(&self) -> Vec<Beam> {
        let (h, w) = (self.rows.len(), self.width);
        let mut beams = Vec::with_capacity(2 * (h + w));
        for r in 0..h {
            beams.push(((r, 0), (0, 1)));
            beams.push(((r, w - 1), (0, -1)));
        }
        for c in 0..w {
            beams.push(((0, c), (1, 0)));
            beams.push(((h - 1, c), (-1, 0)));
        }
        beams
    }
}

fn part1(input: &str) -> Result<usize> {
    let grid = parse(input)?;
    if grid.width == 0 {
        return Ok(0);
    }
    Ok(grid.energized(((0, 0), (0, 1))))
}

fn part2(input: &str) -> Result<usize> {
    let grid = parse(input)?;
    if grid.width == 0 {
        return Ok(0);
    }
    Ok(grid
        .edge_beams()
        .into_par_iter()
        .map(|beam| grid.energized(beam))
        .max()
        .unwrap_or(0))
}
