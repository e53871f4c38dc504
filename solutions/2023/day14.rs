//! Parabolic Reflector Dish

use std::collections::HashMap;

use anyhow::{Result, ensure};

crate::soln!(part1, part2);

const CYCLES: usize = 1_000_000_000;

#[derive(Clone, PartialEq, Eq, Hash)]
struct Platform {
    cells: Vec<Vec<u8>>,
}

fn parse(input: &str) -> Result<Platform> {
    let cells: Vec<Vec<u8>> = input.lines().map(|l| l.as_bytes().to_vec()).collect();
    let width = cells.first().map_or(0, Vec::len);
    ensure!(cells.iter().all(|r| r.len() == width), "platform is not rectangular");
    Ok(Platform { cells })
}

impl Platform {
    /// Rolls every round rock as far north as it goes.
    fn tilt_north(&mut self) {
        let width = self.cells.first().map_or(0, Vec::len);
        for c in 0..width {
            let mut free = 0;
            for r in 0..self.cells.len() {
                match self.cells[r][c] {
                    b'#' => free = r + 1,
                    b'O' => {
                        self.cells[r][c] = b'.';
                        self.cells[free][c] = b'O';
                        free += 1;
                    }
                    _ => {}
                }
            }
        }
    }

    fn rotate_clockwise(&mut self) {
        let height = self.cells.len();
        let width = self.cells.first().map_or(0, Vec::len);
        self.cells = (0..width)
            .map(|c| (0..height).rev().map(|r| self.cells[r][c]).collect())
            .collect();
    }

    /// North, west, south, east.
    fn spin_cycle(&mut self) {
        for _ in 0..4 {
            self.tilt_north();
            self.rotate_clockwise();
        }
    }

    fn north_load(&self) -> usize {
        let height = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .map(|(r, row)| row.iter().filter(|&&b| b == b'O').count() * (height - r))
            .sum()
    }
}

fn part1(input: &str) -> Result<usize> {
    let mut platform = parse(input)?;
    platform.tilt_north();
    Ok(platform.north_load())
}

fn part2(input: &str) -> Result<usize> {
    let mut platform = parse(input)?;
    let mut seen = HashMap::new();
    let mut loads = vec![platform.north_load()];

    for done in 0..CYCLES {
        if let Some(&first) = seen.get(&platform) {
            let period = done - first;
            return Ok(loads[first + (CYCLES - first) % period]);
        }
        seen.insert(platform.clone(), done);
        platform.spin_cycle();
        loads.push(platform.north_load());
    }
    Ok(platform.north_load())
}
