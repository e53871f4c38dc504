//! Clumsy Crucible

use std::{cmp::Reverse, collections::BinaryHeap, ops::RangeInclusive};

use anyhow::{Context, Result, ensure};

crate::soln!(part1, part2);

struct City {
    loss: Vec<Vec<u32>>,
    width: usize,
}

fn parse(input: &str) -> Result<City> {
    let loss = input
        .lines()
        .map(|line| {
            line.chars()
                .map(|ch| ch.to_digit(10).with_context(|| format!("bad heat loss `{ch}`")))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let width = loss.first().map_or(0, Vec::len);
    ensure!(width > 0, "empty city map");
    ensure!(loss.iter().all(|r| r.len() == width), "city map is not rectangular");
    Ok(City { loss, width })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Axis {
    Vertical,
    Horizontal,
}

impl City {
    /// Least heat loss from the top-left to the bottom-right block when the
    /// crucible must move `moves` blocks before each turn.
    ///
    /// States only remember the axis of the last straight run: every edge is a
    /// whole run followed by a forced turn.
    fn least_heat_loss(&self, moves: RangeInclusive<usize>) -> Option<u32> {
        let height = self.loss.len();
        let target = (height - 1, self.width - 1);
        let index = |(r, c): (usize, usize), axis: Axis| (r * self.width + c) * 2 + axis as usize;

        let mut best = vec![u32::MAX; height * self.width * 2];
        let mut queue = BinaryHeap::new();
        for axis in [Axis::Vertical, Axis::Horizontal] {
            best[index((0, 0), axis)] = 0;
            queue.push(Reverse((0, (0, 0), axis)));
        }

        while let Some(Reverse((cost, pos, axis))) = queue.pop() {
            if pos == target {
                return Some(cost);
            }
            if cost > best[index(pos, axis)] {
                continue;
            }
            let turned = match axis {
                Axis::Vertical => Axis::Horizontal,
                Axis::Horizontal => Axis::Vertical,
            };
            let deltas: [(isize, isize); 2] = match turned {
                Axis::Vertical => [(-1, 0), (1, 0)],
                Axis::Horizontal => [(0, -1), (0, 1)],
            };
            for (dr, dc) in deltas {
                let mut next_cost = cost;
                for dist in 1..=*moves.end() {
                    let (Some(r), Some(c)) = (
                        pos.0.checked_add_signed(dr * dist as isize),
                        pos.1.checked_add_signed(dc * dist as isize),
                    ) else {
                        break;
                    };
                    if r >= height || c >= self.width {
                        break;
                    }
                    next_cost += self.loss[r][c];
                    if dist < *moves.start() {
                        continue;
                    }
                    let slot = &mut best[index((r, c), turned)];
                    if next_cost < *slot {
                        *slot = next_cost;
                        queue.push(Reverse((next_cost, (r, c), turned)));
                    }
                }
            }
        }
        None
    }
}

fn part1(input: &str) -> Result<u32> {
    parse(input)?
        .least_heat_loss(1..=3)
        .context("no route to the factory")
}

fn part2(input: &str) -> Result<u32> {
    parse(input)?
        .least_heat_loss(4..=10)
        .context("no route to the factory")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    #[test]
    fn examples() {
        assert_eq!(part1(EXAMPLE).unwrap(), 102);
        assert_eq!(part2(EXAMPLE).unwrap(), 94);
    }

    #[test]
    fn ultra_crucible_must_run_four_before_stopping() {
        let input = "\
111111111111
999999999991
999999999991
999999999991
999999999991";
        assert_eq!(part2(input).unwrap(), 71);
    }

    #[test]
    fn bad_digit_is_an_error() {
        assert!(part1("12\n3x").is_err());
    }
}
