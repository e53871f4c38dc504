//! Lavaduct Lagoon

use anyhow::{Context, Result, bail};
use regex::Regex;

crate::soln!(part1, part2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dig {
    dir: (i64, i64),
    len: i64,
}

fn direction(d: &str) -> Result<(i64, i64)> {
    Ok(match d {
        "U" | "3" => (-1, 0),
        "D" | "1" => (1, 0),
        "L" | "2" => (0, -1),
        "R" | "0" => (0, 1),
        _ => bail!("unknown direction `{d}`"),
    })
}

/// Both readings of the plan: the written steps, and the ones hidden in the
/// colour codes.
fn parse(input: &str) -> Result<(Vec<Dig>, Vec<Dig>)> {
    let re = Regex::new(r"^([UDLR]) (\d+) \(#([0-9a-f]{5})([0-3])\)$")?;
    let mut plain = Vec::new();
    let mut hidden = Vec::new();
    for line in input.lines() {
        let (_, [dir, len, hex_len, hex_dir]) = re
            .captures(line)
            .with_context(|| format!("malformed dig step `{line}`"))?
            .extract();
        plain.push(Dig {
            dir: direction(dir)?,
            len: len.parse()?,
        });
        hidden.push(Dig {
            dir: direction(hex_dir)?,
            len: i64::from_str_radix(hex_len, 16)?,
        });
    }
    Ok((plain, hidden))
}

/// Cubic metres dug out, trench included.
///
/// The shoelace formula gives the area enclosed by the trench's centre line;
/// Pick's theorem then adds the half of each boundary cell lying outside it.
fn lagoon_volume(plan: &[Dig]) -> i64 {
    let (mut r, mut c) = (0i64, 0i64);
    let mut twice_area = 0;
    let mut perimeter = 0;
    for dig in plan {
        let (nr, nc) = (r + dig.dir.0 * dig.len, c + dig.dir.1 * dig.len);
        twice_area += c * nr - nc * r;
        perimeter += dig.len;
        (r, c) = (nr, nc);
    }
    twice_area.abs() / 2 + perimeter / 2 + 1
}

fn part1(input: &str) -> Result<i64> {
    Ok(lagoon_volume(&parse(input)?.0))
}

fn part2(input: &str) -> Result<i64> {
    Ok(lagoon_volume(&parse(input)?.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)";

    #[test]
    fn examples() {
        assert_eq!(part1(EXAMPLE).unwrap(), 62);
        assert_eq!(part2(EXAMPLE).unwrap(), 952408144115);
    }

    #[test]
    fn colour_codes_decode() {
        let (_, hidden) = parse(EXAMPLE).unwrap();
        assert_eq!(hidden[0], Dig { dir: (0, 1), len: 461937 });
        assert_eq!(hidden[1], Dig { dir: (1, 0), len: 56407 });
    }

    #[test]
    fn malformed_step_is_an_error() {
        assert!(part1("X 1 (#000000)").is_err());
    }
}
