//! Lens Library

use anyhow::{Context, Result, bail};

crate::soln!(part1, part2);

fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |h, b| (h + usize::from(b)) * 17 % 256)
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split(',')
}

enum Op<'a> {
    Remove(&'a str),
    Insert(&'a str, u8),
}

fn parse_step(step: &str) -> Result<Op<'_>> {
    if let Some(label) = step.strip_suffix('-') {
        return Ok(Op::Remove(label));
    }
    let Some((label, focal)) = step.split_once('=') else {
        bail!("unrecognised step `{step}`");
    };
    let focal = focal
        .parse()
        .with_context(|| format!("bad focal length in `{step}`"))?;
    Ok(Op::Insert(label, focal))
}

fn part1(input: &str) -> Result<usize> {
    Ok(steps(input).map(hash).sum())
}

fn part2(input: &str) -> Result<usize> {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
    for step in steps(input) {
        match parse_step(step)? {
            Op::Remove(label) => boxes[hash(label)].retain(|&(l, _)| l != label),
            Op::Insert(label, focal) => {
                let lenses = &mut boxes[hash(label)];
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal,
                    None => lenses.push((label, focal)),
                }
            }
        }
    }

    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * usize::from(focal))
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    #[test]
    fn hash_algorithm() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
    }

    #[test]
    fn examples() {
        assert_eq!(part1(EXAMPLE).unwrap(), 1320);
        assert_eq!(part2(EXAMPLE).unwrap(), 145);
    }

    #[test]
    fn bad_step_is_an_error() {
        assert!(part2("rn=x").is_err());
        assert!(part2("rn").is_err());
    }
}
