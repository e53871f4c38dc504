//! Cube Conundrum

use anyhow::{Context, Result, bail};

crate::soln!(part1, part2);

/// The most cubes of each colour shown in any single reveal.
#[derive(Debug, Default, PartialEq, Eq)]
struct Game {
    id: u32,
    red: u32,
    green: u32,
    blue: u32,
}

fn parse_game(line: &str) -> Result<Game> {
    let (head, reveals) = line
        .split_once(": ")
        .with_context(|| format!("no `: ` in `{line}`"))?;
    let id = head
        .strip_prefix("Game ")
        .with_context(|| format!("bad game header `{head}`"))?
        .parse()?;

    let mut game = Game {
        id,
        ..Game::default()
    };
    for cubes in reveals.split([';', ',']) {
        let (count, colour) = cubes
            .trim()
            .split_once(' ')
            .with_context(|| format!("bad cube count `{cubes}`"))?;
        let count: u32 = count.parse()?;
        let max = match colour {
            "red" => &mut game.red,
            "green" => &mut game.green,
            "blue" => &mut game.blue,
            other => bail!("unknown colour `{other}`"),
        };
        *max = (*max).max(count);
    }
    Ok(game)
}

fn parse(input: &str) -> Result<Vec<Game>> {
    input.lines().map(parse_game).collect()
}

fn part1(input: &str) -> Result<u32> {
    Ok(parse(input)?
        .iter()
        .filter(|g| g.red <= 12 && g.green <= 13 && g.blue <= 14)
        .map(|g| g.id)
        .sum())
}

fn part2(input: &str) -> Result<u32> {
    Ok(parse(input)?
        .iter()
        .map(|g| g.red * g.green * g.blue)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 8);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 2286);
    }

    #[test]
    fn missing_colour_counts_as_zero() {
        let game = parse_game("Game 7: 2 red; 5 red").unwrap();
        assert_eq!(
            game,
            Game {
                id: 7,
                red: 5,
                green: 0,
                blue: 0
            }
        );
    }
}
