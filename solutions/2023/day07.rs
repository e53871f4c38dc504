//! Camel Cards

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;

crate::soln!(part1, part2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// Card strengths, with jokers (when wild) as 1 so they sort below the 2.
fn strength(card: u8, jokers: bool) -> Result<u8> {
    Ok(match card {
        b'2'..=b'9' => card - b'0',
        b'T' => 10,
        b'J' if jokers => 1,
        b'J' => 11,
        b'Q' => 12,
        b'K' => 13,
        b'A' => 14,
        other => bail!("unknown card `{}`", other as char),
    })
}

fn hand_type(cards: &[u8; 5]) -> HandType {
    let jokers = cards.iter().filter(|&&c| c == 1).count();
    let mut groups: Vec<usize> = cards
        .iter()
        .filter(|&&c| c != 1)
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();
    // jokers always join the biggest group
    match groups.first_mut() {
        Some(largest) => *largest += jokers,
        None => groups.push(jokers),
    }
    match groups.as_slice() {
        [5] => HandType::FiveOfAKind,
        [4, ..] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        [3, ..] => HandType::ThreeOfAKind,
        [2, 2, ..] => HandType::TwoPair,
        [2, ..] => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

#[derive(Debug)]
struct Hand {
    kind: HandType,
    cards: [u8; 5],
    bid: u64,
}

fn parse(input: &str, jokers: bool) -> Result<Vec<Hand>> {
    input
        .lines()
        .map(|line| {
            let (cards, bid) = line
                .split_once(' ')
                .with_context(|| format!("bad hand `{line}`"))?;
            ensure!(cards.len() == 5, "hand `{cards}` is not five cards");
            let mut hand = [0; 5];
            for (slot, &card) in hand.iter_mut().zip(cards.as_bytes()) {
                *slot = strength(card, jokers)?;
            }
            Ok(Hand {
                kind: hand_type(&hand),
                cards: hand,
                bid: bid.trim().parse()?,
            })
        })
        .collect()
}

fn winnings(input: &str, jokers: bool) -> Result<u64> {
    let mut hands = parse(input, jokers)?;
    hands.sort_unstable_by_key(|h| (h.kind, h.cards));
    Ok(hands
        .iter()
        .zip(1..)
        .map(|(h, rank)| h.bid * rank)
        .sum())
}

fn part1(input: &str) -> Result<u64> {
    winnings(input, false)
}

fn part2(input: &str) -> Result<u64> {
    winnings(input, true)
}
