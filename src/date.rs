//! Which puzzle a command is about: the `--day`/`--year` pair and the
//! `--puzzle` part selector.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, Utc};

/// The first year the site ran.
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles are published on days 1 through 25 of December.
pub const LAST_DAY: u8 = 25;

/// Puzzles unlock at midnight US Eastern (EST, UTC-5) during December.
const EASTERN_OFFSET_HOURS: i64 = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid day of the month: {0}")]
    InvalidDay(u8),
    #[error("invalid year: {0}")]
    InvalidYear(u16),
    #[error("invalid puzzle number: {0} (expected 1 or 2)")]
    InvalidPart(String),
}

/// A single day's puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate {
    pub year: u16,
    pub day: u8,
}

impl PuzzleDate {
    /// Validates `year`/`day` against the current date.
    pub fn new(year: u16, day: u8) -> Result<Self, DateError> {
        Self::new_at(Utc::now(), year, day)
    }

    pub fn new_at(now: DateTime<Utc>, year: u16, day: u8) -> Result<Self, DateError> {
        if !(1..=LAST_DAY).contains(&day) {
            return Err(DateError::InvalidDay(day));
        }
        let latest = eastern_today(now).0;
        if !(FIRST_YEAR..=latest).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        Ok(Self { year, day })
    }

    /// Fills whichever of `day`/`year` is missing from today's Eastern date,
    /// then validates the pair.
    pub fn resolve(day: Option<u8>, year: Option<u16>) -> Result<Self, DateError> {
        Self::resolve_at(Utc::now(), day, year)
    }

    pub fn resolve_at(
        now: DateTime<Utc>,
        day: Option<u8>,
        year: Option<u16>,
    ) -> Result<Self, DateError> {
        let (this_year, today) = eastern_today(now);
        Self::new_at(now, year.unwrap_or(this_year), day.unwrap_or(today))
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}

/// Today's (year, day of month) in US Eastern time.
fn eastern_today(now: DateTime<Utc>) -> (u16, u8) {
    let eastern = now - Duration::hours(EASTERN_OFFSET_HOURS);
    let year = u16::try_from(eastern.year()).unwrap_or(u16::MAX);
    let day = u8::try_from(eastern.day()).unwrap_or(u8::MAX);
    (year, day)
}

/// Each puzzle has two levels; the second unlocks once the first is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Part {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(DateError::InvalidPart(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn defaults_follow_eastern_midnight() {
        // 04:00 UTC on the 6th is still the 5th in New York
        let date = PuzzleDate::resolve_at(utc(2023, 12, 6, 4), None, None).unwrap();
        assert_eq!(date, PuzzleDate { year: 2023, day: 5 });

        let date = PuzzleDate::resolve_at(utc(2023, 12, 6, 5), None, None).unwrap();
        assert_eq!(date, PuzzleDate { year: 2023, day: 6 });
    }

    #[test]
    fn explicit_values_override_defaults() {
        let date = PuzzleDate::resolve_at(utc(2023, 12, 20, 12), Some(1), Some(2022)).unwrap();
        assert_eq!(date, PuzzleDate { year: 2022, day: 1 });
    }

    #[test]
    fn rejects_days_outside_advent() {
        let now = utc(2023, 12, 10, 12);
        assert_eq!(PuzzleDate::new_at(now, 2023, 0), Err(DateError::InvalidDay(0)));
        assert_eq!(PuzzleDate::new_at(now, 2023, 26), Err(DateError::InvalidDay(26)));
        // the 31st is the default on new year's eve and must still be refused
        assert_eq!(
            PuzzleDate::resolve_at(utc(2023, 12, 31, 12), None, None),
            Err(DateError::InvalidDay(31))
        );
    }

    #[test]
    fn rejects_years_outside_site_history() {
        let now = utc(2023, 12, 10, 12);
        assert_eq!(PuzzleDate::new_at(now, 2014, 1), Err(DateError::InvalidYear(2014)));
        assert_eq!(PuzzleDate::new_at(now, 2024, 1), Err(DateError::InvalidYear(2024)));
        assert!(PuzzleDate::new_at(now, 2015, 1).is_ok());
    }

    #[test]
    fn parses_part_numbers() {
        assert_eq!("1".parse::<Part>(), Ok(Part::One));
        assert_eq!("2".parse::<Part>(), Ok(Part::Two));
        assert_eq!("3".parse::<Part>(), Err(DateError::InvalidPart("3".into())));
        assert_eq!(Part::Two.to_string(), "2");
    }

    #[test]
    fn display_pads_day() {
        assert_eq!(PuzzleDate { year: 2023, day: 5 }.to_string(), "2023 day 05");
    }
}
