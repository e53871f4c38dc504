use anyhow::{Result, anyhow};

pub use crate::date::Part;
use crate::date::PuzzleDate;

mod registry {
    include!(concat!(env!("OUT_DIR"), "/registry.rs"));
}

mod solutions {
    include!(concat!(env!("OUT_DIR"), "/solutions_mod.rs"));
}

/// Runs one level of a registered solution on `input`.
pub fn dispatch(date: PuzzleDate, part: Part, input: &str) -> Result<String> {
    let f = registry::REGISTRY
        .iter()
        .find(|(year, day, _)| *year == date.year && *day == date.day)
        .map(|(_, _, f)| *f)
        .ok_or_else(|| anyhow!("no solution registered for {date}"))?;
    f(part, input)
}

/// Every puzzle with a solution compiled in, oldest first.
pub fn available() -> impl Iterator<Item = PuzzleDate> {
    registry::REGISTRY
        .iter()
        .map(|&(year, day, _)| PuzzleDate { year, day })
}

/// Wires a solution file's `part1`/`part2` into the `solve` entry point the
/// registry calls.
///
/// Both functions take the trimmed puzzle input and return
/// `anyhow::Result<impl Display>`.
#[macro_export]
macro_rules! soln {
    ( $part1:ident, $part2:ident $(,)? ) => {
        pub fn solve(
            part: $crate::infra::Part,
            input: &str,
        ) -> ::anyhow::Result<::std::string::String> {
            // do some magic logging
            let __puzzle: &str = {
                let __m = module_path!();
                match __m.rsplit("::").next() {
                    Some(s) => s,
                    None => __m,
                }
            };
            let __span = ::tracing::info_span!("solve", puzzle = %__puzzle, %part).entered();

            let now = ::std::time::Instant::now();
            let __out: ::std::string::String = match part {
                $crate::infra::Part::One => $part1(input)?.to_string(),
                $crate::infra::Part::Two => $part2(input)?.to_string(),
            };
            ::tracing::info!(elapsed_secs = now.elapsed().as_secs_f64(), "solved");
            Ok(__out)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALORIES: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";

    #[test]
    fn dispatches_to_registered_solution() {
        let date = PuzzleDate { year: 2022, day: 1 };
        assert_eq!(dispatch(date, Part::One, CALORIES).unwrap(), "24000");
        assert_eq!(dispatch(date, Part::Two, CALORIES).unwrap(), "45000");
    }

    #[test]
    fn unknown_puzzle_is_an_error() {
        let err = dispatch(PuzzleDate { year: 2015, day: 25 }, Part::One, "").unwrap_err();
        assert_eq!(err.to_string(), "no solution registered for 2015 day 25");
    }

    #[test]
    fn registry_is_sorted_and_complete() {
        let all: Vec<_> = available().collect();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.contains(&PuzzleDate { year: 2022, day: 1 }));
        for day in 1..=18 {
            assert!(all.contains(&PuzzleDate { year: 2023, day }), "missing 2023 day {day}");
        }
    }
}
