//! Authenticated requests against the Advent of Code site.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;
use ureq::config::Config;

use crate::date::{Part, PuzzleDate};

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Environment variable holding the value of the site's `session` cookie.
pub const SESSION_ENV: &str = "AOC_SESSION";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{SESSION_ENV} environment variable is not set")]
    MissingSession,
    #[error("{0}")]
    Ureq(#[from] ureq::Error),
}

pub struct Client {
    agent: Agent,
    base_url: String,
    session: String,
}

impl Client {
    /// Fails with [`Error::MissingSession`] when `session` is absent or blank,
    /// so no request ever goes out unauthenticated.
    pub fn with_session(base_url: &str, session: Option<String>) -> Result<Self, Error> {
        let session = session
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingSession)?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        let agent = Config::builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .https_only(base_url.starts_with("https"))
            .build()
            .into();
        Ok(Self {
            agent,
            base_url,
            session,
        })
    }

    pub fn puzzle_url(&self, date: PuzzleDate) -> String {
        format!("{}/{}/day/{}", self.base_url, date.year, date.day)
    }

    pub fn input_url(&self, date: PuzzleDate) -> String {
        format!("{}/input", self.puzzle_url(date))
    }

    pub fn answer_url(&self, date: PuzzleDate) -> String {
        format!("{}/answer", self.puzzle_url(date))
    }

    fn cookie(&self) -> String {
        format!("session={}", self.session)
    }

    /// Raw puzzle input for `date`.
    pub fn get_input(&self, date: PuzzleDate) -> Result<String, Error> {
        self.get(&self.input_url(date))
    }

    /// The puzzle page HTML for `date`.
    pub fn get_puzzle(&self, date: PuzzleDate) -> Result<String, Error> {
        self.get(&self.puzzle_url(date))
    }

    /// Posts an answer for one level of `date` and returns the reply page HTML.
    pub fn submit(&self, date: PuzzleDate, part: Part, answer: &str) -> Result<String, Error> {
        let url = self.answer_url(date);
        let level = part.number().to_string();
        debug!(%url, %level, %answer, "POST");
        let body = self
            .agent
            .post(&url)
            .header("Cookie", self.cookie())
            .send_form([("level", level.as_str()), ("answer", answer)])?
            .into_body()
            .read_to_string()?;
        Ok(body)
    }

    fn get(&self, url: &str) -> Result<String, Error> {
        debug!(%url, "GET");
        let body = self
            .agent
            .get(url)
            .header("Cookie", self.cookie())
            .call()?
            .into_body()
            .read_to_string()?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: PuzzleDate = PuzzleDate { year: 2023, day: 5 };

    #[test]
    fn missing_or_blank_session_is_refused() {
        assert!(matches!(
            Client::with_session(DEFAULT_BASE_URL, None),
            Err(Error::MissingSession)
        ));
        assert!(matches!(
            Client::with_session(DEFAULT_BASE_URL, Some("  \n".into())),
            Err(Error::MissingSession)
        ));
    }

    #[test]
    fn urls_follow_site_layout() {
        let client = Client::with_session("https://adventofcode.com/", Some("abc".into())).unwrap();
        assert_eq!(client.puzzle_url(DAY), "https://adventofcode.com/2023/day/5");
        assert_eq!(client.input_url(DAY), "https://adventofcode.com/2023/day/5/input");
        assert_eq!(client.answer_url(DAY), "https://adventofcode.com/2023/day/5/answer");
    }

    #[test]
    fn session_is_sent_as_cookie() {
        let client = Client::with_session(DEFAULT_BASE_URL, Some(" abc123\n".into())).unwrap();
        assert_eq!(client.cookie(), "session=abc123");
    }
}
