//! The work behind each `aoc` subcommand. Every command either succeeds or
//! returns the first error; there is no retrying.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    client::Client,
    date::{Part, PuzzleDate},
    files, infra, scaffold, scrape,
};

/// Where things live, which site to talk to and who to talk to it as.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub base_url: String,
    /// Value of the site's `session` cookie.
    pub session: Option<String>,
}

impl Settings {
    fn client(&self) -> Result<Client> {
        Ok(Client::with_session(&self.base_url, self.session.clone())?)
    }
}

/// Downloads the puzzle input into `input.txt`.
pub fn fetch_input(settings: &Settings, date: PuzzleDate) -> Result<PathBuf> {
    let client = settings.client()?;
    let dir = files::make_dir(&settings.root, date)?;
    let input = client
        .get_input(date)
        .with_context(|| format!("getting puzzle input for {date}"))?;

    let path = dir.join(files::INPUT_FILE);
    files::write_file(&path, input.as_bytes(), true)?;
    info!(path = %path.display(), bytes = input.len(), "puzzle input written");
    Ok(path)
}

/// Downloads the puzzle page and keeps the text of its description(s) in
/// `puzzle.md`. Re-running after solving level one picks up level two.
pub fn fetch_puzzle(settings: &Settings, date: PuzzleDate) -> Result<PathBuf> {
    let client = settings.client()?;
    let dir = files::make_dir(&settings.root, date)?;
    let html = client
        .get_puzzle(date)
        .with_context(|| format!("getting puzzle for {date}"))?;
    let text = scrape::extract_text(&html, scrape::PUZZLE_SELECTOR)?;

    let path = dir.join(files::PUZZLE_FILE);
    files::write_file(&path, text.as_bytes(), true)?;
    info!(path = %path.display(), "puzzle description written");
    Ok(path)
}

pub fn init(settings: &Settings, date: PuzzleDate) -> Result<PathBuf> {
    scaffold::init(&settings.root, date)
}

/// Reads an input file, dropping trailing newlines.
pub fn read_input(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle input {}", path.display()))?;
    Ok(raw.trim_end_matches('\n').to_owned())
}

/// Runs a solution on the day's `input.txt` and records its answer in
/// `solution-<N>.txt` for [`submit`].
///
/// With `input` set the solution runs on that file instead, and the recorded
/// answer is left alone; the returned path is then `None`.
pub fn solve(
    settings: &Settings,
    date: PuzzleDate,
    part: Part,
    input: Option<&Path>,
) -> Result<(String, Option<PathBuf>)> {
    let dir = files::make_dir(&settings.root, date)?;
    let input_path = input.map_or_else(|| dir.join(files::INPUT_FILE), Path::to_path_buf);
    let input_text = read_input(&input_path)?;

    info!(%date, %part, input = %input_path.display(), "running puzzle");
    let answer = infra::dispatch(date, part, &input_text)?;
    if input.is_some() {
        return Ok((answer, None));
    }

    let path = files::solution_path(&dir, part);
    files::write_file(&path, answer.as_bytes(), true)?;
    Ok((answer, Some(path)))
}

/// Submits the answer recorded by [`solve`] and saves the site's verdict to
/// `reply-<N>.md`.
pub fn submit(settings: &Settings, date: PuzzleDate, part: Part) -> Result<(String, PathBuf)> {
    let dir = files::puzzle_dir(&settings.root, date);
    let answer_path = files::solution_path(&dir, part);
    let contents = fs::read_to_string(&answer_path)
        .with_context(|| format!("reading solution {}", answer_path.display()))?;
    let answer = contents.trim_matches(['\n', '\t', ' ']);

    let client = settings.client()?;
    let html = client
        .submit(date, part, answer)
        .with_context(|| format!("submitting solution for {date} part {part}"))?;
    let reply = scrape::extract_text(&html, scrape::REPLY_SELECTOR)?;

    let path = files::reply_path(&dir, part);
    files::write_file(&path, reply.as_bytes(), true)?;
    Ok((reply, path))
}

/// Registered solutions, as printed by `aoc list`.
pub fn list() -> Vec<PuzzleDate> {
    infra::available().collect()
}
