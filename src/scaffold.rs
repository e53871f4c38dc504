//! `aoc init`: drops a fresh solution file into `solutions/` for the build
//! script to pick up.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{date::PuzzleDate, files};

const TEMPLATE: &str = include_str!("../templates/day.rs.tmpl");

/// `<root>/solutions/<year>/day<DD>.rs`
pub fn solution_file(root: &Path, date: PuzzleDate) -> PathBuf {
    root.join("solutions")
        .join(date.year.to_string())
        .join(format!("day{:02}.rs", date.day))
}

pub fn render(date: PuzzleDate) -> String {
    TEMPLATE
        .replace("{{year}}", &date.year.to_string())
        .replace("{{day}}", &date.day.to_string())
}

/// Creates the puzzle directory and the solution file. An existing solution
/// file is never overwritten.
pub fn init(root: &Path, date: PuzzleDate) -> Result<PathBuf> {
    files::make_dir(root, date)?;
    let path = solution_file(root, date);
    files::write_file(&path, render(date).as_bytes(), false)?;
    tracing::info!(path = %path.display(), "scaffolded solution");
    Ok(path)
}
