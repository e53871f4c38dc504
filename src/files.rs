//! Layout of the per-puzzle directory and the write helpers every command
//! goes through.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::date::{Part, PuzzleDate};

pub const INPUT_FILE: &str = "input.txt";
pub const PUZZLE_FILE: &str = "puzzle.md";

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("error writing {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// `<root>/<year>/day-<DD>`
pub fn puzzle_dir(root: &Path, date: PuzzleDate) -> PathBuf {
    root.join(date.year.to_string())
        .join(format!("day-{:02}", date.day))
}

pub fn make_dir(root: &Path, date: PuzzleDate) -> Result<PathBuf, WriteError> {
    let dir = puzzle_dir(root, date);
    fs::create_dir_all(&dir).map_err(|source| WriteError::Io {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

pub fn solution_path(dir: &Path, part: Part) -> PathBuf {
    dir.join(format!("solution-{part}.txt"))
}

pub fn reply_path(dir: &Path, part: Part) -> PathBuf {
    dir.join(format!("reply-{part}.md"))
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// Without `allow_overwrite` an existing file is left untouched and
/// [`WriteError::AlreadyExists`] is returned.
pub fn write_file(path: &Path, contents: &[u8], allow_overwrite: bool) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if allow_overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => WriteError::AlreadyExists(path.to_path_buf()),
        _ => io_err(e),
    })?;
    file.write_all(contents).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_dir_layout() {
        let date = PuzzleDate { year: 2023, day: 7 };
        let dir = puzzle_dir(Path::new("root"), date);
        assert_eq!(dir, Path::new("root").join("2023").join("day-07"));
        assert_eq!(solution_path(&dir, Part::Two), dir.join("solution-2.txt"));
        assert_eq!(reply_path(&dir, Part::One), dir.join("reply-1.md"));
    }

    #[test]
    fn creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("2023").join("day-01").join(INPUT_FILE);
        write_file(&path, b"1abc2", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1abc2");
    }

    #[test]
    fn refuses_to_clobber_without_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("day01.rs");
        write_file(&path, b"first", false).unwrap();

        let err = write_file(&path, b"second", false).unwrap_err();
        assert!(matches!(err, WriteError::AlreadyExists(p) if p == path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn overwrite_replaces_whole_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(PUZZLE_FILE);
        write_file(&path, b"a longer first body", true).unwrap();
        write_file(&path, b"short", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn make_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let date = PuzzleDate { year: 2022, day: 1 };
        let a = make_dir(tmp.path(), date).unwrap();
        let b = make_dir(tmp.path(), date).unwrap();
        assert_eq!(a, b);
        assert!(a.is_dir());
    }
}
