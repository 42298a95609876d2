use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LEVELS_DIR: &str = "levels";

/// All `.txt` files in the levels directory, sorted by file name so the
/// menu order is stable across runs.
pub fn discover_levels(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Reads a level file into its rows. Blank lines are skipped; everything
/// else is handed to the grid model untouched.
pub fn load_level_rows(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn level_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
