//! Target directory checks run before `folio init` writes anything.

use super::config::IGNORE_FILES;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Entries that never block init besides the ignore files.
const TOLERATED: &[&str] = &[".git", ".DS_Store"];

/// Blocking entries listed before the rest is summarized.
const MAX_LISTED: usize = 5;

/// Where init writes the new site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `folio init`: the current directory
    CurrentDir,
    /// `folio init <name>`: a new subdirectory
    NewDir,
}

/// Check that `root` can receive a new site whose config lives at `config_path`.
///
/// An existing config always blocks. Otherwise `.git`, `.DS_Store` and
/// pre-existing ignore files are kept as they are; any other entry blocks.
/// `NewDir` additionally rejects a `root` that is not a directory.
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    if mode == InitMode::NewDir && !root.is_dir() {
        bail!("'{}' exists and is not a directory", root.display());
    }
    if config_path.exists() {
        bail!(
            "'{}' already exists, this directory is already a folio site",
            config_path.display()
        );
    }

    let blocking = blocking_entries(root)?;
    if blocking.is_empty() {
        return Ok(());
    }

    let hint = match mode {
        InitMode::CurrentDir => "Use `folio init <name>` to create the site in a new subdirectory.",
        InitMode::NewDir => "Choose a different name or empty the directory.",
    };
    bail!(
        "'{}' is not empty ({}).\n{hint}",
        root.display(),
        summarize(&blocking)
    );
}

/// Sorted names of entries in `root` that init would not tolerate.
fn blocking_entries(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory '{}'", root.display()))?;

    let mut blocking = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in '{}'", root.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !TOLERATED.contains(&name.as_str()) && !IGNORE_FILES.contains(&name.as_str()) {
            blocking.push(name);
        }
    }
    blocking.sort();
    Ok(blocking)
}

fn summarize(names: &[String]) -> String {
    let listed = names[..names.len().min(MAX_LISTED)].join(", ");
    match names.len().saturating_sub(MAX_LISTED) {
        0 => listed,
        rest => format!("{listed} and {rest} more"),
    }
}
