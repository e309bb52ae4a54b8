//! Output generation.
//!
//! Writes rendered pages into the output directory:
//!
//! ```text
//! public/
//! ├── index.html
//! ├── about/index.html
//! └── music/index.html
//! ```

use crate::{log, page::Page};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Remove the output directory if it exists.
pub fn clean_output(output: &Path) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory '{}'", output.display()))?;
        log!("clean"; "removed {}", output.display());
    }
    Ok(())
}

/// Write every page under `output`, returning the written paths in order.
pub fn write_pages(output: &Path, pages: &[Page]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory '{}'", output.display()))?;

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let path = output.join(page.output_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&path, &page.html)
            .with_context(|| format!("Failed to write page '{}'", path.display()))?;
        crate::debug!("write"; "{} -> {}", page.route, path.display());
        written.push(path);
    }

    Ok(written)
}
