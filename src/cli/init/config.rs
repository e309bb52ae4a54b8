//! Configuration file generation.
//!
//! Creates folio.toml and ignore files for new sites.

use crate::config::{AnalyticsConfig, AuthorConfig, BuildConfig, MusicConfig, SiteInfoConfig};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Files to write ignore patterns to
pub(super) const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    let sections = [
        SiteInfoConfig::TEMPLATE,
        AuthorConfig::TEMPLATE,
        AnalyticsConfig::TEMPLATE,
        MusicConfig::TEMPLATE,
        BuildConfig::TEMPLATE,
    ];

    let mut out = format!(
        "# Folio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Write default configuration to `path`
pub fn write_config(root: &Path, path: &Path) -> Result<()> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/public/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();

        assert_eq!(config.site.language, "en");
        assert!(!config.analytics.is_configured());
        assert_eq!(config.music.color, "#ff5500");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_has_every_section() {
        let template = generate_config_template();
        for section in ["[site]", "[author]", "[analytics]", "[music]", "[build]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), Path::new("folio.toml")).unwrap();

        let content = fs::read_to_string(temp.path().join("folio.toml")).unwrap();
        assert!(content.contains("[analytics]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/public"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
