//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── analytics  # [analytics]
//! │   ├── author     # [author]
//! │   ├── build      # [build]
//! │   ├── music      # [music]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Immutable config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section is `#[serde(default)]`: a missing section or field yields
//! empty values, and features depending on them are disabled.

pub mod section;
pub mod types;
mod util;

pub use util::canonical_url;
use util::find_config_file;

pub use section::{AnalyticsConfig, AuthorConfig, BuildConfig, MusicConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, SiteConfigHandle};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Author identity and social handles
    #[serde(default)]
    pub author: AuthorConfig,

    /// Analytics provider settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Music page track list
    #[serde(default)]
    pub music: MusicConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            return Err(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create one",
                cli.config.display()
            ))
            .into());
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.apply_cli_options(cli);

        // Validate raw values before paths become absolute
        if !cli.is_init() {
            config.validate()?;
        }

        config.finalize(cli);
        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name, .. } => {
                let base = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
                let path = base.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Resolve root and make paths absolute.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name, .. } => {
                let cwd = std::env::current_dir().unwrap_or_default();
                name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n))
            }
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.build.output = root.join(&self.build.output);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Absolute URL for a site route, if `site.url` is set and valid.
    pub fn url_for(&self, route: &str) -> Option<String> {
        self.site
            .url
            .as_deref()
            .and_then(|base| canonical_url(base, route))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of loaded values.
    fn apply_cli_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            crate::logger::set_verbose(build_args.verbose);
            if build_args.clean {
                self.build.clean = true;
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.analytics.validate(&mut diag);
        self.music.validate(&mut diag);
        self.build.validate(&mut diag);
        diag
    }

    /// Validate configuration, printing warnings and returning all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.site.title.is_empty());
        assert!(config.author.name.is_empty());
        assert!(!config.analytics.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
[site]
title = "Notes"
url = "https://example.com"

[author]
name = "Ada"
email = "ada@example.com"

[analytics]
host = "analytics.example.com"
id = "abc123"

[music]
tracks = ["1243533106", "1172495164"]
"#,
        );
        assert_eq!(config.site.title, "Notes");
        assert_eq!(config.author.email, "ada@example.com");
        assert!(config.analytics.is_configured());
        assert_eq!(config.music.tracks.len(), 2);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_url_for() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/blog\"");
        assert_eq!(
            config.url_for("/music/").as_deref(),
            Some("https://example.com/blog/music/")
        );
        assert!(SiteConfig::default().url_for("/").is_none());
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = test_parse_config("[site]\nurl = \"ftp://example.com\"\n[build]\noutput = \"\"");
        let diag = config.diagnostics();
        assert_eq!(diag.errors().len(), 2);
        assert!(config.validate().is_err());
    }
}
