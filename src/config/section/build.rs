//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "public"           # Output directory (relative to site root)
//! clean = false               # Remove output directory before building
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Clean output directory completely before building.
    pub clean: bool,
}

crate::config_fields!(BuildConfig => BuildFields, "build" { output, clean });

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            clean: false,
        }
    }
}

impl BuildConfig {
    pub const TEMPLATE: &'static str = r#"[build]
output = "public"           # Output directory (relative to site root)
clean = false               # Remove output directory before building
"#;

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.output,
                "output directory must not be empty",
                "set output = \"public\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_empty_output_is_error() {
        let config = test_parse_config("[build]\noutput = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
