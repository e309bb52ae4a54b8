//! `[site]` configuration.
//!
//! Basic site information used for page titles and SEO tags.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Canonical site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "uk").
    pub language: String,
}

crate::config_fields!(SiteInfoConfig => SiteInfoFields, "site" {
    title, description, url, language,
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const TEMPLATE: &'static str = r#"[site]
title = ""                  # Site title
description = ""            # Site description (used as default meta description)
# url = "https://example.com"
language = "en"             # Language code
"#;

    /// Validate site configuration.
    ///
    /// `url` must be a valid http(s) URL with a host when set.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
