//! `[analytics]` configuration.
//!
//! ```toml
//! [analytics]
//! host = "analytics.example.com"
//! id = "4f1c2d3e-..."
//! ```
//!
//! Analytics is enabled only when both `host` and `id` are set. A partial
//! section is a warning, never an error.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Umami analytics settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Host serving `umami.js`, without scheme (empty = disabled).
    pub host: String,
    /// Umami website id.
    pub id: String,
}

crate::config_fields!(AnalyticsConfig => AnalyticsFields, "analytics" { host, id });

impl AnalyticsConfig {
    pub const TEMPLATE: &'static str = r#"[analytics]
host = ""                   # Umami host without scheme, empty disables analytics
id = ""                     # Umami website id, required when host is set
"#;

    /// Trimmed host, `None` when unset.
    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host)
    }

    /// Trimmed website id, `None` when unset.
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// Both host and id are present.
    pub fn is_configured(&self) -> bool {
        self.host().is_some() && self.id().is_some()
    }

    /// Warn about settings that silently disable analytics.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match (self.host(), self.id()) {
            (Some(_), None) => diag.warn_with_hint(
                Self::FIELDS.id,
                format!("{} is set but id is empty, analytics disabled", Self::FIELDS.host),
                "copy the website id from the Umami dashboard",
            ),
            (None, Some(_)) => diag.warn(
                Self::FIELDS.host,
                format!("{} is set but host is empty, analytics disabled", Self::FIELDS.id),
            ),
            _ => {}
        }

        if let Some(host) = self.host()
            && (host.contains("://") || host.contains('/'))
        {
            diag.warn_with_hint(
                Self::FIELDS.host,
                format!("host '{host}' should not contain a scheme or path"),
                "use a bare host like analytics.example.com",
            );
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_disabled() {
        let config = test_parse_config("");
        assert!(!config.analytics.is_configured());
        assert!(config.analytics.host().is_none());
    }

    #[test]
    fn test_configured() {
        let config =
            test_parse_config("[analytics]\nhost = \"analytics.example.com\"\nid = \"abc123\"");
        assert!(config.analytics.is_configured());
        assert_eq!(config.analytics.host(), Some("analytics.example.com"));
        assert_eq!(config.analytics.id(), Some("abc123"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let analytics = AnalyticsConfig {
            host: "analytics.example.com".into(),
            id: "   ".into(),
        };
        assert!(!analytics.is_configured());
    }

    #[test]
    fn test_partial_is_warning() {
        let analytics = AnalyticsConfig {
            host: "analytics.example.com".into(),
            id: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        analytics.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, AnalyticsConfig::FIELDS.id);
    }

    #[test]
    fn test_host_with_scheme_warns() {
        let analytics = AnalyticsConfig {
            host: "https://analytics.example.com".into(),
            id: "abc123".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        analytics.validate(&mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, AnalyticsConfig::FIELDS.host);
    }
}
