//! Render environment for production/development builds.

use clap::ValueEnum;
use std::fmt;

/// Environment a render runs in, resolved once at startup.
///
/// Production-only embeds (analytics) are emitted only in
/// [`RenderEnvironment::Production`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum RenderEnvironment {
    /// Local preview: third-party tracking stays off.
    #[value(alias = "dev")]
    Development,
    /// Deployed site.
    #[default]
    #[value(alias = "prod")]
    Production,
}

impl RenderEnvironment {
    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for RenderEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert!(RenderEnvironment::default().is_production());
        assert!(!RenderEnvironment::Development.is_production());
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(
            RenderEnvironment::from_str("production", true),
            Ok(RenderEnvironment::Production)
        );
        assert_eq!(
            RenderEnvironment::from_str("dev", true),
            Ok(RenderEnvironment::Development)
        );
        assert!(RenderEnvironment::from_str("staging", true).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RenderEnvironment::Development.to_string(), "development");
    }
}
