//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Generated per section with [`config_fields!`](crate::config_fields) so
/// diagnostics always point at a real TOML key.
///
/// # Example
///
/// ```ignore
/// config_fields!(AnalyticsConfig => AnalyticsFields, "analytics" { host, id });
///
/// diag.warn(AnalyticsConfig::FIELDS.id, "required when host is set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Declare `FIELDS` path accessors for a config section.
///
/// Expands to a `<Name>Fields` struct holding one [`FieldPath`] per listed
/// field and an associated `FIELDS` constant on the section type.
#[macro_export]
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        #[allow(dead_code)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(concat!($section, ".", stringify!($field))),)*
            };
        }
    };
}
