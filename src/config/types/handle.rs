//! Read-only config handle shared across the render.
//!
//! The config is loaded once at startup and frozen behind an `Arc`.
//! Every consumer gets the same value for the whole process run.

use crate::config::SiteConfig;
use std::sync::Arc;

/// Immutable handle to the resolved site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfigHandle {
    inner: Arc<SiteConfig>,
}

impl SiteConfigHandle {
    /// Freeze a fully loaded config.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    /// Shared reference to the resolved config.
    #[inline]
    pub fn get_site_config(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.inner)
    }
}
