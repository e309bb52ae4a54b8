//! Config validation command.

use crate::{config::SiteConfig, log};
use anyhow::Result;

/// Report the config's errors and warnings.
///
/// Loading already failed on errors, so reaching here means only warnings
/// remain. Also lists which optional features the config enables.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let diag = config.diagnostics();

    let analytics = if config.analytics.is_configured() {
        "enabled in production"
    } else {
        "disabled"
    };
    log!("validate"; "analytics: {}", analytics);
    log!("validate"; "music: {} track(s)", config.music.tracks.len());

    if diag.warnings().is_empty() {
        log!("validate"; "config ok");
    } else {
        log!("validate"; "config ok with {} warning(s)", diag.warnings().len());
    }
    Ok(())
}
