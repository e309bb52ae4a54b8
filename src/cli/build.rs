//! Site building orchestration.
//!
//! Build phases:
//! - **Clean** - Remove the output directory when `--clean` or `build.clean`
//! - **Render** - Render every page for the selected environment
//! - **Write** - Write pages to the output directory

use crate::{
    config::SiteConfig,
    core::RenderEnvironment,
    embed::analytics::maybe_render_embed,
    generator::{clean_output, write_pages},
    log,
    page::{RenderContext, render_all},
};
use anyhow::Result;
use std::path::PathBuf;

/// Render and write the whole site. Returns the written page paths.
pub fn build_site(config: &SiteConfig, env: RenderEnvironment) -> Result<Vec<PathBuf>> {
    let output = &config.build.output;
    if config.build.clean {
        clean_output(output)?;
    }

    log_embed_status(config, env);

    let ctx = RenderContext::new(config, env);
    let pages = render_all(&ctx);
    let written = write_pages(output, &pages)?;

    log!("build"; "{} pages written to {} ({})", written.len(), output.display(), env);
    Ok(written)
}

/// Report why analytics is or is not part of this build.
fn log_embed_status(config: &SiteConfig, env: RenderEnvironment) {
    match maybe_render_embed(env, config) {
        Some(embed) => crate::debug!("analytics"; "injecting {}", embed.src()),
        None if !env.is_production() => crate::debug!("analytics"; "disabled in {}", env),
        None => crate::debug!("analytics"; "disabled, analytics.host or analytics.id is empty"),
    }
}
