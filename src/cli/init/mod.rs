//! Site initialization module.
//!
//! Creates a new site with a commented default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Target directory checks
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::fs;

pub use config::generate_config_template;
pub use validate::InitMode;

/// Create a new site
///
/// # Steps
/// 1. Validate target directory
/// 2. Write configuration file and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, &site_config.config_path, mode)?;
    fs::create_dir_all(root)?;

    config::write_config(root, &site_config.config_path)?;
    let output_dir = site_config
        .build
        .output
        .strip_prefix(root)
        .unwrap_or(&site_config.build.output);
    config::write_ignore_files(root, output_dir)?;

    log!("init"; "Site initialized in {}", root.display());
    Ok(())
}
