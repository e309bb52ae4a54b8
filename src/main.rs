//! Folio - a static renderer for a personal blog and portfolio site.

#![allow(dead_code)]

mod cli;
mod component;
mod config;
mod core;
mod embed;
mod generator;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, SiteConfigHandle};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Resolved once; every consumer below shares this config and environment
    let handle = SiteConfigHandle::new(SiteConfig::load(&cli)?);
    let env = cli.render_env();
    let config = handle.get_site_config();

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => cli::build::build_site(&config, env).map(|_| ()),
        Commands::Validate => cli::validate::validate_site(&config),
    }
}
