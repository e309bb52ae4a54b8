//! Command-line interface definitions.

use crate::core::RenderEnvironment;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio personal site renderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site with a default config
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Render all pages into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Check the config and report problems
    #[command(visible_alias = "v")]
    Validate,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Render environment; analytics is only emitted in production
    #[arg(short, long, value_enum, env = "FOLIO_ENV", default_value_t = RenderEnvironment::Production)]
    pub env: RenderEnvironment,

    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    /// Render environment selected for this run.
    ///
    /// Non-build commands never render, so they report the default.
    pub fn render_env(&self) -> RenderEnvironment {
        match &self.command {
            Commands::Build { build_args } => build_args.env,
            _ => RenderEnvironment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_build_defaults_to_production() {
        let cmd = Cli::command();
        let build = cmd.find_subcommand("build").unwrap();
        let env = build.get_arguments().find(|a| a.get_id() == "env").unwrap();

        let defaults: Vec<_> = env
            .get_default_values()
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(defaults, ["production"]);
        assert_eq!(env.get_env(), Some(std::ffi::OsStr::new("FOLIO_ENV")));
    }

    #[test]
    fn test_non_build_commands_report_production() {
        let cli = Cli::try_parse_from(["folio", "validate"]).unwrap();
        assert!(!cli.is_init());
        assert_eq!(cli.render_env(), RenderEnvironment::Production);
    }

    #[test]
    fn test_build_development() {
        let cli = Cli::try_parse_from(["folio", "build", "--env", "development", "-c"]).unwrap();
        assert_eq!(cli.render_env(), RenderEnvironment::Development);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert!(build_args.clean);
    }

    #[test]
    fn test_aliases_and_global_options() {
        let cli = Cli::try_parse_from(["folio", "-C", "site.toml", "-o", "dist", "b"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
        assert!(matches!(cli.command, Commands::Build { .. }));

        let cli = Cli::try_parse_from(["folio", "i", "mysite", "--dry"]).unwrap();
        assert!(cli.is_init());
    }

    #[test]
    fn test_config_default() {
        let cli = Cli::try_parse_from(["folio", "validate"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn test_invalid_env_rejected() {
        assert!(Cli::try_parse_from(["folio", "build", "--env", "staging"]).is_err());
    }
}
