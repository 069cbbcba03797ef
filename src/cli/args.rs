//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemap.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the configured urls and write the sitemap file
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: RenderArgs,

        /// Output file path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render the sitemap to stdout
    #[command(visible_alias = "p")]
    Print {
        #[command(flatten)]
        args: RenderArgs,
    },
}

/// Shared rendering arguments for Build and Print commands
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Override the base url prepended to relative locations.
    ///
    /// Useful for staging deployments without editing sitemap.toml:
    ///   sitemapper build --base-url "https://staging.example.com"
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Write the sitemap on a single line
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn render_args(&self) -> &RenderArgs {
        match &self.command {
            Commands::Build { args, .. } | Commands::Print { args } => args,
        }
    }
}
