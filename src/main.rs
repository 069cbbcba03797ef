//! sitemapper - generate sitemap.xml from sitemap.toml.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitemapper::{
    cli::{
        Cli, Commands,
        build::{build_sitemap, print_sitemap},
    },
    config::SitemapConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let args = cli.render_args();
    logger::set_verbose(args.verbose);

    let mut config = SitemapConfig::load(&cli.config)?;
    config.apply_args(args);

    match &cli.command {
        Commands::Build { output, .. } => {
            if let Some(output) = output {
                config.sitemap.output = output.clone();
            }
            build_sitemap(&config).map(|_| ())
        }
        Commands::Print { .. } => print_sitemap(&config),
    }
}
