//! Sitemap build orchestration.
//!
//! - **build**: config -> url set -> `sitemap.xml` on disk
//! - **print**: config -> url set -> stdout (any `Write` via `write_sitemap`)

use crate::{config::SitemapConfig, debug, log, sitemap::Sitemap};
use anyhow::{Context, Result};
use std::{
    io::{Write, stdout},
    path::PathBuf,
};

/// Render the configured urls and persist them to the output path.
///
/// Returns the path that was written.
pub fn build_sitemap(config: &SitemapConfig) -> Result<PathBuf> {
    let urls = config.url_set();
    let sitemap_path = config.output_path();

    debug!("sitemap"; "base url: {:?}", urls.base_url());

    Sitemap::new(&urls)
        .minify(config.sitemap.minify)
        .persist(&sitemap_path)?;

    log!("sitemap"; "{} ({} urls)",
        sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
        urls.len());
    Ok(sitemap_path)
}

/// Render the configured urls to stdout.
pub fn print_sitemap(config: &SitemapConfig) -> Result<()> {
    write_sitemap(config, &mut stdout().lock())
}

/// Render the configured urls into `out`.
pub fn write_sitemap<W: Write>(config: &SitemapConfig, out: &mut W) -> Result<()> {
    let urls = config.url_set();
    let xml = Sitemap::new(&urls).minify(config.sitemap.minify).render();

    out.write_all(xml.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write sitemap output")
}
