//! Sitemap configuration (`sitemap.toml`).
//!
//! # Sections
//!
//! | Section      | Purpose                                    |
//! |--------------|--------------------------------------------|
//! | `[sitemap]`  | Base url, output path, minification        |
//! | `[[url]]`    | One table per url, in sitemap order        |
//!
//! ```toml
//! [sitemap]
//! base_url = "https://example.com"
//! output = "public/sitemap.xml"
//!
//! [[url]]
//! loc = "/about"
//! priority = 0.8
//! lastmod = "2025-01-22"
//! changefreq = "daily"
//! ```

mod error;
mod util;

pub use error::ConfigError;
use util::find_config_file;

use crate::{
    cli::RenderArgs,
    log,
    sitemap::{UrlEntry, UrlSet},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Sitemap output settings
    pub sitemap: SitemapSection,

    /// Urls in sitemap order
    #[serde(rename = "url")]
    pub urls: Vec<UrlConfig>,
}

/// `[sitemap]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    /// Prefix for relative locations. Empty disables prefixing.
    pub base_url: String,
    /// Output path for sitemap file (relative to the config file).
    pub output: PathBuf,
    /// Write the sitemap on a single line.
    pub minify: bool,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            output: "sitemap.xml".into(),
            minify: false,
        }
    }
}

/// `[[url]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlConfig {
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
}

impl From<UrlConfig> for UrlEntry {
    fn from(url: UrlConfig) -> Self {
        Self {
            loc: url.loc,
            priority: url.priority,
            lastmod: url.lastmod,
            changefreq: url.changefreq,
        }
    }
}

impl SitemapConfig {
    /// Locate and load the config file, searching upward from cwd.
    ///
    /// The root is the directory holding the config file.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(&cwd, config_name) else {
            bail!(
                "Config file '{}' not found in {} or any parent directory",
                config_name.display(),
                cwd.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        crate::debug!("config"; "loaded {} ({} urls)", config_path.display(), config.urls.len());
        Ok(config)
    }

    /// Read and parse a config file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI overrides on top of the file values.
    pub fn apply_args(&mut self, args: &RenderArgs) {
        if let Some(base_url) = &args.base_url {
            self.sitemap.base_url = base_url.clone();
        }
        if let Some(minify) = args.minify {
            self.sitemap.minify = minify;
        }
    }

    /// Sitemap output path, resolved against the config root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.sitemap.output)
    }

    /// Build the url collection described by this config.
    pub fn url_set(&self) -> UrlSet {
        let mut urls = UrlSet::new();
        urls.set_base_url(&self.sitemap.base_url);
        urls.extend(self.urls.iter().cloned().map(UrlEntry::from));
        urls
    }
}
