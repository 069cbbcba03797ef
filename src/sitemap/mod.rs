//! Sitemap url collection and rendering.
//!
//! - [`UrlSet`]: ordered, append-only list of [`UrlEntry`] with base url prefixing
//! - [`Sitemap`]: renders a `UrlSet` into `sitemap.xml` and persists it
//! - [`Storage`]: "write bytes to a named target" collaborator used by `persist`
//!
//! # Example
//!
//! ```
//! use sitemapper::{Sitemap, UrlSet};
//!
//! let mut urls = UrlSet::new();
//! urls.set_base_url("https://example.com/");
//! urls.add_url("/about", Some(0.8), Some("2025-01-22"), Some("daily"));
//!
//! let xml = Sitemap::new(&urls).render();
//! assert!(xml.contains("<loc>https://example.com/about</loc>"));
//! ```

mod storage;
mod xml;

pub use storage::{FsStorage, Storage};
pub use xml::{SITEMAP_NS, Sitemap, XHTML_NS};

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by sitemap persistence.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Failed to write sitemap to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// UrlEntry
// ============================================================================

/// A single `<url>` record.
///
/// `lastmod` and `changefreq` are kept verbatim, nothing is parsed or checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UrlEntry {
    pub loc: String,
    pub priority: Option<f64>,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
}

impl UrlEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }
}

// ============================================================================
// UrlSet
// ============================================================================

/// Ordered collection of sitemap entries.
///
/// Locations are resolved against the base url when inserted, so changing the
/// base url later only affects entries added after the change.
#[derive(Debug, Clone, Default)]
pub struct UrlSet {
    base_url: String,
    entries: Vec<UrlEntry>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix for subsequently added locations.
    ///
    /// All trailing slashes are stripped. An empty string disables prefixing.
    pub fn set_base_url(&mut self, base: &str) {
        self.base_url = base.trim_end_matches('/').to_string();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append a url with optional metadata.
    pub fn add_url(
        &mut self,
        loc: &str,
        priority: Option<f64>,
        lastmod: Option<&str>,
        changefreq: Option<&str>,
    ) {
        self.push(UrlEntry {
            loc: loc.to_string(),
            priority,
            lastmod: lastmod.map(str::to_string),
            changefreq: changefreq.map(str::to_string),
        });
    }

    /// Append a prepared entry, resolving its location against the base url.
    pub fn push(&mut self, mut entry: UrlEntry) {
        entry.loc = self.resolve(&entry.loc);
        self.entries.push(entry);
    }

    /// Join `loc` onto the base url with exactly one `/` between them.
    fn resolve(&self, loc: &str) -> String {
        if self.base_url.is_empty() {
            return loc.to_string();
        }
        format!("{}/{}", self.base_url, loc.trim_start_matches('/'))
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<UrlEntry> for UrlSet {
    fn extend<I: IntoIterator<Item = UrlEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}
