//! Sitemap XML rendering.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use super::{FsStorage, SitemapError, Storage, UrlEntry, UrlSet};
use std::borrow::Cow;
use std::path::Path;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// Declared on `<urlset>` for alternate-language links; no `xhtml:link` is emitted yet.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Renders a [`UrlSet`] snapshot into sitemap XML.
#[derive(Debug, Clone, Copy)]
pub struct Sitemap<'a> {
    urls: &'a UrlSet,
    minify: bool,
}

impl<'a> Sitemap<'a> {
    pub fn new(urls: &'a UrlSet) -> Self {
        Self { urls, minify: false }
    }

    /// Collapse the document onto a single line.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    /// Render the whole document. Every call re-reads the current entries.
    pub fn render(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 128);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls.entries() {
            push_entry(&mut xml, entry);
        }

        xml.push_str("</urlset>\n");

        if self.minify {
            xml = minify_xml(&xml);
        }
        xml
    }

    /// Render and write to `path` on the local filesystem, replacing any existing file.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<(), SitemapError> {
        self.persist_with(&FsStorage, path)
    }

    /// Render and hand the bytes to `storage`.
    pub fn persist_with<S: Storage + ?Sized>(
        &self,
        storage: &S,
        path: impl AsRef<Path>,
    ) -> Result<(), SitemapError> {
        let path = path.as_ref();
        storage
            .write(path, self.render().as_bytes())
            .map_err(|source| SitemapError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn push_entry(xml: &mut String, entry: &UrlEntry) {
    xml.push_str("  <url>\n    <loc>");
    xml.push_str(&escape_xml(&entry.loc));
    xml.push_str("</loc>\n");
    if let Some(lastmod) = non_empty(entry.lastmod.as_deref()) {
        push_element(xml, "lastmod", &escape_xml(lastmod));
    }
    if let Some(changefreq) = non_empty(entry.changefreq.as_deref()) {
        push_element(xml, "changefreq", &escape_xml(changefreq));
    }
    // 0.0 counts as "no priority": the element is dropped rather than written as 0.0
    if let Some(priority) = entry.priority.filter(|p| *p != 0.0) {
        push_element(xml, "priority", &format_priority(priority));
    }
    xml.push_str("  </url>\n");
}

fn push_element(xml: &mut String, name: &str, text: &str) {
    xml.push_str("    <");
    xml.push_str(name);
    xml.push('>');
    xml.push_str(text);
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One decimal digit, halves rounded away from zero (`0.25` -> `0.3`).
fn format_priority(priority: f64) -> String {
    // Past 2^52 every f64 is an integer, and scaling by 10 could overflow to inf
    let rounded = if priority.abs() >= 2f64.powi(52) {
        priority
    } else {
        (priority * 10.0).round() / 10.0
    };
    format!("{rounded:.1}")
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Trim every line and join them, dropping blank lines.
fn minify_xml(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
