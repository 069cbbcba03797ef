//! sitemapper - build `sitemap.xml` files (sitemaps.org protocol 0.9).
//!
//! The core is [`UrlSet`] (url collection with base url prefixing) and
//! [`Sitemap`] (XML rendering and persistence). [`config`] and [`cli`] wire
//! them to `sitemap.toml` and the `sitemapper` binary.

pub mod cli;
pub mod config;
pub mod logger;
pub mod sitemap;

pub use sitemap::{FsStorage, Sitemap, SitemapError, Storage, UrlEntry, UrlSet};
