//! Docsite - the configuration contract of a static documentation site.
//!
//! A [`SiteConfig`] is loaded once per build from `docsite.toml` (or
//! `docsite.json`), validated, and handed read-only to the generator.
//!
//! ```no_run
//! use docsite::SiteConfig;
//!
//! let config = SiteConfig::load("docsite.toml")?;
//! for item in &config.nav_items {
//!     println!("{} -> {}", item.text, config.url_for(&item.link));
//! }
//! # Ok::<(), docsite::ConfigError>(())
//! ```

pub mod config;
pub mod logger;
pub mod utils;

pub use config::{
    BasePath, ConfigError, DocumentFormat, LoadOptions, Loaded, NavItem, SidebarGroup,
    SidebarItem, SiteConfig, SocialIcon, SocialLink,
};
