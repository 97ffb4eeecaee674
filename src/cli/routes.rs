//! `docsite routes` - list every entry with the URL the generator emits.

use anyhow::Result;
use docsite::utils::plural_count;
use docsite::{SiteConfig, log};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::fmt;

use super::Cli;

/// Which widget an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Nav,
    Sidebar,
    Social,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Nav => "nav",
            Self::Sidebar => "sidebar",
            Self::Social => "social",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub section: Section,
    pub label: String,
    /// Link as authored.
    pub link: String,
    /// Link after `basePath` resolution.
    pub url: String,
}

pub fn run(cli: &Cli) -> Result<()> {
    let loaded = super::load_config(cli)?;
    let entries = collect(&loaded.config);

    let width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &entries {
        let pad = width - entry.label.chars().count();
        println!(
            "{:<7}  {}{}  {} {} {}",
            entry.section.if_supports_color(Stdout, |s| s.dimmed()),
            entry.label,
            " ".repeat(pad),
            entry.link,
            "→".if_supports_color(Stdout, |s| s.dimmed()),
            entry.url.if_supports_color(Stdout, |s| s.cyan())
        );
    }

    log!("routes"; "{} under {}", plural_count(entries.len(), "link"), loaded.config.base_path);
    Ok(())
}

/// Flatten the config into display order: nav, then sidebar, then social.
pub fn collect(config: &SiteConfig) -> Vec<RouteEntry> {
    let nav = config.nav_items.iter().map(|item| RouteEntry {
        section: Section::Nav,
        label: item.text.clone(),
        link: item.link.clone(),
        url: config.url_for(&item.link),
    });

    let sidebar = config.sidebar_groups.iter().flat_map(|group| {
        group.items.iter().map(move |item| RouteEntry {
            section: Section::Sidebar,
            label: format!("{} / {}", group.text, item.text),
            link: item.link.clone(),
            url: config.url_for(&item.link),
        })
    });

    let social = config.social_links.iter().map(|social| RouteEntry {
        section: Section::Social,
        label: social.icon.to_string(),
        link: social.link.clone(),
        url: social.link.clone(),
    });

    nav.chain(sidebar).chain(social).collect()
}
