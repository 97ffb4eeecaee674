//! `docsite init` - write a starter config.
//!
//! Creates `docsite.toml` (or `docsite.json`) and, if absent, the `index.md`
//! its sidebar points at, so a fresh site passes `docsite check`.

use anyhow::{Context, Result, bail};
use docsite::{DocumentFormat, log};
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Page the starter sidebar links to.
const INDEX_PAGE: &str = "index.md";

pub fn run(dir: Option<&Path>, format: DocumentFormat, title: Option<&str>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = dir.map_or_else(|| cwd.clone(), |d| cwd.join(d));
    let title = title.map_or_else(|| default_title(&root), str::to_owned);

    let path = write_config(&root, format, &title, force)?;
    log!("init"; "wrote {}", path.display());
    if write_index(&root, &title)? {
        log!("init"; "wrote {}", root.join(INDEX_PAGE).display());
    }
    Ok(())
}

/// Site directory name, or a generic title.
fn default_title(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "My Docs".to_owned())
}

/// Generate config content for `format`.
pub fn generate_config_template(format: DocumentFormat, title: &str) -> Result<String> {
    let content = match format {
        DocumentFormat::Toml => toml_template(title),
        DocumentFormat::Json => {
            let value = json!({
                "title": title,
                "description": "",
                "basePath": "/",
                "navItems": [{ "text": "Home", "link": "/" }],
                "sidebarGroups": [{
                    "text": "Guide",
                    "items": [{ "text": "Introduction", "link": "/" }]
                }],
                "socialLinks": []
            });
            let mut out = serde_json::to_string_pretty(&value)?;
            out.push('\n');
            out
        }
    };
    Ok(content)
}

fn toml_template(title: &str) -> String {
    let title = toml::Value::String(title.to_owned());
    format!(
        r#"# Docsite configuration file (v{version})

# Site title shown in the navigation bar and browser tab.
title = {title}

# Description used for page metadata.
description = ""

# URL prefix for every route and asset. Must start and end with `/`,
# e.g. "/my-project/" when served from a subdirectory.
basePath = "/"

# Navigation bar, in display order. Links are relative to basePath.
[[navItems]]
text = "Home"
link = "/"

# Sidebar groups, in display order. Internal links must point to a
# document: "/guide" -> guide.md or guide/index.md, "/" -> index.md.
[[sidebarGroups]]
text = "Guide"
items = [
    {{ text = "Introduction", link = "/" }},
]

# Social links. icon is one of: discord, facebook, github, instagram,
# linkedin, mastodon, npm, slack, twitter, x, youtube.
# [[socialLinks]]
# icon = "github"
# link = "https://github.com/owner/repo"
"#,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Write the config file into `root`, creating the directory if needed.
pub fn write_config(root: &Path, format: DocumentFormat, title: &str, force: bool) -> Result<PathBuf> {
    let path = root.join(format!("docsite.{}", format.extension()));
    if path.exists() && !force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    let content = generate_config_template(format, title)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

/// Write `index.md` unless one exists. Returns whether a file was written.
fn write_index(root: &Path, title: &str) -> Result<bool> {
    let path = root.join(INDEX_PAGE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, format!("# {title}\n"))
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite::SiteConfig;

    #[test]
    fn test_templates_are_valid_configs() {
        for format in [DocumentFormat::Toml, DocumentFormat::Json] {
            let content = generate_config_template(format, "Starter").unwrap();
            let config = SiteConfig::parse(&content, format).unwrap();
            assert_eq!(config.title, "Starter");
            assert!(config.base_path.is_root());
        }
    }

    #[test]
    fn test_toml_and_json_templates_agree() {
        let toml = generate_config_template(DocumentFormat::Toml, "Same").unwrap();
        let json = generate_config_template(DocumentFormat::Json, "Same").unwrap();
        assert_eq!(
            SiteConfig::parse(&toml, DocumentFormat::Toml).unwrap(),
            SiteConfig::parse(&json, DocumentFormat::Json).unwrap()
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let content = generate_config_template(DocumentFormat::Toml, "say \"hi\"").unwrap();
        let config = SiteConfig::parse(&content, DocumentFormat::Toml).unwrap();
        assert_eq!(config.title, "say \"hi\"");
    }

    #[test]
    fn test_initialized_site_loads() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        let path = write_config(&root, DocumentFormat::Toml, "Site", false).unwrap();
        assert!(write_index(&root, "Site").unwrap());

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.sidebar_groups[0].items[0].link, "/");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), DocumentFormat::Json, "A", false).unwrap();
        assert!(write_config(dir.path(), DocumentFormat::Json, "B", false).is_err());
        assert!(write_config(dir.path(), DocumentFormat::Json, "B", true).is_ok());
    }

    #[test]
    fn test_existing_index_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_PAGE), "mine").unwrap();
        assert!(!write_index(dir.path(), "Site").unwrap());
        assert_eq!(fs::read_to_string(dir.path().join(INDEX_PAGE)).unwrap(), "mine");
    }
}
