//! `docsite check` - load, validate and summarize.

use anyhow::Result;
use docsite::utils::plural_count;
use docsite::{SiteConfig, debug, log};

use super::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let loaded = super::load_config(cli)?;

    log!("check"; "{} is valid", loaded.path.display());
    log!("check"; "{}", summary(&loaded.config));

    match &loaded.docs_root {
        Some(root) => debug!("check"; "sidebar documents resolved under {}", root.display()),
        None => log!("hint"; "sidebar document check skipped"),
    }
    Ok(())
}

/// One-line overview of what the generator will render.
pub fn summary(config: &SiteConfig) -> String {
    format!(
        "\"{}\" at {}: {}, {} in {}, {}",
        config.title,
        config.base_path,
        plural_count(config.nav_items.len(), "nav item"),
        plural_count(config.sidebar_items().count(), "sidebar link"),
        plural_count(config.sidebar_groups.len(), "group"),
        plural_count(config.social_links.len(), "social link"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite::DocumentFormat;

    #[test]
    fn test_summary() {
        let config = SiteConfig::parse(
            r#"title = "Docs"
basePath = "/docs/"

[[navItems]]
text = "Home"
link = "/"

[[sidebarGroups]]
text = "Guide"
items = [{ text = "A", link = "/a" }, { text = "B", link = "/b" }]
"#,
            DocumentFormat::Toml,
        )
        .unwrap();

        assert_eq!(
            summary(&config),
            "\"Docs\" at /docs/: 1 nav item, 2 sidebar links in 1 group, 0 social links"
        );
    }
}
