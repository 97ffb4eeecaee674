//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod routes;
pub mod show;

pub use args::{Cli, Commands};

use anyhow::{Context, Result, anyhow};
use docsite::config::CONFIG_FILES;
use docsite::{LoadOptions, Loaded, SiteConfig, log};
use std::path::{Path, PathBuf};

/// Resolve the config file: `--config` relative to cwd, else search upward.
pub fn locate_config(cli: &Cli, cwd: &Path) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(cwd.join(path)),
        None => SiteConfig::discover(cwd).ok_or_else(|| {
            anyhow!(
                "no {} found in '{}' or any parent directory. Run 'docsite init' to create one.",
                CONFIG_FILES.join(" or "),
                cwd.display()
            )
        }),
    }
}

/// Load options derived from the global flags.
pub fn load_options(cli: &Cli, cwd: &Path) -> LoadOptions {
    let mut options = LoadOptions::default();
    if let Some(docs) = &cli.docs {
        options = options.with_docs_root(cwd.join(docs));
    }
    if cli.no_doc_check {
        options = options.skip_document_check();
    }
    options
}

/// Locate and load the config, logging unknown fields.
pub fn load_config(cli: &Cli) -> Result<Loaded> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = locate_config(cli, &cwd)?;
    let loaded = SiteConfig::load_with(&path, &load_options(cli, &cwd))?;

    if !loaded.warnings.is_empty() {
        log!("warning"; "unknown fields in {}:", path.display());
        for (field, _) in &loaded.warnings {
            eprintln!("- {field}");
        }
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_explicit_config_is_joined_to_cwd() {
        let cli = Cli::parse_from(["docsite", "check", "-C", "site/docsite.toml"]);
        let path = locate_config(&cli, Path::new("/work")).unwrap();
        assert_eq!(path, PathBuf::from("/work/site/docsite.toml"));
    }

    #[test]
    fn test_discovered_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docsite.toml"), "").unwrap();
        let nested = dir.path().join("guide");
        fs::create_dir(&nested).unwrap();

        let cli = Cli::parse_from(["docsite", "check"]);
        let path = locate_config(&cli, &nested).unwrap();
        assert_eq!(path, dir.path().join("docsite.toml"));
    }

    #[test]
    fn test_load_options_from_flags() {
        let cli = Cli::parse_from(["docsite", "routes", "--docs", "src", "--no-doc-check"]);
        let options = load_options(&cli, Path::new("/work"));
        assert_eq!(options.docs_root, Some(PathBuf::from("/work/src")));
        assert!(!options.check_documents);
    }
}
