//! `docsite show` - print the loaded record as JSON.

use anyhow::Result;
use docsite::SiteConfig;

use super::Cli;

pub fn run(cli: &Cli, pretty: bool) -> Result<()> {
    let loaded = super::load_config(cli)?;
    println!("{}", render(&loaded.config, pretty)?);
    Ok(())
}

/// Serialize the record with the same keys the document uses.
pub fn render(config: &SiteConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
