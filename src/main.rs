//! Docsite - check and inspect a documentation site's configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    docsite::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::run(&cli),
        Commands::Show { pretty } => cli::show::run(&cli, *pretty),
        Commands::Routes => cli::routes::run(&cli),
        Commands::Init {
            dir,
            format,
            title,
            force,
        } => cli::init::run(dir.as_deref(), (*format).into(), title.as_deref(), *force),
    }
}
