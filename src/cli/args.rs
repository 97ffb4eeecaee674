//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use docsite::DocumentFormat;
use std::path::PathBuf;

/// Docsite configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for docsite.toml / docsite.json)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory sidebar links resolve against (default: the config file's directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub docs: Option<PathBuf>,

    /// Skip checking that sidebar links resolve to documents
    #[arg(long, global = true)]
    pub no_doc_check: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, reporting every problem
    #[command(visible_alias = "c")]
    Check,

    /// Print the loaded config as JSON
    #[command(visible_alias = "s")]
    Show {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List nav, sidebar and social entries with the URLs the generator emits
    #[command(visible_alias = "r")]
    Routes,

    /// Write a starter config (and index page) into a directory
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Config document format
        #[arg(short, long, value_enum, default_value_t = TemplateFormat::Toml)]
        format: TemplateFormat,

        /// Site title written into the template
        #[arg(short, long)]
        title: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Format of the config written by `init`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Toml,
    Json,
}

impl From<TemplateFormat> for DocumentFormat {
    fn from(format: TemplateFormat) -> Self {
        match format {
            TemplateFormat::Toml => Self::Toml,
            TemplateFormat::Json => Self::Json,
        }
    }
}
