//! Small helpers shared by the config loader and the CLI.

pub mod link;
mod plural;

pub use plural::{plural_count, plural_s};
