//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find a config file by searching upward from `start`.
///
/// At each directory level every name in `names` is tried in order, so
/// `docsite.toml` wins over `docsite.json` in the same directory while a
/// nearer `docsite.json` wins over a `docsite.toml` further up.
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← start
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(start: &Path, names: &[&Path]) -> Option<PathBuf> {
    // Absolute names are taken as-is
    if let Some(abs) = names.iter().find(|n| n.is_absolute() && n.exists()) {
        return Some(abs.to_path_buf());
    }

    let mut current = start;
    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
