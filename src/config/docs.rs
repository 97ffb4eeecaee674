//! Mapping sidebar links to documents under the docs root.
//!
//! | Link          | Candidates (first existing wins)       |
//! |---------------|----------------------------------------|
//! | `/`           | `index.md`                             |
//! | `/api`        | `api.md`, `api/index.md`               |
//! | `/guide/`     | `guide/index.md`                       |
//! | `/api.html`   | `api.md`, `api/index.md`               |
//! | `/api#auth`   | `api.md`, `api/index.md`               |
//! | `/my%20page`  | `my page.md`, `my page/index.md`       |

use crate::utils::link::path_only;
use percent_encoding::percent_decode_str;
use std::path::PathBuf;

/// Markdown extension of source documents.
const DOC_EXT: &str = "md";

#[derive(Debug, Clone)]
pub struct DocIndex {
    root: PathBuf,
}

impl DocIndex {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root-relative document paths a link may resolve to, in lookup order.
    ///
    /// The path is percent-decoded first; returns nothing for links that do
    /// not decode to UTF-8 or that climb out of the docs root.
    pub fn candidates(link: &str) -> Vec<PathBuf> {
        let Ok(decoded) = percent_decode_str(path_only(link)).decode_utf8() else {
            return Vec::new();
        };
        let path = decoded
            .strip_suffix(".html")
            .or_else(|| decoded.strip_suffix(".md"))
            .unwrap_or(&decoded)
            .trim_start_matches('/');

        if path.split('/').any(|segment| segment == "..") {
            return Vec::new();
        }

        if path.is_empty() || path.ends_with('/') {
            return vec![PathBuf::from(format!("{path}index.{DOC_EXT}"))];
        }

        vec![
            PathBuf::from(format!("{path}.{DOC_EXT}")),
            PathBuf::from(format!("{path}/index.{DOC_EXT}")),
        ]
    }

    /// First existing document for `link`, as an absolute path under the root.
    pub fn resolve(&self, link: &str) -> Option<PathBuf> {
        Self::candidates(link)
            .into_iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.is_file())
    }

    /// Candidates rendered for a diagnostic hint.
    pub fn describe_candidates(&self, link: &str) -> Vec<String> {
        let candidates = Self::candidates(link);
        if candidates.is_empty() {
            return vec![format!("a document inside {}", self.root.display())];
        }
        candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect()
    }
}
