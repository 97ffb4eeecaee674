//! `navItems` - the top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[navItems]]
//! text = "首页"
//! link = "/"
//!
//! [[navItems]]
//! text = "GitHub"
//! link = "https://github.com/owner/repo"
//! ```

use super::link::{LinkKind, check_link, require_text};
use super::BasePath;
use crate::config::raw::RawLink;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Serialize;

/// A labeled link in the navigation bar. Order in the document is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Label shown in the bar.
    pub text: String,
    /// Target, stored as authored; internal links get `basePath` at generation time.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn kind(&self) -> LinkKind {
        LinkKind::of(&self.link)
    }

    pub(crate) fn from_raw(
        raw: RawLink,
        base: &BasePath,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let text = require_text(raw.text, field.key("text"), diag);
        let link_field = field.key("link");
        let link = match raw.link {
            Some(link) => {
                check_link(&link, base, &link_field, diag);
                link
            }
            None => {
                diag.error(link_field, "is required");
                String::new()
            }
        };
        Self { text, link }
    }
}

/// Convert every raw nav entry, keeping document order.
pub(crate) fn nav_from_raw(
    raw: Vec<RawLink>,
    base: &BasePath,
    diag: &mut ConfigDiagnostics,
) -> Vec<NavItem> {
    let field = FieldPath::new("navItems");
    raw.into_iter()
        .enumerate()
        .map(|(i, item)| NavItem::from_raw(item, base, &field.index(i), diag))
        .collect()
}
