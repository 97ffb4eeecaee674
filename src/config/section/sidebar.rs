//! `sidebarGroups` - the side navigation panel.
//!
//! # Example
//!
//! ```toml
//! [[sidebarGroups]]
//! text = "API"
//! items = [
//!     { text = "API文档", link = "/api" },
//! ]
//! ```
//!
//! Internal item links must resolve to a document under the docs root
//! (see [`DocIndex`]); external links are kept as-is and never checked.

use super::link::{LinkKind, check_link, require_text};
use super::BasePath;
use crate::config::docs::DocIndex;
use crate::config::raw::{RawLink, RawSidebarGroup};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Serialize;

/// A labeled, ordered collection of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<SidebarItem>,
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn kind(&self) -> LinkKind {
        LinkKind::of(&self.link)
    }

    fn from_raw(
        raw: RawLink,
        base: &BasePath,
        docs: Option<&DocIndex>,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let text = require_text(raw.text, field.key("text"), diag);
        let link_field = field.key("link");
        let Some(link) = raw.link else {
            diag.error(link_field, "is required");
            return Self {
                text,
                link: String::new(),
            };
        };

        let kind = check_link(&link, base, &link_field, diag);
        if let (Some(LinkKind::Internal), Some(docs)) = (kind, docs)
            && docs.resolve(&link).is_none()
        {
            diag.error_with_hint(
                link_field,
                format!("link \"{link}\" does not resolve to a document"),
                format!(
                    "create one of: {}",
                    docs.describe_candidates(&link).join(", ")
                ),
            );
        }

        Self { text, link }
    }
}

/// Convert every raw sidebar group, keeping group and item order.
pub(crate) fn sidebar_from_raw(
    raw: Vec<RawSidebarGroup>,
    base: &BasePath,
    docs: Option<&DocIndex>,
    diag: &mut ConfigDiagnostics,
) -> Vec<SidebarGroup> {
    let field = FieldPath::new("sidebarGroups");
    raw.into_iter()
        .enumerate()
        .map(|(i, group)| {
            let group_field = field.index(i);
            let text = require_text(group.text, group_field.key("text"), diag);
            let items_field = group_field.key("items");
            let items = group
                .items
                .into_iter()
                .enumerate()
                .map(|(j, item)| {
                    SidebarItem::from_raw(item, base, docs, &items_field.index(j), diag)
                })
                .collect();
            SidebarGroup { text, items }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn raw_item(text: &str, link: &str) -> RawLink {
        RawLink {
            text: Some(text.into()),
            link: Some(link.into()),
        }
    }

    fn raw_group(text: &str, items: Vec<RawLink>) -> RawSidebarGroup {
        RawSidebarGroup {
            text: Some(text.into()),
            items,
        }
    }

    #[test]
    fn test_group_and_item_order() {
        let mut diag = ConfigDiagnostics::new();
        let groups = sidebar_from_raw(
            vec![
                raw_group("Second", vec![raw_item("z", "/z"), raw_item("y", "/y")]),
                raw_group("First", vec![raw_item("x", "/x")]),
            ],
            &BasePath::default(),
            None,
            &mut diag,
        );
        assert!(diag.is_empty());
        assert_eq!(groups[0].text, "Second");
        assert_eq!(groups[0].items[0], SidebarItem::new("z", "/z"));
        assert_eq!(groups[0].items[1], SidebarItem::new("y", "/y"));
        assert_eq!(groups[1].text, "First");
    }

    #[test]
    fn test_dangling_link_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("api.md"), "# API").unwrap();
        let docs = DocIndex::new(dir.path());

        let mut diag = ConfigDiagnostics::new();
        sidebar_from_raw(
            vec![raw_group(
                "API",
                vec![raw_item("API文档", "/api"), raw_item("Missing", "/missing")],
            )],
            &BasePath::parse("/commSys/").unwrap(),
            Some(&docs),
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("sidebarGroups[0].items[1].link"));
    }

    #[test]
    fn test_external_links_are_not_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let docs = DocIndex::new(dir.path());

        let mut diag = ConfigDiagnostics::new();
        sidebar_from_raw(
            vec![raw_group("Links", vec![raw_item("RFC", "https://example.com/rfc")])],
            &BasePath::default(),
            Some(&docs),
            &mut diag,
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn test_missing_group_text() {
        let mut diag = ConfigDiagnostics::new();
        sidebar_from_raw(
            vec![RawSidebarGroup {
                text: None,
                items: Vec::new(),
            }],
            &BasePath::default(),
            None,
            &mut diag,
        );
        assert!(diag.has_error_at("sidebarGroups[0].text"));
    }
}
