//! The document as written, before validation.
//!
//! Every field is optional here so that a missing key surfaces as a
//! validation diagnostic with its field path instead of a parse error.
//! Type mismatches (e.g. `title = 1`) still fail at parse time.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSiteConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "base")]
    pub base_path: Option<String>,
    #[serde(default, alias = "nav")]
    pub nav_items: Vec<RawLink>,
    #[serde(default, alias = "sidebar")]
    pub sidebar_groups: Vec<RawSidebarGroup>,
    #[serde(default)]
    pub social_links: Vec<RawSocialLink>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawLink {
    pub text: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSidebarGroup {
    pub text: Option<String>,
    #[serde(default)]
    pub items: Vec<RawLink>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSocialLink {
    pub icon: Option<String>,
    pub link: Option<String>,
}
