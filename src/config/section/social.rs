//! `socialLinks` - icon-and-URL pairs rendered in the social widget.
//!
//! # Example
//!
//! ```toml
//! [[socialLinks]]
//! icon = "github"
//! link = "https://github.com/owner/repo"
//! ```

use super::link::check_web_url;
use crate::config::raw::RawSocialLink;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Recognized social icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }

    fn vocabulary() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl FromStr for SocialIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| format!("unknown icon \"{s}\""))
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link to an external profile or repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }
}

/// Convert raw social links. Entries with an unknown icon are reported and dropped.
pub(crate) fn social_from_raw(
    raw: Vec<RawSocialLink>,
    diag: &mut ConfigDiagnostics,
) -> Vec<SocialLink> {
    let field = FieldPath::new("socialLinks");
    raw.into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let entry_field = field.index(i);
            let link_field = entry_field.key("link");
            match &entry.link {
                Some(link) => {
                    check_web_url(link, &link_field, diag);
                }
                None => diag.error(link_field, "is required"),
            }

            let icon_field = entry_field.key("icon");
            let icon = match entry.icon.as_deref().map(SocialIcon::from_str) {
                Some(Ok(icon)) => icon,
                Some(Err(message)) => {
                    diag.error_with_hint(
                        icon_field,
                        message,
                        format!("use one of: {}", SocialIcon::vocabulary()),
                    );
                    return None;
                }
                None => {
                    diag.error(icon_field, "is required");
                    return None;
                }
            };

            Some(SocialLink {
                icon,
                link: entry.link.unwrap_or_default(),
            })
        })
        .collect()
}
