//! Link rules shared by nav items, sidebar items and social links.

use super::BasePath;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::link::is_external_link;
use url::Url;

/// How a link is resolved by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Carries a scheme; emitted unchanged.
    External,
    /// Site route; prefixed with `basePath` at generation time.
    Internal,
}

impl LinkKind {
    pub fn of(link: &str) -> Self {
        if is_external_link(link) {
            Self::External
        } else {
            Self::Internal
        }
    }
}

/// Check that `link` is a valid relative or absolute URL.
///
/// Returns the link kind when valid; records an error and returns `None`
/// otherwise.
pub(crate) fn check_link(
    link: &str,
    base: &BasePath,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<LinkKind> {
    if link.is_empty() {
        diag.error(field.clone(), "link must not be empty");
        return None;
    }
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        diag.error_with_hint(
            field.clone(),
            format!("link \"{link}\" contains whitespace"),
            "percent-encode spaces as %20",
        );
        return None;
    }

    match LinkKind::of(link) {
        LinkKind::External => check_absolute(link, field, diag).then_some(LinkKind::External),
        LinkKind::Internal => {
            let resolved = base.to_url().and_then(|base_url| base_url.join(link));
            match resolved {
                Ok(_) => Some(LinkKind::Internal),
                Err(e) => {
                    diag.error(field.clone(), format!("invalid link \"{link}\": {e}"));
                    None
                }
            }
        }
    }
}

/// Check an absolute URL; `http`/`https` URLs must carry a host.
fn check_absolute(link: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    match Url::parse(link) {
        Ok(parsed) => {
            if matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_none_or(str::is_empty)
            {
                diag.error_with_hint(
                    field.clone(),
                    format!("URL \"{link}\" has no host"),
                    "use format like https://example.com",
                );
                return false;
            }
            true
        }
        Err(e) => {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL \"{link}\": {e}"),
                "use format like https://example.com",
            );
            false
        }
    }
}

/// Check a link that must point to an external web page.
pub(crate) fn check_web_url(link: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    if link.is_empty() {
        diag.error(field.clone(), "link must not be empty");
        return false;
    }
    match Url::parse(link) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
            diag.error_with_hint(
                field.clone(),
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://github.com/owner/repo",
            );
            false
        }
        Ok(_) => check_absolute(link, field, diag),
        Err(e) => {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL \"{link}\": {e}"),
                "use format like https://github.com/owner/repo",
            );
            false
        }
    }
}

/// Fetch a required, non-empty string field, recording an error if absent.
pub(crate) fn require_text(
    value: Option<String>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        Some(_) => {
            diag.error(field, "must not be empty");
            String::new()
        }
        None => {
            diag.error(field, "is required");
            String::new()
        }
    }
}
