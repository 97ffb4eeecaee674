//! `basePath` - the URL prefix every route and asset is served under.
//!
//! # Example
//!
//! ```toml
//! basePath = "/commSys/"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::link::is_external_link;
use serde::Serialize;
use std::fmt;
use url::{Position, Url};

/// Origin the base path is mounted on when resolving URL references.
const LOCAL_ORIGIN: &str = "http://localhost";

/// A validated base path: starts and ends with `/`.
///
/// `"/"` is the root deployment; `"/docs/"` serves the site under `/docs/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl Default for BasePath {
    fn default() -> Self {
        Self("/".into())
    }
}

impl BasePath {
    /// Parse a base path, returning a human-readable reason on failure.
    pub fn parse(value: &str) -> Result<Self, &'static str> {
        if value.is_empty() {
            return Err("must not be empty");
        }
        if is_external_link(value) {
            return Err("must be a path, not a full URL");
        }
        if !value.starts_with('/') {
            return Err("must start with `/`");
        }
        if !value.ends_with('/') {
            return Err("must end with `/`");
        }
        if value.starts_with("//") {
            return Err("must not start with `//` (protocol-relative URL)");
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("must not contain whitespace");
        }
        if value.contains(['?', '#']) {
            return Err("must not contain a query or fragment");
        }
        Ok(Self(value.to_owned()))
    }

    /// Parse and record any failure under `field`.
    pub(crate) fn from_raw(
        value: Option<String>,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let Some(value) = value else {
            diag.error_with_hint(field, "is required", "set it, e.g. basePath = \"/\"");
            return Self::default();
        };

        match Self::parse(&value) {
            Ok(base) => base,
            Err(reason) => {
                diag.error_with_hint(
                    field,
                    format!("invalid base path \"{value}\": {reason}"),
                    format!("use a path like \"/{}/\"", value.trim_matches('/')),
                );
                Self::default()
            }
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the root deployment (`/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// This base mounted on a local origin.
    pub(crate) fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(LOCAL_ORIGIN)?.join(&self.0)
    }

    /// Prefix an internal link with this base.
    ///
    /// A leading `/` is relative to the base, not the host. Dot segments are
    /// resolved the way a browser would, so `../` may step out of the base.
    ///
    /// ```
    /// use docsite::config::BasePath;
    /// let base = BasePath::parse("/commSys/").unwrap();
    /// assert_eq!(base.join("/api"), "/commSys/api");
    /// assert_eq!(base.join("/"), "/commSys/");
    /// assert_eq!(base.join("./guide/../api#auth"), "/commSys/api#auth");
    /// ```
    pub fn join(&self, link: &str) -> String {
        let relative = link.trim_start_matches('/');
        match self.to_url().and_then(|base| base.join(relative)) {
            Ok(url) => url[Position::BeforePath..].to_owned(),
            Err(_) => format!("{}{}", self.0, relative),
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
