//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Location of a value inside the config document.
///
/// Paths are built up while walking the document so a diagnostic can point
/// at the exact entry that failed, including sequence indices.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("sidebarGroups").index(0).key("items").index(2).key("link");
/// assert_eq!(path.as_str(), "sidebarGroups[0].items[2].link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: &str) -> Self {
        Self(root.to_owned())
    }

    /// Descend into a named key.
    #[must_use]
    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self::new(name)
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Descend into a sequence element.
    #[must_use]
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
