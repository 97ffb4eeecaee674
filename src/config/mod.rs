//! Site configuration for `docsite.toml` / `docsite.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Typed sections and their validation
//! │   ├── base       # basePath
//! │   ├── nav        # navItems
//! │   ├── sidebar    # sidebarGroups
//! │   ├── social     # socialLinks
//! │   └── link       # shared link rules
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── docs           # DocIndex (sidebar link → document)
//! ├── format         # DocumentFormat (TOML / JSON)
//! ├── raw            # Document shape before validation
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Document
//!
//! ```toml
//! title = "社团管理后台api文档"
//! description = "API reference"
//! basePath = "/commSys/"
//!
//! [[navItems]]
//! text = "首页"
//! link = "/"
//!
//! [[sidebarGroups]]
//! text = "API"
//! items = [{ text = "API文档", link = "/api" }]
//!
//! [[socialLinks]]
//! icon = "github"
//! link = "https://github.com/owner/repo"
//! ```
//!
//! Loading is all-or-nothing: a document that does not parse yields
//! [`ConfigError::Parse`]; one that parses but breaks a rule yields
//! [`ConfigError::Validation`] listing every offending field path.

pub mod docs;
mod format;
mod raw;
pub mod section;
pub mod types;
mod util;

pub use docs::DocIndex;
pub use format::DocumentFormat;
pub use section::{
    BasePath, LinkKind, NavItem, SidebarGroup, SidebarItem, SocialIcon, SocialLink,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use raw::RawSiteConfig;
use section::{nav_from_raw, sidebar_from_raw, social_from_raw};
use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Config file names searched for, in priority order.
pub const CONFIG_FILES: [&str; 2] = ["docsite.toml", "docsite.json"];

/// Non-fatal findings (unknown keys) collected while loading.
pub type Warnings = Vec<(FieldPath, String)>;

// ============================================================================
// root configuration
// ============================================================================

/// Build-time configuration of a documentation site.
///
/// Constructed once by [`SiteConfig::load`] and read-only afterwards. Links
/// are stored exactly as authored; the consumer prefixes internal ones with
/// [`base_path`](Self::base_path) at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title (non-empty).
    pub title: String,

    /// Free-text description for page metadata.
    pub description: String,

    /// URL prefix for every route and asset.
    pub base_path: BasePath,

    /// Navigation bar entries, in display order.
    pub nav_items: Vec<NavItem>,

    /// Sidebar groups, in display order.
    pub sidebar_groups: Vec<SidebarGroup>,

    /// Social-link icons, in display order.
    pub social_links: Vec<SocialLink>,
}

/// Options for [`SiteConfig::load_with`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory sidebar links resolve against. Defaults to the config file's directory.
    pub docs_root: Option<PathBuf>,

    /// Check that every internal sidebar link resolves to a document.
    pub check_documents: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            docs_root: None,
            check_documents: true,
        }
    }
}

impl LoadOptions {
    pub fn with_docs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.docs_root = Some(root.into());
        self
    }

    pub fn skip_document_check(mut self) -> Self {
        self.check_documents = false;
        self
    }
}

/// A loaded config together with what was learned while loading it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    /// Absolute-or-as-given path of the document.
    pub path: PathBuf,
    pub format: DocumentFormat,
    /// Docs root used for the document check, if it ran.
    pub docs_root: Option<PathBuf>,
    pub warnings: Warnings,
}

impl SiteConfig {
    /// Load and validate the config document at `path`.
    ///
    /// Sidebar links are checked against the documents next to the config
    /// file. Unknown keys are logged as warnings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let loaded = Self::load_with(path, &LoadOptions::default())?;
        for (field, message) in &loaded.warnings {
            log!("warning"; "{field}: {message}");
        }
        Ok(loaded.config)
    }

    /// Load with explicit options, returning warnings instead of logging them.
    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Loaded, ConfigError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(path.to_path_buf(), err),
        })?;

        let docs_root = options
            .check_documents
            .then(|| options.docs_root.clone().unwrap_or_else(|| config_dir(path)));
        debug!("load"; "{} ({}), docs root: {:?}", path.display(), format, docs_root);

        let docs = docs_root.as_ref().map(DocIndex::new);
        let (config, warnings) = Self::from_document(&content, format, docs.as_ref())?;

        Ok(Loaded {
            config,
            path: path.to_path_buf(),
            format,
            docs_root,
            warnings,
        })
    }

    /// Parse and validate an in-memory document.
    ///
    /// There is no docs root here, so sidebar links are not resolved.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        Self::from_document(content, format, None).map(|(config, _)| config)
    }

    /// Search upward from `start` for one of [`CONFIG_FILES`].
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let names = CONFIG_FILES.map(Path::new);
        find_config_file(start, &names)
    }

    fn from_document(
        content: &str,
        format: DocumentFormat,
        docs: Option<&DocIndex>,
    ) -> Result<(Self, Warnings), ConfigError> {
        let (raw, ignored) = format.parse_with_ignored::<RawSiteConfig>(content)?;

        let mut diag = ConfigDiagnostics::new();
        for path in ignored {
            diag.warn(FieldPath::new(&path), "unknown field");
        }

        let config = Self::from_raw(raw, docs, &mut diag);
        let warnings = diag.into_result().map_err(ConfigError::Validation)?;
        Ok((config, warnings))
    }

    /// Validate every section, collecting all problems before deciding.
    ///
    /// The returned value is only meaningful when `diag` holds no errors.
    fn from_raw(raw: RawSiteConfig, docs: Option<&DocIndex>, diag: &mut ConfigDiagnostics) -> Self {
        let title = match raw.title {
            Some(title) if !title.trim().is_empty() => title,
            Some(_) => {
                diag.error(FieldPath::new("title"), "must not be empty");
                String::new()
            }
            None => {
                diag.error_with_hint(
                    FieldPath::new("title"),
                    "is required",
                    "set it, e.g. title = \"My Docs\"",
                );
                String::new()
            }
        };

        let base_path = BasePath::from_raw(raw.base_path, FieldPath::new("basePath"), diag);

        Self {
            title,
            description: raw.description.unwrap_or_default(),
            nav_items: nav_from_raw(raw.nav_items, &base_path, diag),
            sidebar_groups: sidebar_from_raw(raw.sidebar_groups, &base_path, docs, diag),
            social_links: social_from_raw(raw.social_links, diag),
            base_path,
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// URL the generator emits for `link`.
    ///
    /// Internal links are resolved against the base path (see
    /// [`BasePath::join`]); external links are returned unchanged.
    pub fn url_for(&self, link: &str) -> String {
        match LinkKind::of(link) {
            LinkKind::External => link.to_owned(),
            LinkKind::Internal => self.base_path.join(link),
        }
    }

    /// All sidebar items across groups, in display order.
    pub fn sidebar_items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.sidebar_groups.iter().flat_map(|group| group.items.iter())
    }
}

/// Directory holding the config file, `.` for a bare file name.
fn config_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a TOML config with the required top-level keys already set.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\nbasePath = \"/\"\n{extra}");
    let (config, warnings) = SiteConfig::from_document(&content, DocumentFormat::Toml, None)
        .unwrap_or_else(|e| panic!("test config failed to load:\n{e}"));
    assert!(
        warnings.is_empty(),
        "test config has unknown fields: {:?}",
        warnings
    );
    config
}

// ============================================================================
// tests
// ============================================================================
