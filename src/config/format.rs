//! Supported document formats.

use super::ConfigError;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

/// Structured-document format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Deserialize `content`, collecting the paths of any keys the schema ignores.
    pub(crate) fn parse_with_ignored<T: DeserializeOwned>(
        self,
        content: &str,
    ) -> Result<(T, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let value = match self {
            Self::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?
            }
            Self::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let value =
                    serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                        ignored.push(path.to_string());
                    })?;
                deserializer.end()?;
                value
            }
        };
        Ok((value, ignored))
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("docsite.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b/Site.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("config.mts")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(DocumentFormat::from_path(Path::new("docsite")).is_err());
    }

    #[test]
    fn test_json_trailing_garbage_is_parse_error() {
        let result = DocumentFormat::Json
            .parse_with_ignored::<BTreeMap<String, String>>(r#"{"a": "b"} x"#);
        assert!(result.unwrap_err().is_parse());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = DocumentFormat::Toml
            .parse_with_ignored::<BTreeMap<String, String>>("[base\ntitle = \"x\"");
        assert!(result.unwrap_err().is_parse());
    }
}
