//! Bridge configuration (tkbridge.toml)
//!
//! ```toml
//! [bridge]
//! module = "FLTK3"
//!
//! [host]
//! arena_capacity = 100
//!
//! [toolkit]
//! system_fonts = ["DejaVu Sans"]
//!
//! [log]
//! filter = "info"
//! ```
//!
//! Every field has a default. The `[host]` table is kept raw: its shape
//! belongs to whichever scripting runtime the embedder links.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tkbridge_toolkit::ToolkitOptions;

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the file
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// `[bridge]`
    pub bridge: BridgeSection,
    /// `[toolkit]`
    pub toolkit: ToolkitOptions,
    /// `[log]`
    pub log: LogSection,
    /// `[host]`, passed through to the scripting runtime
    pub host: toml::Table,
}

/// `[bridge]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeSection {
    /// Name of the top-level module the classes are declared in
    pub module: String,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            module: "FLTK3".to_string(),
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `tracing` env-filter directive
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse a config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse a config from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_constant_name(&self.bridge.module) {
            return Err(ConfigError::Invalid(format!(
                "module name {:?} must start with an uppercase letter and contain only letters, digits and underscores",
                self.bridge.module
            )));
        }
        Ok(())
    }
}

fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::from_str("").unwrap();
        assert_eq!(config.bridge.module, "FLTK3");
        assert_eq!(config.log.filter, "info");
        assert!(config.host.is_empty());
        assert!(config.toolkit.system_fonts.is_empty());
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[bridge]
module = "Gui"

[host]
arena_capacity = 16

[toolkit]
system_fonts = ["Noto Sans"]

[log]
filter = "tkbridge=debug"
"#
        )
        .unwrap();
        let config = BridgeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bridge.module, "Gui");
        assert_eq!(config.host["arena_capacity"].as_integer(), Some(16));
        assert_eq!(config.toolkit.system_fonts, vec!["Noto Sans"]);
        assert_eq!(config.log.filter, "tkbridge=debug");
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            BridgeConfig::from_str("[bridge]\nmodule = \"fltk\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BridgeConfig::from_str("[bridge"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BridgeConfig::from_file(Path::new("/nonexistent/tkbridge.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
