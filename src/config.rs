//! Library configuration.
//!
//! Every setting has a default that reproduces the stock AWS icon library, so
//! the config file is optional. When given with `--config`, the file is sparse:
//! it overrides only the keys it names and everything else keeps its default.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output = "aws-icons.mxlibrary"  # Used when -o is not given
//!
//! [title]
//! brand = "AWS"                   # Prefix normalised to "AWS " in titles ("" disables)
//!
//! [shape]
//! width = 80                      # Shape width in the library and the geometry
//! height = 80                     # Shape height in the library and the geometry
//! media_type = "image/svg+xml"    # Media type of the embedded data URI
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Library configuration loaded from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Output path used when the command line does not give one.
    #[serde(default = "default_output")]
    pub output: String,
    /// Title derivation settings.
    pub title: TitleConfig,
    /// Shape geometry and embedded image settings.
    pub shape: ShapeConfig,
}

fn default_output() -> String {
    "aws-icons.mxlibrary".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            title: TitleConfig::default(),
            shape: ShapeConfig::default(),
        }
    }
}

impl LibraryConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.shape.width == 0 || self.shape.height == 0 {
            return Err(ConfigError::Validation(
                "shape.width and shape.height must be non-zero".into(),
            ));
        }
        if !self.shape.media_type.contains('/') {
            return Err(ConfigError::Validation(format!(
                "shape.media_type must look like type/subtype, got {:?}",
                self.shape.media_type
            )));
        }
        Ok(())
    }
}

/// Title derivation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleConfig {
    /// Brand token whose leading occurrence is normalised to `"<brand> "`.
    pub brand: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            brand: "AWS".to_string(),
        }
    }
}

/// Shape geometry and embedded image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeConfig {
    pub width: u32,
    pub height: u32,
    /// Media type written into the `data:` URI.
    pub media_type: String,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            media_type: "image/svg+xml".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(LibraryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<LibraryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LibraryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit TOML file, or the stock defaults when `path` is `None`.
///
/// Unlike the defaults, a path that was asked for must exist.
pub fn load_config(path: Option<&Path>) -> Result<LibraryConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}
