//! Parse configuration.
//!
//! ```json
//! { "maxDepth": 64, "bindablePrefix": "bind:", "eventPrefix": "on:" }
//! ```
//!
//! Every field is optional; missing fields take the [`BuildOptions`]
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use docgraph_builder::BuildOptions;
use docgraph_common::{ErrorCode, limits};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParseConfig {
    #[serde(default)]
    pub max_depth: Option<u32>,
    #[serde(default)]
    pub bindable_prefix: Option<String>,
    #[serde(default)]
    pub event_prefix: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read parse configuration {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("maxDepth must be at least {min}, got {value}")]
    DepthTooSmall { value: u32, min: u32 },
}

impl ConfigError {
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidConfig
    }
}

impl ParseConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Apply the configured fields over the defaults.
    pub fn resolve(&self) -> Result<BuildOptions, ConfigError> {
        let mut options = BuildOptions::default();
        if let Some(max_depth) = self.max_depth {
            if max_depth < limits::MIN_TYPE_GRAPH_DEPTH {
                return Err(ConfigError::DepthTooSmall {
                    value: max_depth,
                    min: limits::MIN_TYPE_GRAPH_DEPTH,
                });
            }
            options.max_depth = max_depth;
        }
        if let Some(prefix) = &self.bindable_prefix {
            options.bindable_prefix.clone_from(prefix);
        }
        if let Some(prefix) = &self.event_prefix {
            options.event_prefix.clone_from(prefix);
        }
        Ok(options)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
