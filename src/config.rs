use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::RenderOptions;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub classes: ClassesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClassesConfig {
    pub prefix: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled into the binary.
    ///
    /// `build.rs` checks that the bundled file is valid TOML.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config not found, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            class_prefix: self.classes.prefix.clone(),
        }
    }
}
