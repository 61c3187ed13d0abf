//! Optional project configuration file.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "glyphforge.toml";

/// Values read from `glyphforge.toml`. Every field is optional; explicit CLI
/// flags always win over these.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub size: Option<f64>,
    pub stroke_width: Option<f64>,
    pub filled: Option<bool>,
}

impl ForgeConfig {
    /// Load configuration from an explicit path, or from `./glyphforge.toml`
    /// when present. A missing implicit file is not an error; a missing
    /// explicit one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        toml::from_str(&content).wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }
}
