//! Layered generator configuration.
//!
//! Defaults, then `bridgegen.toml` (or an explicit file), then `BRIDGEGEN_*`
//! environment variables. Command-line overrides are applied by the caller.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{Error, RenderOptions, Result};

pub const CONFIG_FILE: &str = "bridgegen.toml";
pub const ENV_PREFIX: &str = "BRIDGEGEN_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeGenConfig {
    pub suffix:         String,
    pub factory_prefix: String,
    /// Defaults to the directory of the input header.
    pub output_dir:     Option<PathBuf>,
}

impl Default for BridgeGenConfig {
    fn default() -> Self {
        Self {
            suffix:         "Bridge".to_string(),
            factory_prefix: "make".to_string(),
            output_dir:     None,
        }
    }
}

impl BridgeGenConfig {
    /// Loads the layered config. An explicit `file` must exist; the default
    /// `bridgegen.toml` is optional.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let toml = match file {
            Some(path) if !path.exists() => {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            Some(path) => Toml::file(path),
            None => Toml::file(CONFIG_FILE),
        };

        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }

    pub fn render_options(&self, interface_header: impl Into<String>) -> RenderOptions {
        RenderOptions::new(interface_header)
            .suffix(self.suffix.clone())
            .factory_prefix(self.factory_prefix.clone())
    }
}
