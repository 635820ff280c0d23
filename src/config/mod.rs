pub mod render;
pub mod window;

pub use render::RenderConfig;
pub use window::WindowConfig;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level settings, loaded from a TOML file next to the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Reads the config file, writing one with default settings first if
    /// none exists yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create config directory")?;
                }
            }
            let default_config = Config::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            std::fs::write(path, toml_content)
                .context("Failed to write default config")?;
            info!("Wrote default config to {}", path.display());
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .context("Failed to read config file")?;
        toml::from_str(&content)
            .context("Failed to parse config file")
    }
}
