use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub title: String,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu: MenuConfig {
                title: "Christoffel's Menu".to_string(),
                currency: "R".to_string(),
            },
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("menu.title", &self.menu.title)?;
        validate_non_empty_string("menu.currency", &self.menu.currency)?;
        Ok(())
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Falls back to the built-in defaults when no usable file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Using default config ({})", err);
                Self::default()
            }
        }
    }
}
