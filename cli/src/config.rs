//! Configuration management for currency display and storage location.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "₦";

/// Application configuration persisted as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Symbol printed in front of every amount
    pub currency: String,
    /// Directory holding the saved lists file
    pub storage_dir: String,
}

impl Config {
    /// Creates a new config with the default currency and provided storage
    /// directory.
    pub fn new(storage_dir: String) -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            storage_dir,
        }
    }
}

/// Persists and retrieves configuration from YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The storage directory to use when no config file exists
    default_storage_dir: String,
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Option<Config>,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        let f: Result<std::fs::File, std::io::Error> =
            std::fs::File::open(&manager.path);

        match f {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => Some(c),
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Some(Config::new(manager.default_storage_dir.clone()))
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config =
                    Some(Config::new(manager.default_storage_dir.clone()));
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the current configuration.
    pub fn get(&self) -> Config {
        self.config
            .clone()
            .unwrap_or_else(|| Config::new(self.default_storage_dir.clone()))
    }

    /// Replaces the configuration and persists it to disk.
    pub fn update_config(&mut self, new_config: Config) -> Result<()> {
        self.config = Some(new_config);
        self.write()
    }

    fn write(&mut self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.get())?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
