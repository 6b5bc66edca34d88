//! Persisted application settings: which manifest to open and how help is
//! first shown.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use homegoing_lib::manifest::expand_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_MANIFEST_FILE: &str = "dotfiles.yml";

/// Application settings stored as YAML.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the dotfile manifest. May start with `~`
    pub manifest: String,
    /// Show the full help instead of the one line summary on startup
    #[serde(default)]
    pub full_help: bool,
}

impl Config {
    pub fn new(manifest: String) -> Self {
        Self {
            manifest,
            full_help: false,
        }
    }
}

/// Persists and retrieves the application config from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// Manifest to use when no config file exists yet
    default_manifest: String,
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::new(manager.default_manifest.clone())
                    }
                };
            }
            Err(_) => {
                manager.config = Config::new(manager.default_manifest.clone());
                manager.write()?;
            }
        }

        Ok(manager)
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the configured manifest to an absolute path. Relative paths
    /// are taken relative to the config file.
    pub fn manifest_path(&self) -> Result<PathBuf> {
        let base = Path::new(&self.path)
            .parent()
            .unwrap_or_else(|| Path::new(""));
        Ok(expand_path(&self.config.manifest, base)?)
    }

    /// Remembers a new manifest for future runs.
    pub fn update_manifest(&mut self, manifest: String) -> Result<()> {
        if self.config.manifest == manifest {
            return Ok(());
        }
        self.config.manifest = manifest;
        self.write()
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
