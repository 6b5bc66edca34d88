//! Reading and resolving dotfile manifests.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    dotfile::Dotfile,
    error::{HomegoingError, Result},
};

/// A single managed dotfile as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Display name of the dotfile
    pub name: String,
    /// Where the real file lives, usually inside a dotfiles repository
    pub source: String,
    /// Where the file is expected to be found, e.g. `~/.zshrc`
    pub target: String,
}

/// The full list of managed dotfiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Managed dotfiles in display order
    #[serde(default)]
    pub dotfiles: Vec<ManifestEntry>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| {
            HomegoingError::ManifestRead {
                path: path.display().to_string(),
                source,
            }
        })?;

        // an empty file is a valid, empty manifest
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|source| {
            HomegoingError::ManifestParse {
                path: path.display().to_string(),
                source,
            }
        })
    }

    /// Resolves every entry against `base` (the manifest's directory) and
    /// probes its current link status.
    pub fn resolve(&self, base: &Path) -> Result<Vec<Dotfile>> {
        self.dotfiles
            .iter()
            .map(|entry| {
                let source = expand_path(&entry.source, base)?;
                let target = expand_path(&entry.target, base)?;
                Ok(Dotfile::new(entry.name.clone(), source, target))
            })
            .collect()
    }
}

/// Expands a leading `~` to the home directory and joins relative paths
/// onto `base`.
pub fn expand_path(raw: &str, base: &Path) -> Result<PathBuf> {
    if raw == "~" || raw.starts_with("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| HomegoingError::HomeDir(raw.to_string()))?;
        let rest = raw.trim_start_matches('~').trim_start_matches('/');
        return Ok(home.join(rest));
    }

    let path = PathBuf::from(raw);

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}

#[cfg(test)]
#[path = "./manifest_tests.rs"]
mod tests;
