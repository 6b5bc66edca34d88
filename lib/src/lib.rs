//! Library package for reading dotfile manifests and linking dotfiles into
//! place
//!
//! A manifest is a YAML file listing the dotfiles to manage:
//!
//! ```yaml
//! dotfiles:
//!   - name: zshrc
//!     source: zsh/zshrc
//!     target: ~/.zshrc
//! ```
//!
//! Relative `source` paths resolve against the manifest's directory and a
//! leading `~` expands to the current user's home directory.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use homegoing_lib::linker::{Linker, SymlinkLinker};
//!
//! let dotfiles = homegoing_lib::load_dotfiles(Path::new("dotfiles.yml"))?;
//! let linker = SymlinkLinker::new();
//!
//! for dotfile in dotfiles.iter() {
//!     println!("{}: {}", dotfile.name, dotfile.status);
//!     linker.link(dotfile)?;
//! }
//! # Ok::<(), homegoing_lib::error::HomegoingError>(())
//! ```

#![deny(missing_docs)]

use std::path::Path;

use crate::{dotfile::Dotfile, error::Result, manifest::Manifest};

pub mod dotfile;
pub mod error;
pub mod linker;
pub mod manifest;

/// Reads the manifest at `path` and returns every entry resolved to
/// absolute paths with a freshly probed link status.
pub fn load_dotfiles(path: &Path) -> Result<Vec<Dotfile>> {
    let manifest = Manifest::load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let dotfiles = manifest.resolve(base)?;
    log::debug!(
        "loaded {} dotfiles from {}",
        dotfiles.len(),
        path.display()
    );
    Ok(dotfiles)
}

#[cfg(test)]
#[path = "./lib_tests.rs"]
mod tests;
