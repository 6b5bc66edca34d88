//! Creating and removing dotfile symlinks.

use std::{fs, os::unix::fs::symlink};

use crate::{
    dotfile::{Dotfile, LinkStatus},
    error::{HomegoingError, Result},
};

/// Links and unlinks dotfiles. Implementations must leave anything they did
/// not create untouched.
pub trait Linker: Send {
    /// Places a symlink at the dotfile's target pointing to its source.
    fn link(&self, dotfile: &Dotfile) -> Result<()>;
    /// Removes the symlink at the dotfile's target.
    fn unlink(&self, dotfile: &Dotfile) -> Result<()>;
}

/// Default [`Linker`] that works directly with symlinks on the local file
/// system.
#[derive(Default)]
pub struct SymlinkLinker {}

impl SymlinkLinker {
    /// Returns a new instance of SymlinkLinker
    pub fn new() -> Self {
        Self {}
    }
}

impl Linker for SymlinkLinker {
    fn link(&self, dotfile: &Dotfile) -> Result<()> {
        match dotfile.refreshed().status {
            LinkStatus::Linked => Ok(()),
            LinkStatus::MissingSource => Err(HomegoingError::MissingSource(
                dotfile.source.display().to_string(),
            )),
            LinkStatus::Conflict => Err(HomegoingError::TargetConflict(
                dotfile.target.display().to_string(),
            )),
            LinkStatus::Unlinked => {
                if let Some(parent) = dotfile.target.parent() {
                    fs::create_dir_all(parent)?;
                }
                symlink(&dotfile.source, &dotfile.target)?;
                log::info!(
                    "linked {} -> {}",
                    dotfile.target.display(),
                    dotfile.source.display()
                );
                Ok(())
            }
        }
    }

    fn unlink(&self, dotfile: &Dotfile) -> Result<()> {
        match dotfile.refreshed().status {
            LinkStatus::Linked => {
                fs::remove_file(&dotfile.target)?;
                log::info!("unlinked {}", dotfile.target.display());
                Ok(())
            }
            _ => Err(HomegoingError::NotLinked(
                dotfile.target.display().to_string(),
            )),
        }
    }
}

#[cfg(test)]
#[path = "./linker_tests.rs"]
mod tests;
