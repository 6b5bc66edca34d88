//! Dotfile entries and their link status.

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

/// Where a dotfile's target stands relative to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Target is a symlink pointing at the source
    Linked,
    /// Nothing exists at the target
    Unlinked,
    /// Something other than our symlink exists at the target
    Conflict,
    /// The source itself does not exist
    MissingSource,
}

impl Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStatus::Linked => write!(f, "linked"),
            LinkStatus::Unlinked => write!(f, "unlinked"),
            LinkStatus::Conflict => write!(f, "conflict"),
            LinkStatus::MissingSource => write!(f, "missing source"),
        }
    }
}

/// A resolved dotfile with absolute source and target paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dotfile {
    /// Display name
    pub name: String,
    /// Absolute path of the real file
    pub source: PathBuf,
    /// Absolute path the symlink lives at
    pub target: PathBuf,
    /// Status as of the last probe
    pub status: LinkStatus,
}

impl Dotfile {
    /// Creates a new dotfile and probes its status.
    pub fn new(name: String, source: PathBuf, target: PathBuf) -> Self {
        let status = probe(&source, &target);
        Self {
            name,
            source,
            target,
            status,
        }
    }

    /// Returns a copy of this dotfile with a freshly probed status.
    pub fn refreshed(&self) -> Self {
        Self {
            status: probe(&self.source, &self.target),
            ..self.clone()
        }
    }
}

/// Inspects the file system to determine the link status of a
/// source/target pair. A target that links to `source` counts as linked even
/// when the source has since been removed, so the link can still be undone.
pub fn probe(source: &Path, target: &Path) -> LinkStatus {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.file_type().is_symlink() => {
            match fs::read_link(target) {
                Ok(dest) if dest == source => LinkStatus::Linked,
                _ => LinkStatus::Conflict,
            }
        }
        Ok(_) => LinkStatus::Conflict,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if source.exists() {
                LinkStatus::Unlinked
            } else {
                LinkStatus::MissingSource
            }
        }
        Err(e) => {
            log::warn!("failed to inspect {}: {}", target.display(), e);
            LinkStatus::Conflict
        }
    }
}

#[cfg(test)]
#[path = "./dotfile_tests.rs"]
mod tests;
