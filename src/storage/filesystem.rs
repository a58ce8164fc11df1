//! File system probing
//!
//! Classifies a path with a single metadata query.

use std::fs::{self, Metadata};
use std::io::{ErrorKind, Result};
use std::path::Path;

/// What a path points at, after following links
#[derive(Debug)]
pub enum EntryKind {
    File(Metadata),
    Directory,
    /// Sockets, fifos, devices
    Other,
}

/// Classify `path`, returning `None` when nothing is there
pub fn probe(path: &Path) -> Result<Option<EntryKind>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(EntryKind::File(meta))),
        Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
        Ok(_) => Ok(Some(EntryKind::Other)),
        // A file used as an intermediate directory component
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(e),
    }
}
