// src/fs/entries.rs
//! Directory listing: load the entries of a directory, directories first,
//! each group sorted by name.

use std::fs;
use std::path::Path;

use crate::fs::error::{FsError, ReadTarget, Result};

/// What a listed entry is; the `Type` column of `ls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    // Directory sorts before File; the listing order relies on this.
    Directory,
    File,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Load the entries of `dir`, returning them partitioned directories-first
/// and sorted ascending by name within each group.
///
/// Entries whose metadata cannot be read are skipped rather than failing
/// the whole listing.
pub fn load_entries(dir: &Path) -> Result<Vec<Entry>> {
    let read = fs::read_dir(dir)
        .map_err(|_| FsError::Read(ReadTarget::Directory, dir.display().to_string()))?;

    let mut list: Vec<Entry> = read
        .filter_map(std::result::Result::ok)
        .map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            let kind = if e.path().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Entry { name, kind }
        })
        .collect();

    list.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    Ok(list)
}
