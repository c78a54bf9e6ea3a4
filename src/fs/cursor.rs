// src/fs/cursor.rs
//! The path cursor: the in-memory stack of path segments representing the
//! user's current working location.

use std::path::{Path, PathBuf};

/// Ordered stack of path segments, root first.
///
/// The cursor never touches the filesystem itself; callers validate that a
/// target exists before pushing, so the cursor never points at a location
/// that was not openable at push time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Never empty: holds at least the home-directory root segments.
    segments: Vec<String>,
}

impl Cursor {
    /// Create a cursor rooted at the user's home directory.
    ///
    /// Falls back to the current directory, then to the filesystem root, if
    /// no home directory can be determined.
    pub fn from_home() -> Self {
        #[allow(deprecated)] // un-deprecated on edition 2024 toolchains
        let home = std::env::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR));
        Self::from_path(&home)
    }

    /// Split `path` into its components, one segment each.
    pub fn from_path(path: &Path) -> Self {
        let mut segments: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if segments.is_empty() {
            segments.push(std::path::MAIN_SEPARATOR_STR.to_owned());
        }
        Self { segments }
    }

    /// Append one segment. No validation here; the caller has already
    /// checked that the target opens as a directory.
    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_owned());
    }

    /// Ascend one level. Popping at the root is a no-op, not an error.
    pub fn pop(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    /// The cursor's location as a path.
    pub fn as_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Join the cursor with a relative name. Pure; no filesystem access.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.as_path().join(name)
    }

    /// Display form, recomputed on demand.
    pub fn render(&self) -> String {
        self.as_path().display().to_string()
    }

    /// Number of segments currently on the stack.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}
