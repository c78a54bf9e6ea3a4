// src/fs/error.rs
//! Error taxonomy for the filesystem handlers.
//!
//! Every handler converts the I/O failures of its own collaborator calls
//! into one of these variants; nothing below this module ever reaches the
//! session loop as a raw `io::Error`.

use std::fmt;

/// Result alias for filesystem handler operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Which write-class command failed; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Rename,
    Copy,
    Move,
}

/// What kind of entry a failed read targeted; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTarget {
    Directory,
    File,
}

/// The three failure classes a command can report. All are non-fatal to the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// `cd` target does not resolve to an openable directory.
    Navigation(String),
    /// A directory or file cannot be read.
    Read(ReadTarget, String),
    /// A file cannot be created, renamed, copied or moved.
    Write(WriteOp, String),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::Navigation(path) => write!(f, "No such file or directory: {path}"),
            FsError::Read(ReadTarget::Directory, path) => {
                write!(f, "Directory can't be read: {path}")
            }
            FsError::Read(ReadTarget::File, name) => write!(f, "No such file: {name}"),
            FsError::Write(WriteOp::Create, name) => write!(f, "File can't be created: {name}"),
            FsError::Write(WriteOp::Rename, name) => write!(f, "File can't be renamed: {name}"),
            FsError::Write(WriteOp::Copy, name) => write!(f, "File can't be copied: {name}"),
            FsError::Write(WriteOp::Move, name) => write!(f, "File can't be moved: {name}"),
        }
    }
}

impl std::error::Error for FsError {}
