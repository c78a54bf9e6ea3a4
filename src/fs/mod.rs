// src/fs/mod.rs
//! Filesystem module - the path cursor, directory listings and the file
//! operation handlers.

pub mod cursor;
pub mod entries;
pub mod error;
pub mod ops;

// Re-export commonly used types
pub use cursor::Cursor;
pub use entries::{load_entries, Entry, EntryKind};
pub use error::{FsError, ReadTarget, WriteOp};
