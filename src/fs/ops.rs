// src/fs/ops.rs
//! File operation collaborators: the actual I/O behind `cd`, `cat`, `add`,
//! `rn`, `cp` and `mv`. Each function maps its own failures into the
//! `FsError` taxonomy; nothing here prints.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::fs::error::{FsError, ReadTarget, Result, WriteOp};

/// Verify that `path` opens as a directory. Used by `cd` before the cursor
/// is pushed, so a failed `cd` never moves the cursor. The failure message
/// names `target` as the user typed it, not the resolved path.
pub fn open_dir(path: &Path, target: &str) -> Result<()> {
    fs::read_dir(path)
        .map(|_| ())
        .map_err(|_| FsError::Navigation(target.to_owned()))
}

/// Stream the file at `path` into `out` in full, then flush.
pub fn cat(path: &Path, out: &mut dyn Write) -> Result<()> {
    let name = display_name(path);
    let file = File::open(path).map_err(|_| FsError::Read(ReadTarget::File, name.clone()))?;
    let mut reader = BufReader::new(file);
    io::copy(&mut reader, out).map_err(|_| FsError::Read(ReadTarget::File, name.clone()))?;
    out.flush()
        .map_err(|_| FsError::Read(ReadTarget::File, name))
}

/// Create a new empty file at `path`. Fails if it already exists.
pub fn add(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .map_err(|_| FsError::Write(WriteOp::Create, display_name(path)))
}

/// Rename `from` to `to`. An existing destination counts as a conflict, so
/// a rename never clobbers another file.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    let name = display_name(from);
    if to.exists() {
        return Err(FsError::Write(WriteOp::Rename, name));
    }
    fs::rename(from, to).map_err(|_| FsError::Write(WriteOp::Rename, name))
}

/// Stream-copy `from` into a new file `to`, treating the content as opaque
/// bytes. Fails if `to` already exists.
pub fn copy(from: &Path, to: &Path) -> Result<()> {
    stream_copy(from, to).map_err(|_| FsError::Write(WriteOp::Copy, display_name(from)))
}

/// Move `from` into the directory `dest_dir`, keeping the base filename.
///
/// The source is deleted only after the destination write has fully
/// completed; a failed copy leaves both the source and any pre-existing
/// destination untouched.
pub fn move_file(from: &Path, dest_dir: &Path) -> Result<()> {
    let name = display_name(from);
    let file_name = from
        .file_name()
        .ok_or_else(|| FsError::Write(WriteOp::Move, name.clone()))?;
    let to = dest_dir.join(file_name);

    stream_copy(from, &to).map_err(|_| FsError::Write(WriteOp::Move, name.clone()))?;
    fs::remove_file(from).map_err(|_| FsError::Write(WriteOp::Move, name))
}

/// Byte-stream copy with create-new semantics; all bytes are flushed and
/// synced before returning.
///
/// A partial destination left by a mid-stream failure is removed
/// best-effort. The removal only happens after `create_new` succeeded, so
/// it can never delete a file this copy did not create: an already-existing
/// destination (or an unreadable source) fails before anything is written.
fn stream_copy(from: &Path, to: &Path) -> io::Result<()> {
    let mut reader = BufReader::new(File::open(from)?);
    let dest = OpenOptions::new().write(true).create_new(true).open(to)?;
    if let Err(err) = write_all_synced(&mut reader, dest) {
        let _ = fs::remove_file(to);
        return Err(err);
    }
    Ok(())
}

fn write_all_synced(reader: &mut impl Read, dest: File) -> io::Result<()> {
    let mut writer = BufWriter::new(dest);
    io::copy(reader, &mut writer)?;
    writer.flush()?;
    writer.into_inner().map_err(io::Error::other)?.sync_all()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempDir(std::path::PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!("fm-ops-{tag}-{}", std::process::id()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn open_dir_rejects_files_and_missing_paths() {
        let tmp = TempDir::new("opendir");
        fs::write(tmp.0.join("plain.txt"), b"x").unwrap();
        assert!(open_dir(&tmp.0, ".").is_ok());
        assert!(matches!(
            open_dir(&tmp.0.join("plain.txt"), "plain.txt"),
            Err(FsError::Navigation(_))
        ));
        assert!(matches!(
            open_dir(&tmp.0.join("missing"), "missing"),
            Err(FsError::Navigation(_))
        ));
    }

    #[test]
    fn failed_cd_names_the_target_as_typed() {
        let tmp = TempDir::new("opendirname");
        let err = open_dir(&tmp.0.join("deep/missing"), "deep/missing").unwrap_err();
        assert_eq!(err, FsError::Navigation("deep/missing".into()));
        assert_eq!(err.to_string(), "No such file or directory: deep/missing");
    }

    #[test]
    fn cat_streams_the_exact_bytes() {
        let tmp = TempDir::new("cat");
        let path = tmp.0.join("hello.txt");
        fs::write(&path, b"hello, file manager\n").unwrap();

        let mut out = Vec::new();
        cat(&path, &mut out).unwrap();
        assert_eq!(out, b"hello, file manager\n");
    }

    #[test]
    fn cat_missing_file_is_a_read_error() {
        let tmp = TempDir::new("catmiss");
        let mut out = Vec::new();
        let err = cat(&tmp.0.join("nope.txt"), &mut out).unwrap_err();
        assert_eq!(err, FsError::Read(ReadTarget::File, "nope.txt".into()));
        assert!(out.is_empty());
    }

    #[test]
    fn add_creates_once_and_refuses_twice() {
        let tmp = TempDir::new("add");
        let path = tmp.0.join("new.txt");
        add(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert!(matches!(
            add(&path),
            Err(FsError::Write(WriteOp::Create, _))
        ));
    }

    #[test]
    fn rename_refuses_to_clobber() {
        let tmp = TempDir::new("rename");
        fs::write(tmp.0.join("a.txt"), b"a").unwrap();
        fs::write(tmp.0.join("b.txt"), b"b").unwrap();

        let err = rename(&tmp.0.join("a.txt"), &tmp.0.join("b.txt")).unwrap_err();
        assert!(matches!(err, FsError::Write(WriteOp::Rename, _)));
        assert_eq!(fs::read(tmp.0.join("b.txt")).unwrap(), b"b");

        rename(&tmp.0.join("a.txt"), &tmp.0.join("c.txt")).unwrap();
        assert!(!tmp.0.join("a.txt").exists());
        assert_eq!(fs::read(tmp.0.join("c.txt")).unwrap(), b"a");
    }

    #[test]
    fn copy_is_byte_identical_and_leaves_the_source() {
        let tmp = TempDir::new("copy");
        let content: Vec<u8> = (0u16..4096).map(|i| (i % 251) as u8).collect();
        fs::write(tmp.0.join("src.bin"), &content).unwrap();

        copy(&tmp.0.join("src.bin"), &tmp.0.join("dst.bin")).unwrap();
        assert_eq!(fs::read(tmp.0.join("dst.bin")).unwrap(), content);
        assert_eq!(fs::read(tmp.0.join("src.bin")).unwrap(), content);
    }

    #[test]
    fn copy_refuses_an_existing_destination() {
        let tmp = TempDir::new("copyclash");
        fs::write(tmp.0.join("src.txt"), b"new").unwrap();
        fs::write(tmp.0.join("dst.txt"), b"old").unwrap();

        assert!(matches!(
            copy(&tmp.0.join("src.txt"), &tmp.0.join("dst.txt")),
            Err(FsError::Write(WriteOp::Copy, _))
        ));
        assert_eq!(fs::read(tmp.0.join("dst.txt")).unwrap(), b"old");
    }

    #[test]
    fn move_transfers_content_and_deletes_the_source() {
        let tmp = TempDir::new("move");
        fs::create_dir(tmp.0.join("dest")).unwrap();
        fs::write(tmp.0.join("doc.txt"), b"payload").unwrap();

        move_file(&tmp.0.join("doc.txt"), &tmp.0.join("dest")).unwrap();
        assert!(!tmp.0.join("doc.txt").exists());
        assert_eq!(fs::read(tmp.0.join("dest/doc.txt")).unwrap(), b"payload");
    }

    #[test]
    fn move_refuses_to_clobber_an_existing_destination_file() {
        let tmp = TempDir::new("moveclash");
        fs::create_dir(tmp.0.join("dest")).unwrap();
        fs::write(tmp.0.join("dest/a.txt"), b"old").unwrap();
        fs::write(tmp.0.join("a.txt"), b"new").unwrap();

        let err = move_file(&tmp.0.join("a.txt"), &tmp.0.join("dest")).unwrap_err();
        assert!(matches!(err, FsError::Write(WriteOp::Move, _)));
        assert_eq!(fs::read(tmp.0.join("dest/a.txt")).unwrap(), b"old");
        assert_eq!(fs::read(tmp.0.join("a.txt")).unwrap(), b"new");
    }

    #[test]
    fn move_with_a_missing_source_touches_no_destination_file() {
        let tmp = TempDir::new("movenosrc");
        fs::create_dir(tmp.0.join("dest")).unwrap();
        fs::write(tmp.0.join("dest/ghost.txt"), b"still here").unwrap();

        let err = move_file(&tmp.0.join("ghost.txt"), &tmp.0.join("dest")).unwrap_err();
        assert!(matches!(err, FsError::Write(WriteOp::Move, _)));
        assert_eq!(fs::read(tmp.0.join("dest/ghost.txt")).unwrap(), b"still here");
    }

    #[test]
    fn failed_move_leaves_the_source_intact() {
        let tmp = TempDir::new("movefail");
        fs::write(tmp.0.join("keep.txt"), b"do not lose me").unwrap();

        let err = move_file(&tmp.0.join("keep.txt"), &tmp.0.join("no-such-dir")).unwrap_err();
        assert!(matches!(err, FsError::Write(WriteOp::Move, _)));
        assert_eq!(fs::read(tmp.0.join("keep.txt")).unwrap(), b"do not lose me");
    }
}
