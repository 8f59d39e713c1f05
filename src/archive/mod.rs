//! Icon archives: zip files and unpacked directories behind one interface.
//!
//! Both backings address members by relative, `/`-separated paths, so a
//! lookup for `solid/github.svg` behaves the same whether the icon set is
//! still zipped or has been extracted.
//!
//! ```no_run
//! use iconzip::Archive;
//!
//! let archive = Archive::open("fontawesome-free-6.5.1-desktop.zip")?;
//! for path in archive.glob("**/brands/*.svg")? {
//!     println!("{path}");
//! }
//! # Ok::<(), iconzip::Error>(())
//! ```

mod directory;
pub mod glob;
mod member;
mod zip_file;

pub use directory::DirectoryArchive;
pub use member::MemberStream;
pub use zip_file::ZipFileArchive;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::io::LocalFileReader;

/// A child of an archive directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub is_directory: bool,
}

impl ArchiveEntry {
    /// Final path segment
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Operations every archive backing provides.
///
/// Paths are relative to the archive root; `""` names the root itself.
pub trait ArchiveBackend {
    /// Every file member, in the backing's iteration order
    fn files(&self) -> Result<Vec<String>>;

    fn exists(&self, path: &str) -> bool;

    fn is_directory(&self, path: &str) -> bool;

    /// Immediate children of a directory
    fn children(&self, path: &str) -> Result<Vec<ArchiveEntry>>;

    fn open_member(&self, path: &str) -> Result<MemberStream>;
}

/// Identity of an archive on disk, used to key cached metadata.
///
/// A rewritten zip file gets a new identity through its length or
/// modification time. A directory's identity comes from the directory
/// entry itself, so editing a file inside it in place keeps the same
/// identity; call [`MetadataCache::invalidate`](crate::MetadataCache::invalidate)
/// after changing an unpacked icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveId {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl ArchiveId {
    fn new(path: &Path, metadata: &fs::Metadata) -> Self {
        Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            len: metadata.len(),
            modified: metadata.modified().ok(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An open icon archive.
///
/// A zip archive keeps its file handle for as long as this value lives;
/// dropping it releases the handle.
pub enum Archive {
    Directory(DirectoryArchive, ArchiveId),
    Zip(ZipFileArchive, ArchiveId),
}

impl Archive {
    /// Open a directory or zip file.
    ///
    /// Fails with [`Error::NotFound`] when `path` does not exist and with
    /// [`Error::InvalidArchive`] when it is neither a directory nor a
    /// readable zip file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let id = ArchiveId::new(path, &metadata);

        if metadata.is_dir() {
            debug!(archive = %path.display(), "opened directory archive");
            return Ok(Archive::Directory(DirectoryArchive::new(path), id));
        }
        if !metadata.is_file() {
            return Err(Error::InvalidArchive(path.to_path_buf()));
        }

        match ZipFileArchive::open(LocalFileReader::new(path)?) {
            Ok(Some(zip)) => {
                debug!(archive = %path.display(), "opened zip archive");
                Ok(Archive::Zip(zip, id))
            }
            Ok(None) => Err(Error::InvalidArchive(path.to_path_buf())),
            Err(Error::CorruptArchive(reason)) => {
                debug!(archive = %path.display(), %reason, "unreadable zip central directory");
                Err(Error::InvalidArchive(path.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    pub fn id(&self) -> &ArchiveId {
        match self {
            Archive::Directory(_, id) | Archive::Zip(_, id) => id,
        }
    }

    pub fn is_zip(&self) -> bool {
        matches!(self, Archive::Zip(..))
    }

    fn backend(&self) -> &dyn ArchiveBackend {
        match self {
            Archive::Directory(dir, _) => dir as &dyn ArchiveBackend,
            Archive::Zip(zip, _) => zip as &dyn ArchiveBackend,
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.backend().exists(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.backend().is_directory(path)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.exists(path) && !self.is_directory(path)
    }

    pub fn children(&self, path: &str) -> Result<Vec<ArchiveEntry>> {
        self.backend().children(path)
    }

    pub fn open_member(&self, path: &str) -> Result<MemberStream> {
        self.backend().open_member(path)
    }

    /// File members matching `pattern`, in archive iteration order.
    ///
    /// See [`glob`] for the supported syntax.
    pub fn glob(&self, pattern: &str) -> Result<Vec<String>> {
        let matches: Vec<String> = self
            .backend()
            .files()?
            .into_iter()
            .filter(|path| glob::path_matches(pattern, path))
            .collect();
        trace!(pattern, matches = matches.len(), "glob");
        Ok(matches)
    }

    /// Every `.svg` file, found by walking directories from the root.
    pub fn walk_icons(&self) -> Result<Vec<String>> {
        let mut icons = Vec::new();
        self.walk_dir("", &mut icons)?;
        Ok(icons)
    }

    fn walk_dir(&self, dir: &str, out: &mut Vec<String>) -> Result<()> {
        for child in self.children(dir)? {
            if child.is_directory {
                self.walk_dir(&child.path, out)?;
            } else if child.name().ends_with(".svg") {
                out.push(child.path);
            }
        }
        Ok(())
    }
}

/// Canonical form of a member path, or `None` if it escapes the archive.
pub(crate) fn normalize_member(path: &str) -> Option<String> {
    let mut segments = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => return None,
            s => segments.push(s),
        }
    }
    Some(segments.join("/"))
}

pub(crate) fn join_member(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
