use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::member::MemberStream;
use super::{ArchiveBackend, ArchiveEntry, join_member, normalize_member};

/// An icon set unpacked onto the filesystem.
pub struct DirectoryArchive {
    root: PathBuf,
}

impl DirectoryArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let member = normalize_member(path)?;
        Some(member.split('/').filter(|s| !s.is_empty()).fold(self.root.clone(), |acc, s| acc.join(s)))
    }

    /// Directory entries sorted by name so iteration order is stable
    fn read_sorted(dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());
        Ok(entries)
    }

    fn collect_files(&self, dir: &Path, prefix: &str, out: &mut Vec<String>) -> io::Result<()> {
        for entry in Self::read_sorted(dir)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let member = join_member(prefix, &name);
            let path = entry.path();
            if path.is_dir() {
                self.collect_files(&path, &member, out)?;
            } else if path.is_file() {
                out.push(member);
            }
        }
        Ok(())
    }
}

impl ArchiveBackend for DirectoryArchive {
    fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        self.collect_files(&self.root, "", &mut files)?;
        Ok(files)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.exists())
    }

    fn is_directory(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_dir())
    }

    fn children(&self, path: &str) -> Result<Vec<ArchiveEntry>> {
        let (Some(member), Some(dir)) = (normalize_member(path), self.resolve(path)) else {
            return Err(Error::NotFound(path.to_string()));
        };
        if !dir.is_dir() {
            return Err(Error::NotFound(path.to_string()));
        }

        Self::read_sorted(&dir)?
            .into_iter()
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                Ok(ArchiveEntry {
                    path: join_member(&member, &name),
                    is_directory: entry.path().is_dir(),
                })
            })
            .collect()
    }

    fn open_member(&self, path: &str) -> Result<MemberStream> {
        let (Some(member), Some(file_path)) = (normalize_member(path), self.resolve(path)) else {
            return Err(Error::NotFound(path.to_string()));
        };
        if !file_path.is_file() {
            return Err(Error::NotFound(path.to_string()));
        }
        let file = File::open(&file_path)?;
        Ok(MemberStream::from_file(member, file))
    }
}
