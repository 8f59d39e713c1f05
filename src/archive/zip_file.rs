use std::sync::Arc;

use crate::error::{Error, Result};
use crate::io::LocalFileReader;
use crate::zip::ZipExtractor;

use super::member::MemberStream;
use super::{ArchiveBackend, ArchiveEntry, join_member, normalize_member};

/// An icon set still packed in its distribution zip.
///
/// Zips frequently omit explicit directory entries, so directories are
/// derived from member name prefixes.
pub struct ZipFileArchive {
    extractor: ZipExtractor<LocalFileReader>,
}

impl ZipFileArchive {
    pub fn new(extractor: ZipExtractor<LocalFileReader>) -> Self {
        Self { extractor }
    }

    pub(crate) fn open(reader: LocalFileReader) -> Result<Option<Self>> {
        Ok(ZipExtractor::open(Arc::new(reader))?.map(Self::new))
    }

    fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.extractor.entries().iter().map(|e| e.file_name.as_str())
    }
}

impl ArchiveBackend for ZipFileArchive {
    fn files(&self) -> Result<Vec<String>> {
        Ok(self
            .extractor
            .entries()
            .iter()
            .filter(|e| !e.is_directory)
            .map(|e| e.file_name.clone())
            .collect())
    }

    fn exists(&self, path: &str) -> bool {
        let Some(member) = normalize_member(path) else {
            return false;
        };
        self.entry_names().any(|name| name == member) || self.is_directory(&member)
    }

    fn is_directory(&self, path: &str) -> bool {
        let Some(member) = normalize_member(path) else {
            return false;
        };
        if member.is_empty() {
            return true;
        }
        let prefix = format!("{member}/");
        self.entry_names().any(|name| name.starts_with(&prefix))
    }

    fn children(&self, path: &str) -> Result<Vec<ArchiveEntry>> {
        let member = normalize_member(path)
            .filter(|m| self.is_directory(m))
            .ok_or_else(|| Error::NotFound(path.to_string()))?;
        let prefix = if member.is_empty() {
            String::new()
        } else {
            format!("{member}/")
        };

        let mut children: Vec<ArchiveEntry> = Vec::new();
        for name in self.entry_names() {
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            let child = match rest.split_once('/') {
                Some((dir, _)) => ArchiveEntry {
                    path: join_member(&member, dir),
                    is_directory: true,
                },
                None if !rest.is_empty() => ArchiveEntry {
                    path: join_member(&member, rest),
                    is_directory: false,
                },
                None => continue,
            };
            if !children.iter().any(|c| c.path == child.path) {
                children.push(child);
            }
        }
        Ok(children)
    }

    fn open_member(&self, path: &str) -> Result<MemberStream> {
        let member = normalize_member(path).ok_or_else(|| Error::NotFound(path.to_string()))?;
        let entry = self
            .extractor
            .find(&member)
            .filter(|e| !e.is_directory)
            .ok_or_else(|| Error::NotFound(path.to_string()))?;

        let data = self.extractor.extract_to_memory(entry)?;
        Ok(MemberStream::from_bytes(member, data))
    }
}
