//! Finding named resources inside an archive.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::archive::glob::has_glob_chars;
use crate::archive::{Archive, MemberStream};
use crate::error::{Error, Result};

/// Find the first member matching `pattern`.
///
/// The archive is searched recursively (`**/<pattern>`) first, then at the
/// root only. Among several matches the first in archive iteration order
/// wins; callers must not rely on which duplicate that is.
pub fn find_member(archive: &Archive, pattern: &str) -> Result<String> {
    let recursive = format!("**/{}", pattern.trim_start_matches('/'));
    if let Some(found) = archive.glob(&recursive)?.into_iter().next() {
        debug!(pattern, member = %found, "located member");
        return Ok(found);
    }

    let shallow = if has_glob_chars(pattern) {
        archive.glob(pattern)?.into_iter().next()
    } else {
        archive.is_file(pattern).then(|| pattern.to_string())
    };

    shallow.ok_or_else(|| Error::NotFound(pattern.to_string()))
}

/// Locate `pattern` in an already open archive and open it.
pub fn open_member_matching(archive: &Archive, pattern: &str) -> Result<MemberStream> {
    let member = find_member(archive, pattern)?;
    archive.open_member(&member)
}

/// Open the archive at `archive_path`, then locate and open `pattern`.
///
/// The archive handle is released before this returns; the stream owns
/// the member's contents.
pub fn open_resource(archive_path: impl AsRef<Path>, pattern: &str) -> Result<MemberStream> {
    let archive = Archive::open(archive_path)?;
    open_member_matching(&archive, pattern)
}

/// Every `.svg` member of the archive.
pub fn list_icons(archive: &Archive) -> Result<Vec<String>> {
    archive.walk_icons()
}

/// Icon names (file stems) whose file name contains `term`.
///
/// Sorted and duplicate-free; icon sets with several styles ship the same
/// name once per style.
pub fn search_archive(archive: &Archive, term: &str) -> Result<Vec<String>> {
    let names: BTreeSet<String> = archive
        .walk_icons()?
        .iter()
        .filter_map(|path| {
            let file_name = path.rsplit('/').next()?;
            let stem = file_name.strip_suffix(".svg")?;
            file_name.contains(term).then(|| stem.to_string())
        })
        .collect();
    Ok(names.into_iter().collect())
}
