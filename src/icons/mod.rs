//! Icon sets and the loader that turns `(archive, name)` into SVG bytes.
//!
//! ```no_run
//! use iconzip::{IconLoader, IconRequest, IconSet};
//!
//! let loader = IconLoader::new();
//! let svg = loader.load(
//!     IconSet::FontAwesome,
//!     "fontawesome-free-6.5.1-desktop.zip",
//!     &IconRequest::new("github").fill("#691E7C"),
//! )?;
//! assert!(svg.starts_with(b"<svg"));
//! # Ok::<(), iconzip::Error>(())
//! ```

pub mod feather;
pub mod font_awesome;
pub mod phosphor;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use tracing::debug;

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::locator::{find_member, list_icons, search_archive};
use crate::metadata::MetadataCache;
use crate::svg::{Paint, patch_svg};

/// Archive layouts understood by the loader.
///
/// Formats are never guessed; the caller says which one an archive uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum IconSet {
    /// Font Awesome, resolved through `metadata/icons.json`
    #[value(name = "fontawesome", alias = "fa")]
    FontAwesome,
    /// Feather, a flat folder of icons
    Feather,
    /// Phosphor, `SVGs/<style>/` or `SVGs Flat/<style>/`
    Phosphor,
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IconSet::FontAwesome => "fontawesome",
            IconSet::Feather => "feather",
            IconSet::Phosphor => "phosphor",
        })
    }
}

/// Where an icon lives inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Member path relative to the archive root
    pub path: String,
    /// Canonical icon name
    pub name: String,
    pub style: Option<String>,
}

/// Locate a resolver's candidate path in the archive.
///
/// A candidate that does not exist is an icon lookup failure rather than a
/// missing-archive failure.
pub(crate) fn locate(archive: &Archive, candidate: ResolvedIcon) -> Result<ResolvedIcon> {
    match find_member(archive, &candidate.path) {
        Ok(path) => Ok(ResolvedIcon { path, ..candidate }),
        Err(Error::NotFound(_)) => Err(Error::IconNotFound {
            name: candidate.name,
            style: candidate.style,
        }),
        Err(e) => Err(e),
    }
}

/// What to load and how to paint it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRequest {
    pub name: String,
    pub style: Option<String>,
    /// Phosphor only: use the flat variant
    pub flat: bool,
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

impl IconRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    fn paint(&self) -> Paint<'_> {
        Paint::new(self.fill.as_deref(), self.stroke.as_deref())
    }
}

/// Loads icons and owns the per-archive Font Awesome metadata cache.
///
/// Build one and reuse it; every archive's metadata is parsed once per
/// loader.
#[derive(Default)]
pub struct IconLoader {
    metadata: MetadataCache,
}

impl IconLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(&self) -> &MetadataCache {
        &self.metadata
    }

    /// Find the member that holds the requested icon.
    pub fn resolve(&self, set: IconSet, archive: &Archive, request: &IconRequest) -> Result<ResolvedIcon> {
        let style = request.style.as_deref();
        match set {
            IconSet::FontAwesome => {
                let index = self.metadata.index_for(archive)?;
                font_awesome::resolve(archive, &index, &request.name, style)
            }
            IconSet::Feather => feather::resolve(archive, &request.name, style),
            IconSet::Phosphor => phosphor::resolve(archive, &request.name, style, request.flat),
        }
    }

    /// Load an icon from the archive at `archive_path` as SVG bytes.
    pub fn load(
        &self,
        set: IconSet,
        archive_path: impl AsRef<Path>,
        request: &IconRequest,
    ) -> Result<Vec<u8>> {
        let archive = Archive::open(archive_path)?;
        self.load_from(set, &archive, request)
    }

    /// Load an icon from an archive that is already open.
    pub fn load_from(&self, set: IconSet, archive: &Archive, request: &IconRequest) -> Result<Vec<u8>> {
        let icon = self.resolve(set, archive, request)?;
        let stream = archive.open_member(&icon.path)?;
        let svg = patch_svg(stream, request.paint())?;
        debug!(
            %set,
            member = %icon.path,
            style = icon.style.as_deref().unwrap_or("-"),
            bytes = svg.len(),
            "loaded icon"
        );
        Ok(svg)
    }

    /// Icon names matching `term`, sorted and duplicate-free.
    ///
    /// Font Awesome searches names, search terms, and aliases from the
    /// metadata; the other sets match file names.
    pub fn search(&self, set: IconSet, archive_path: impl AsRef<Path>, term: &str) -> Result<Vec<String>> {
        let archive = Archive::open(archive_path)?;
        match set {
            IconSet::FontAwesome => Ok(self.metadata.index_for(&archive)?.search(term)),
            IconSet::Feather | IconSet::Phosphor => search_archive(&archive, term),
        }
    }

    /// Every `.svg` member of the archive.
    pub fn list(&self, archive_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let archive = Archive::open(archive_path)?;
        list_icons(&archive)
    }
}
