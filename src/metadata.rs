//! Font Awesome icon metadata (`metadata/icons.json`) and its cache.
//!
//! The metadata document maps every canonical icon name to its search
//! terms, aliases, and the styles shipped in the free distribution:
//!
//! ```json
//! {
//!   "github": {
//!     "search": { "terms": ["octocat"] },
//!     "aliases": { "names": ["github-alt-legacy"] },
//!     "free": ["brands"]
//!   }
//! }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::archive::{Archive, ArchiveId};
use crate::error::Result;
use crate::locator::open_member_matching;

/// Location of the metadata document inside a Font Awesome archive
pub const METADATA_PATH: &str = "metadata/icons.json";

#[derive(Debug, Default, Deserialize)]
struct IconEntry {
    #[serde(default)]
    search: Option<SearchTerms>,
    #[serde(default)]
    aliases: Option<Aliases>,
    #[serde(default)]
    free: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchTerms {
    #[serde(default)]
    terms: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct Aliases {
    #[serde(default)]
    names: Option<Vec<String>>,
}

/// Lookup tables derived from `icons.json`.
#[derive(Debug, Default)]
pub struct IconMetadataIndex {
    /// canonical name -> free styles, in document order
    styles: HashMap<String, Vec<String>>,
    /// lowercased search term -> canonical names
    terms: HashMap<String, BTreeSet<String>>,
    /// lowercased alias -> canonical name
    aliases: HashMap<String, String>,
}

impl IconMetadataIndex {
    /// Parse a metadata document.
    ///
    /// Entries are visited in document order, so when two icons claim the
    /// same alias the later one wins.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_reader(reader)?;

        let mut index = Self::default();
        for (name, value) in document {
            let entry: IconEntry = serde_json::from_value(value)?;

            for term in entry.search.and_then(|s| s.terms).unwrap_or_default() {
                index
                    .terms
                    .entry(term.to_lowercase())
                    .or_default()
                    .insert(name.clone());
            }
            for alias in entry.aliases.and_then(|a| a.names).unwrap_or_default() {
                index.aliases.insert(alias.to_lowercase(), name.clone());
            }
            index.styles.insert(name, entry.free.unwrap_or_default());
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Canonical names, unordered
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// The canonical name `name` is an alias of, or `name` itself.
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .get(&name.to_lowercase())
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Free styles of a canonical icon, in document order.
    pub fn styles(&self, name: &str) -> Option<&[String]> {
        self.styles.get(name).map(Vec::as_slice)
    }

    /// Canonical names matching `term`, sorted and duplicate-free.
    ///
    /// A name matches when it contains `term` (ignoring case), when `term`
    /// is one of its search terms, or when `term` is one of its aliases.
    /// Term and alias keys are compared exactly.
    pub fn search(&self, term: &str) -> Vec<String> {
        let needle = term.to_lowercase();
        let mut found: BTreeSet<&str> = self
            .names()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect();

        if let Some(names) = self.terms.get(term) {
            found.extend(names.iter().map(String::as_str));
        }
        if let Some(name) = self.aliases.get(term) {
            found.insert(name.as_str());
        }

        found.into_iter().map(str::to_string).collect()
    }
}

/// One archive's index, loaded at most once.
type Slot = Arc<Mutex<Option<Arc<IconMetadataIndex>>>>;

/// Metadata indexes keyed by archive identity.
///
/// Each archive's `icons.json` is parsed on first use and shared
/// afterwards. The map lock is held only to find an archive's slot; the
/// slot lock is held while loading, so concurrent first use of one archive
/// parses it once. A failed load leaves the slot empty.
#[derive(Default)]
pub struct MetadataCache {
    entries: Mutex<HashMap<ArchiveId, Slot>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The metadata index for `archive`, loading it if needed.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when the
    /// archive has no `metadata/icons.json`, i.e. it is not a Font Awesome
    /// archive.
    pub fn index_for(&self, archive: &Archive) -> Result<Arc<IconMetadataIndex>> {
        let slot = Arc::clone(self.entries.lock().entry(archive.id().clone()).or_default());

        let mut loaded = slot.lock();
        if let Some(index) = loaded.as_ref() {
            trace!(archive = %archive.id().path().display(), "metadata cache hit");
            return Ok(Arc::clone(index));
        }

        let stream = open_member_matching(archive, METADATA_PATH)?;
        let member = stream.path().to_string();
        let index = Arc::new(IconMetadataIndex::from_reader(stream)?);
        debug!(
            archive = %archive.id().path().display(),
            %member,
            icons = index.len(),
            aliases = index.aliases.len(),
            terms = index.terms.len(),
            "loaded icon metadata"
        );

        *loaded = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Drop every cached index for the archive at `path`.
    ///
    /// Returns how many loaded entries were removed.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let removed: Vec<Slot> = {
            let mut entries = self.entries.lock();
            let ids: Vec<ArchiveId> = entries
                .keys()
                .filter(|id| id.path() == path.as_path())
                .cloned()
                .collect();
            ids.iter().filter_map(|id| entries.remove(id)).collect()
        };
        removed.iter().filter(|slot| slot.lock().is_some()).count()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of archives whose metadata is loaded
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = self.entries.lock().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
