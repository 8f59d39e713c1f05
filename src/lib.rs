//! # iconzip
//!
//! Locate and recolor SVG icons inside icon-font distributions.
//!
//! Icon sets such as Font Awesome, Feather, and Phosphor ship as zip files
//! full of SVGs. This crate reads them either still zipped or unpacked into
//! a directory, resolves an icon name (and style, and alias) to the right
//! member, and returns the SVG with its root `fill`/`stroke` rewritten.
//!
//! ## Features
//!
//! - Zip archives (STORED and DEFLATE, ZIP64) and plain directories behind one [`Archive`] type
//! - Recursive-then-shallow member lookup with glob patterns
//! - Font Awesome resolution through `metadata/icons.json`: styles, aliases, and search
//! - Per-archive metadata cache owned by an [`IconLoader`]
//! - Streaming SVG patching that never expands XML entities
//!
//! ## Example
//!
//! ```no_run
//! use iconzip::{IconLoader, IconRequest, IconSet};
//!
//! let loader = IconLoader::new();
//!
//! let github = loader.load(
//!     IconSet::FontAwesome,
//!     "fontawesome-free-6.5.1-desktop.zip",
//!     &IconRequest::new("github").fill("#691E7C"),
//! )?;
//!
//! let sword = loader.load(
//!     IconSet::Phosphor,
//!     "phosphor-icons.zip",
//!     &IconRequest::new("sword").flat(true).fill("#8A185A").stroke("#691E7C"),
//! )?;
//!
//! for name in loader.search(IconSet::FontAwesome, "fontawesome-free-6.5.1-desktop.zip", "git")? {
//!     println!("{name}");
//! }
//! # let _ = (github, sword);
//! # Ok::<(), iconzip::Error>(())
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod icons;
pub mod io;
pub mod locator;
pub mod metadata;
pub mod svg;
pub mod zip;

pub use archive::{Archive, ArchiveEntry, MemberStream};
pub use cli::Cli;
pub use error::{Error, Result};
pub use icons::{IconLoader, IconRequest, IconSet, ResolvedIcon};
pub use io::{LocalFileReader, ReadAt};
pub use locator::{find_member, open_resource};
pub use metadata::{IconMetadataIndex, MetadataCache};
pub use svg::{Paint, patch_svg};
pub use zip::{ZipExtractor, ZipFileEntry};
