//! Error types shared by every layer of the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while resolving or loading an icon.
#[derive(Debug, Error)]
pub enum Error {
    /// The archive, a member inside it, or the metadata file does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The path exists but is neither a directory nor a zip file.
    #[error("not a directory or zip archive: {}", .0.display())]
    InvalidArchive(PathBuf),

    /// The archive is readable but the name/style combination has no file.
    #[error("icon not found: {name}{}", style_suffix(.style))]
    IconNotFound { name: String, style: Option<String> },

    /// Zip structures are inconsistent or use an unsupported feature.
    #[error("corrupt zip archive: {0}")]
    CorruptArchive(String),

    /// `icons.json` could not be decoded.
    #[error("malformed icon metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("malformed svg: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally unusable SVG (no root element, unterminated root).
    #[error("malformed svg: {0}")]
    MalformedSvg(String),

    /// The document uses an XML feature that is refused for untrusted input.
    #[error("forbidden xml construct: {0}")]
    ForbiddenXml(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn style_suffix(style: &Option<String>) -> String {
    match style {
        Some(style) => format!(" (style: {style})"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn icon_not_found(name: &str, style: Option<&str>) -> Self {
        Error::IconNotFound {
            name: name.to_string(),
            style: style.map(str::to_string),
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptArchive(reason.into())
    }

    /// Whether this error means "something was missing" rather than "something was broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::IconNotFound { .. })
    }
}
