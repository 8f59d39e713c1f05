//! Phosphor icons: `SVGs/<style>/<name>.svg`, or `SVGs Flat/...` for the
//! flat variant.

use crate::archive::Archive;
use crate::error::Result;

use super::{ResolvedIcon, locate};

pub const DEFAULT_STYLE: &str = "regular";

const FOLDER: &str = "SVGs";
const FLAT_FOLDER: &str = "SVGs Flat";

/// Candidate member path for a Phosphor icon.
pub fn resolve_path(name: &str, style: Option<&str>, flat: bool) -> ResolvedIcon {
    let style = style.unwrap_or(DEFAULT_STYLE);
    let folder = if flat { FLAT_FOLDER } else { FOLDER };
    ResolvedIcon {
        path: format!("{folder}/{style}/{name}.svg"),
        name: name.to_string(),
        style: Some(style.to_string()),
    }
}

pub fn resolve(archive: &Archive, name: &str, style: Option<&str>, flat: bool) -> Result<ResolvedIcon> {
    locate(archive, resolve_path(name, style, flat))
}
