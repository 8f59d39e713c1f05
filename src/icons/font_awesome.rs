//! Font Awesome icons, resolved through `metadata/icons.json`.
//!
//! Styles live in `svgs/<style>/<name>.svg`. Which styles an icon ships
//! with, and which aliases point at it, come from the metadata index.

use tracing::debug;

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::metadata::IconMetadataIndex;

use super::{ResolvedIcon, locate};

/// Candidate member path for a Font Awesome icon.
///
/// `name` may be an alias. Style availability is looked up under `name`
/// and, failing that, under the canonical name it aliases. Without a
/// `style` the first style listed in the metadata is used.
pub fn resolve_path(
    index: &IconMetadataIndex,
    name: &str,
    style: Option<&str>,
) -> Result<ResolvedIcon> {
    let canonical = index.canonical_name(name);
    let available = index
        .styles(name)
        .or_else(|| index.styles(canonical))
        .ok_or_else(|| Error::icon_not_found(name, style))?;

    let style = match style {
        Some(style) => available
            .iter()
            .find(|s| s.as_str() == style)
            .ok_or_else(|| Error::icon_not_found(name, Some(style)))?,
        None => available
            .first()
            .ok_or_else(|| Error::icon_not_found(name, None))?,
    };

    if canonical != name {
        debug!(alias = name, canonical, "resolved icon alias");
    }
    Ok(ResolvedIcon {
        path: format!("svgs/{style}/{canonical}.svg"),
        name: canonical.to_string(),
        style: Some(style.clone()),
    })
}

pub fn resolve(
    archive: &Archive,
    index: &IconMetadataIndex,
    name: &str,
    style: Option<&str>,
) -> Result<ResolvedIcon> {
    locate(archive, resolve_path(index, name, style)?)
}
