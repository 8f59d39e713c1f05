//! Feather icons: one flat folder of `<name>.svg` files.

use crate::archive::Archive;
use crate::error::{Error, Result};

use super::{ResolvedIcon, locate};

/// Candidate member path for a Feather icon.
///
/// Feather has no styles, so asking for one is an icon lookup failure.
pub fn resolve_path(name: &str, style: Option<&str>) -> Result<ResolvedIcon> {
    if style.is_some() {
        return Err(Error::icon_not_found(name, style));
    }
    Ok(ResolvedIcon {
        path: format!("{name}.svg"),
        name: name.to_string(),
        style: None,
    })
}

pub fn resolve(archive: &Archive, name: &str, style: Option<&str>) -> Result<ResolvedIcon> {
    let candidate = resolve_path(name, style)?;
    locate(archive, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_flat_path() {
        let icon = resolve_path("arrow-up-circle", None).unwrap();
        assert_eq!(icon.path, "arrow-up-circle.svg");
        assert_eq!(icon.name, "arrow-up-circle");
    }

    #[test]
    fn styles_are_not_supported() {
        assert!(matches!(
            resolve_path("arrow-up-circle", Some("solid")),
            Err(Error::IconNotFound { .. })
        ));
    }
}
