mod common;

use common::*;
use iconzip::{Archive, Error, IconLoader, IconRequest, IconSet};

#[test]
fn font_awesome_icon_gets_fill() {
    let fixture = Fixture::new();
    let archive = fixture.zip("fa.zip", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    let svg = loader
        .load(
            IconSet::FontAwesome,
            &archive,
            &IconRequest::new("github").fill("#691E7C"),
        )
        .unwrap();

    assert_eq!(root_element(&svg, "fill"), ("svg".to_string(), Some("#691E7C".to_string())));
    assert_eq!(root_element(&svg, "viewBox").1.as_deref(), Some("0 0 496 512"));
    assert!(svg.starts_with(br#"<svg xmlns="http://www.w3.org/2000/svg""#));
}

#[test]
fn font_awesome_search_scenario() {
    let fixture = Fixture::new();
    let archive = fixture.zip("fa.zip", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "git").unwrap(), ["github"]);
    assert_eq!(
        loader.search(IconSet::FontAwesome, &archive, "building").unwrap(),
        ["house", "warehouse"]
    );
    // Substring of a known name always finds it
    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "ware").unwrap(), ["warehouse"]);
    // Search terms and aliases resolve to the canonical name
    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "home-lg-alt").unwrap(), ["house"]);
    assert_eq!(
        loader.search(IconSet::FontAwesome, &archive, "house").unwrap(),
        loader.search(IconSet::FontAwesome, &archive, "house").unwrap()
    );
}

#[test]
fn alias_and_canonical_name_load_the_same_bytes() {
    let fixture = Fixture::new();
    let archive = fixture.directory("fa", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    let canonical = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("house").fill("#000"))
        .unwrap();
    let alias = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("home-alt").fill("#000"))
        .unwrap();
    assert_eq!(canonical, alias);
}

#[test]
fn style_selection() {
    let fixture = Fixture::new();
    let archive = fixture.zip("fa.zip", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    let regular = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("house").style("regular"))
        .unwrap();
    assert_eq!(regular, HOUSE_REGULAR_SVG.as_bytes());

    // First listed style when none is requested
    let default = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("house"))
        .unwrap();
    assert_eq!(default, HOUSE_SOLID_SVG.as_bytes());

    let err = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("github").style("solid"))
        .unwrap_err();
    assert!(matches!(err, Error::IconNotFound { ref name, .. } if name == "github"));
}

#[test]
fn unknown_icon_is_distinct_from_missing_archive() {
    let fixture = Fixture::new();
    let archive = fixture.zip("fa.zip", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    let err = loader
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("gitlab"))
        .unwrap_err();
    assert!(matches!(err, Error::IconNotFound { .. }));

    let err = loader
        .load(IconSet::FontAwesome, fixture.path("gone.zip"), &IconRequest::new("github"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn listed_icon_without_file_is_icon_not_found() {
    let fixture = Fixture::new();
    let mut files = font_awesome_files(FA_ROOT);
    files.retain(|(path, _)| !path.ends_with("warehouse.svg"));
    let archive = fixture.zip("fa.zip", &files);

    let err = IconLoader::new()
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("warehouse"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::IconNotFound { ref style, .. } if style.as_deref() == Some("solid")
    ));
}

#[test]
fn archive_without_metadata_is_not_font_awesome() {
    let fixture = Fixture::new();
    let archive = fixture.zip("feather.zip", &feather_files());

    let err = IconLoader::new()
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("arrow-up-circle"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(ref name) if name == "metadata/icons.json"));
}

#[test]
fn metadata_at_archive_root_is_found() {
    let fixture = Fixture::new();
    let archive = fixture.directory("fa", &font_awesome_files(""));

    let svg = IconLoader::new()
        .load(IconSet::FontAwesome, &archive, &IconRequest::new("github"))
        .unwrap();
    assert_eq!(svg, GITHUB_SVG.as_bytes());
}

#[test]
fn zip_and_directory_give_identical_output() {
    let fixture = Fixture::new();
    let files = font_awesome_files(FA_ROOT);
    let zip = fixture.zip("fa.zip", &files);
    let dir = fixture.directory("fa", &files);
    let loader = IconLoader::new();

    let request = IconRequest::new("warehouse").fill("#1E7C26").stroke("#691E7C");
    assert_eq!(
        loader.load(IconSet::FontAwesome, &zip, &request).unwrap(),
        loader.load(IconSet::FontAwesome, &dir, &request).unwrap()
    );
}

#[test]
fn each_archive_uses_its_own_metadata() {
    let fixture = Fixture::new();
    let first = fixture.zip("fa-first.zip", &font_awesome_files(FA_ROOT));

    let other_svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M1 1"/></svg>"#;
    let second = fixture.zip(
        "fa-second.zip",
        &[
            (
                "metadata/icons.json".to_string(),
                r#"{"github": {"search": {"terms": []}, "free": ["solid"]}}"#.to_string(),
            ),
            ("svgs/solid/github.svg".to_string(), other_svg.to_string()),
        ],
    );

    let loader = IconLoader::new();
    let request = IconRequest::new("github");
    assert_eq!(
        loader.load(IconSet::FontAwesome, &first, &request).unwrap(),
        GITHUB_SVG.as_bytes()
    );
    assert_eq!(
        loader.load(IconSet::FontAwesome, &second, &request).unwrap(),
        other_svg.as_bytes()
    );
    assert_eq!(loader.metadata().len(), 2);

    // Cached entries are reused, and can be dropped per archive
    loader.load(IconSet::FontAwesome, &first, &request).unwrap();
    assert_eq!(loader.metadata().len(), 2);
    assert_eq!(loader.metadata().invalidate(&first), 1);
    assert_eq!(loader.metadata().len(), 1);
}

#[test]
fn edited_directory_metadata_needs_invalidate() {
    let fixture = Fixture::new();
    let archive = fixture.directory("fa", &font_awesome_files(FA_ROOT));
    let loader = IconLoader::new();

    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "storage").unwrap(), ["warehouse"]);

    let icons_json = archive.join(FA_ROOT).join("metadata/icons.json");
    std::fs::write(&icons_json, FA_ICONS_JSON.replace("\"storage\"", "\"depot\"")).unwrap();

    // Same directory entry, same identity: the cached index is still used
    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "storage").unwrap(), ["warehouse"]);

    assert_eq!(loader.metadata().invalidate(&archive), 1);
    assert!(loader.search(IconSet::FontAwesome, &archive, "storage").unwrap().is_empty());
    assert_eq!(loader.search(IconSet::FontAwesome, &archive, "depot").unwrap(), ["warehouse"]);
}

#[test]
fn feather_scenario() {
    let fixture = Fixture::new();
    let archive = fixture.zip("feather.zip", &feather_files());

    let svg = IconLoader::new()
        .load(
            IconSet::Feather,
            &archive,
            &IconRequest::new("arrow-up-circle").fill("#1E7C26").stroke("#691E7C"),
        )
        .unwrap();

    assert_eq!(root_element(&svg, "fill").1.as_deref(), Some("#1E7C26"));
    assert_eq!(root_element(&svg, "stroke").1.as_deref(), Some("#691E7C"));
    assert_eq!(root_element(&svg, "stroke-width").1.as_deref(), Some("2"));
}

#[test]
fn feather_missing_icon() {
    let fixture = Fixture::new();
    let archive = fixture.directory("feather", &feather_files());

    let err = IconLoader::new()
        .load(IconSet::Feather, &archive, &IconRequest::new("arrow-down-circle"))
        .unwrap_err();
    assert!(matches!(err, Error::IconNotFound { ref name, .. } if name == "arrow-down-circle"));
}

#[test]
fn phosphor_styles_and_flat_variant() {
    let fixture = Fixture::new();
    let archive = fixture.zip("phosphor.zip", &phosphor_files());
    let loader = IconLoader::new();

    let regular = loader
        .load(IconSet::Phosphor, &archive, &IconRequest::new("sword"))
        .unwrap();
    assert_eq!(regular, SWORD_SVG.as_bytes());

    let bold = loader
        .load(IconSet::Phosphor, &archive, &IconRequest::new("sword").style("bold"))
        .unwrap();
    assert_eq!(bold, SWORD_BOLD_SVG.as_bytes());

    let flat = loader
        .load(
            IconSet::Phosphor,
            &archive,
            &IconRequest::new("sword").flat(true).fill("#8A185A").stroke("#691E7C"),
        )
        .unwrap();
    assert_eq!(root_element(&flat, "fill").1.as_deref(), Some("#8A185A"));
    assert_eq!(root_element(&flat, "stroke").1.as_deref(), Some("#691E7C"));

    let err = loader
        .load(IconSet::Phosphor, &archive, &IconRequest::new("sword").style("duotone"))
        .unwrap_err();
    assert!(matches!(err, Error::IconNotFound { .. }));
}

#[test]
fn omitted_fill_keeps_existing_attribute() {
    let fixture = Fixture::new();
    let archive = fixture.directory("feather", &feather_files());

    let svg = IconLoader::new()
        .load(IconSet::Feather, &archive, &IconRequest::new("arrow-up-circle"))
        .unwrap();
    assert_eq!(root_element(&svg, "fill").1.as_deref(), Some("none"));
    assert_eq!(svg, FEATHER_SVG.as_bytes());
}

#[test]
fn resolve_reports_member_and_style() {
    let fixture = Fixture::new();
    let archive = Archive::open(fixture.zip("fa.zip", &font_awesome_files(FA_ROOT))).unwrap();

    let icon = IconLoader::new()
        .resolve(IconSet::FontAwesome, &archive, &IconRequest::new("home"))
        .unwrap();
    assert_eq!(icon.path, format!("{FA_ROOT}/svgs/solid/house.svg"));
    assert_eq!(icon.name, "house");
    assert_eq!(icon.style.as_deref(), Some("solid"));
}

#[test]
fn malformed_svg_is_reported() {
    let fixture = Fixture::new();
    let archive = fixture.directory(
        "feather",
        &[("broken.svg".to_string(), "<svg><g></svg>".to_string())],
    );

    let err = IconLoader::new()
        .load(IconSet::Feather, &archive, &IconRequest::new("broken"))
        .unwrap_err();
    assert!(matches!(err, Error::Xml(_) | Error::MalformedSvg(_)));
}
