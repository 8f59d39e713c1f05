#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use quick_xml::Reader;
use quick_xml::events::Event;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub const FA_ROOT: &str = "fontawesome-free-6.5.1-desktop";

pub const FA_ICONS_JSON: &str = r#"{
  "github": {
    "changes": ["2.0.0", "5.0.0"],
    "search": { "terms": ["git", "octocat"] },
    "free": ["brands"]
  },
  "house": {
    "aliases": { "names": ["home", "home-alt", "home-lg-alt"] },
    "search": { "terms": ["abode", "building", "home"] },
    "free": ["solid", "regular"]
  },
  "warehouse": {
    "search": { "terms": ["building", "storage"] },
    "free": ["solid"]
  }
}"#;

pub const GITHUB_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 496 512"><!--! Font Awesome Free 6.5.1 --><path d="M165.9 397.4c0 2-2.3 3.6-5.2 3.6"/></svg>"#;
pub const HOUSE_SOLID_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 576 512"><path d="M575.8 255.5"/></svg>"#;
pub const HOUSE_REGULAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 576 512"><path d="M303.5 5.7"/></svg>"#;
pub const WAREHOUSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 512"><path d="M0 488V171.3"/></svg>"#;

pub const FEATHER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"/><polyline points="16 12 12 8 8 12"/></svg>"#;

pub const SWORD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><rect width="256" height="256" fill="none"/><polyline points="128 64 152 32 216 32"/></svg>"#;
pub const SWORD_FLAT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path d="M216,32H152"/></svg>"#;
pub const SWORD_BOLD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path d="M224,20H152"/></svg>"#;

/// Font Awesome members, nested under the distribution's top-level folder.
pub fn font_awesome_files(root: &str) -> Vec<(String, String)> {
    let prefix = if root.is_empty() {
        String::new()
    } else {
        format!("{root}/")
    };
    [
        ("metadata/icons.json", FA_ICONS_JSON),
        ("svgs/brands/github.svg", GITHUB_SVG),
        ("svgs/solid/house.svg", HOUSE_SOLID_SVG),
        ("svgs/regular/house.svg", HOUSE_REGULAR_SVG),
        ("svgs/solid/warehouse.svg", WAREHOUSE_SVG),
        ("LICENSE.txt", "Font Awesome Free License"),
    ]
    .into_iter()
    .map(|(path, body)| (format!("{prefix}{path}"), body.to_string()))
    .collect()
}

pub fn phosphor_files() -> Vec<(String, String)> {
    [
        ("SVGs/regular/sword.svg", SWORD_SVG),
        ("SVGs/bold/sword.svg", SWORD_BOLD_SVG),
        ("SVGs Flat/regular/sword.svg", SWORD_FLAT_SVG),
    ]
    .into_iter()
    .map(|(path, body)| (path.to_string(), body.to_string()))
    .collect()
}

pub fn feather_files() -> Vec<(String, String)> {
    vec![
        ("arrow-up-circle.svg".to_string(), FEATHER_SVG.to_string()),
        ("README.md".to_string(), "# Feather".to_string()),
    ]
}

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a deflated zip without explicit directory entries.
    pub fn zip(&self, name: &str, files: &[(String, String)]) -> PathBuf {
        let path = self.path(name);
        let mut writer = zip::ZipWriter::new(fs::File::create(&path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (member, body) in files {
            writer.start_file(member.as_str(), options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    pub fn directory(&self, name: &str, files: &[(String, String)]) -> PathBuf {
        let root = self.path(name);
        for (member, body) in files {
            let path = root.join(member);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        fs::create_dir_all(&root).unwrap();
        root
    }

    pub fn text_file(&self, name: &str, body: &str) -> PathBuf {
        self.bytes_file(name, body.as_bytes())
    }

    pub fn bytes_file(&self, name: &str, body: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, body).unwrap();
        path
    }
}

/// Root element name and the value of one of its attributes.
pub fn root_element(svg: &[u8], attribute: &str) -> (String, Option<String>) {
    let mut reader = Reader::from_reader(svg);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(e) | Event::Empty(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                let value = e
                    .try_get_attribute(attribute)
                    .unwrap()
                    .map(|a| a.unescape_value().unwrap().into_owned());
                return (name, value);
            }
            Event::Eof => panic!("no root element"),
            _ => {}
        }
        buf.clear();
    }
}
