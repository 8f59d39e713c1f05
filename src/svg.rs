//! Recoloring SVG documents.
//!
//! Icons come from untrusted archives, so the document is streamed through
//! `quick-xml` events rather than handed to a full XML processor: entity
//! references are copied verbatim and never expanded, external DTDs are
//! never fetched, and a DOCTYPE that declares entities is refused outright.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// Root attributes to overwrite. `None` leaves the attribute untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Paint<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
}

impl<'a> Paint<'a> {
    pub fn new(fill: Option<&'a str>, stroke: Option<&'a str>) -> Self {
        Self { fill, stroke }
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

/// Read an SVG document and re-serialize its root element with `paint`
/// applied.
///
/// Only the root element is written: the XML declaration, DOCTYPE, and
/// anything outside the root are dropped. Namespace declarations are
/// copied as written, so the default SVG namespace stays unprefixed.
/// Colors are not validated.
pub fn patch_svg<R: BufRead>(input: R, paint: Paint<'_>) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(input);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::DocType(doctype) => {
                if declares_entities(&doctype) {
                    return Err(Error::ForbiddenXml("entity declaration in DOCTYPE".into()));
                }
            }
            Event::Start(start) if depth == 0 => {
                check_single_root(&mut seen_root)?;
                depth = 1;
                writer.write_event(Event::Start(patch_root(&start, paint)?))?;
            }
            Event::Empty(start) if depth == 0 => {
                check_single_root(&mut seen_root)?;
                writer.write_event(Event::Empty(patch_root(&start, paint)?))?;
            }
            Event::Start(start) => {
                depth += 1;
                writer.write_event(Event::Start(start))?;
            }
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                writer.write_event(Event::End(end))?;
            }
            event if depth > 0 => writer.write_event(event)?,
            // Prolog and epilog: declaration, comments, PIs, whitespace
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::MalformedSvg("no root element".into()));
    }
    if depth > 0 {
        return Err(Error::MalformedSvg("unterminated root element".into()));
    }
    Ok(writer.into_inner())
}

fn check_single_root(seen_root: &mut bool) -> Result<()> {
    if *seen_root {
        return Err(Error::MalformedSvg("multiple root elements".into()));
    }
    *seen_root = true;
    Ok(())
}

fn declares_entities(doctype: &[u8]) -> bool {
    doctype.windows(8).any(|w| w == b"<!ENTITY")
}

/// Copy of `start` with `fill`/`stroke` replaced in place or appended.
fn patch_root(start: &BytesStart<'_>, paint: Paint<'_>) -> Result<BytesStart<'static>> {
    if paint.is_empty() {
        return Ok(start.clone().into_owned());
    }

    let mut patched = start.clone().into_owned();
    patched.clear_attributes();

    let mut fill = paint.fill;
    let mut stroke = paint.stroke;
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let replacement = match attr.key.as_ref() {
            b"fill" => fill.take().map(|value| ("fill", value)),
            b"stroke" => stroke.take().map(|value| ("stroke", value)),
            _ => None,
        };
        match replacement {
            Some(pair) => patched.push_attribute(pair),
            None => patched.push_attribute(attr),
        }
    }

    if let Some(value) = fill {
        patched.push_attribute(("fill", value));
    }
    if let Some(value) = stroke {
        patched.push_attribute(("stroke", value));
    }
    Ok(patched)
}
