//! Attaching stamps to existing pages
//!
//! Pages keep their original content streams. The stamp is appended as a new
//! stream, with the original content wrapped in `q`/`Q` so whatever graphics
//! state it leaves behind is popped before the stamp draws.

use super::color::Rgb;
use super::content::{StampStyle, TextDraw, stamp_operations};
use crate::types::{FolioError, PageGeometry, Result};
use crate::units::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT, STAMP_BASE_FONT};
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Page tree depth after which inherited attribute lookup gives up
const MAX_INHERIT_DEPTH: usize = 32;

/// Base resource names; a numeric suffix is added if a page already uses them
const FONT_RESOURCE_BASE: &str = "FolioF";
const GS_RESOURCE_BASE: &str = "FolioGS";

// =============================================================================
// Page Geometry
// =============================================================================

/// A page's MediaBox in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl MediaBox {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new((self.urx - self.llx).abs(), (self.ury - self.lly).abs())
    }

    /// Lower-left corner, which user space coordinates are measured from
    pub fn origin(&self) -> (f64, f64) {
        (self.llx.min(self.urx), self.lly.min(self.ury))
    }
}

impl Default for MediaBox {
    fn default() -> Self {
        Self {
            llx: 0.0,
            lly: 0.0,
            urx: DEFAULT_PAGE_WIDTH_PT,
            ury: DEFAULT_PAGE_HEIGHT_PT,
        }
    }
}

/// Get a page's MediaBox, following inheritance through the page tree.
///
/// Pages without a usable MediaBox are treated as US Letter.
pub fn get_media_box(doc: &Document, page_id: ObjectId) -> MediaBox {
    let Some(obj) = inherited_attribute(doc, page_id, b"MediaBox") else {
        return MediaBox::default();
    };

    let array = match resolve(doc, obj) {
        Some(Object::Array(array)) if array.len() == 4 => array,
        _ => return MediaBox::default(),
    };

    let values: Vec<f64> = array.iter().filter_map(extract_number).collect();
    if values.len() != 4 {
        return MediaBox::default();
    }

    MediaBox {
        llx: values[0],
        lly: values[1],
        urx: values[2],
        ury: values[3],
    }
}

// =============================================================================
// Shared Stamp Resources
// =============================================================================

/// Font and graphics-state objects shared by every stamped page of a document
#[derive(Debug, Clone, Copy)]
pub struct StampResources {
    pub font_id: ObjectId,
    pub gs_id: ObjectId,
}

impl StampResources {
    /// Add the stamp font and an ExtGState carrying `opacity` to the document
    pub fn install(doc: &mut Document, opacity: f64) -> Self {
        let mut font = Dictionary::new();
        font.set("Type", Object::Name(b"Font".to_vec()));
        font.set("Subtype", Object::Name(b"Type1".to_vec()));
        font.set("BaseFont", Object::Name(STAMP_BASE_FONT.as_bytes().to_vec()));
        font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let font_id = doc.add_object(font);

        let mut gs = Dictionary::new();
        gs.set("Type", Object::Name(b"ExtGState".to_vec()));
        gs.set("ca", Object::Real(opacity as f32));
        gs.set("CA", Object::Real(opacity as f32));
        let gs_id = doc.add_object(gs);

        Self { font_id, gs_id }
    }
}

// =============================================================================
// Page Stamping
// =============================================================================

/// Draw `draws` on top of the existing content of `page_id`
pub fn append_page_stamp(
    doc: &mut Document,
    page_id: ObjectId,
    shared: &StampResources,
    draws: &[TextDraw],
    font_size: f64,
    color: Rgb,
) -> Result<()> {
    let page_dict = doc.get_dictionary(page_id).map_err(render_err)?.clone();

    // Resources: start from the effective (possibly inherited) dictionary
    let mut resources = inherited_attribute(doc, page_id, b"Resources")
        .and_then(|obj| resolve_dict(doc, obj))
        .unwrap_or_else(Dictionary::new);

    let mut fonts = resources
        .get(b"Font")
        .ok()
        .and_then(|obj| resolve_dict(doc, obj))
        .unwrap_or_else(Dictionary::new);
    let font_resource = unique_resource_name(&fonts, FONT_RESOURCE_BASE);
    fonts.set(font_resource.as_bytes(), Object::Reference(shared.font_id));
    resources.set("Font", Object::Dictionary(fonts));

    let mut states = resources
        .get(b"ExtGState")
        .ok()
        .and_then(|obj| resolve_dict(doc, obj))
        .unwrap_or_else(Dictionary::new);
    let gs_resource = unique_resource_name(&states, GS_RESOURCE_BASE);
    states.set(gs_resource.as_bytes(), Object::Reference(shared.gs_id));
    resources.set("ExtGState", Object::Dictionary(states));

    let style = StampStyle {
        font_resource,
        gs_resource,
        font_size,
        color,
    };
    let operations = stamp_operations(draws, &style)?;
    let stamp_bytes = Content { operations }.encode().map_err(render_err)?;

    // Contents: [q] + original streams + [Q stamp]
    let existing = existing_content_refs(doc, &page_dict);
    let mut contents = Vec::with_capacity(existing.len() + 2);
    let stamp_stream = if existing.is_empty() {
        stamp_bytes
    } else {
        let open_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
        contents.push(Object::Reference(open_id));
        contents.extend(existing);
        let mut bytes = b"\nQ\n".to_vec();
        bytes.extend(stamp_bytes);
        bytes
    };
    let stamp_id = doc.add_object(Stream::new(Dictionary::new(), stamp_stream));
    contents.push(Object::Reference(stamp_id));

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(render_err)?;
    page.set("Resources", Object::Dictionary(resources));
    page.set("Contents", Object::Array(contents));

    Ok(())
}

// =============================================================================
// Helper Functions
// =============================================================================

fn render_err(e: lopdf::Error) -> FolioError {
    FolioError::Render(e.to_string())
}

/// Look up an inheritable page attribute, walking `/Parent` links
fn inherited_attribute<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_INHERIT_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value);
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

/// Follow a reference (one level) to the object it points at
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Resolve an object to an owned dictionary
fn resolve_dict(doc: &Document, obj: &Object) -> Option<Dictionary> {
    match resolve(doc, obj)? {
        Object::Dictionary(dict) => Some(dict.clone()),
        Object::Stream(stream) => Some(stream.dict.clone()),
        _ => None,
    }
}

/// References to the page's current content streams, in drawing order
fn existing_content_refs(doc: &Document, page_dict: &Dictionary) -> Vec<Object> {
    match page_dict.get(b"Contents") {
        Ok(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(items)) => items.clone(),
            Ok(_) => vec![Object::Reference(*id)],
            Err(_) => Vec::new(),
        },
        Ok(Object::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// First of `base`, `base1`, `base2`, ... not already used in `dict`
fn unique_resource_name(dict: &Dictionary, base: &str) -> String {
    if !dict.has(base.as_bytes()) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{}{}", base, n))
        .find(|name| !dict.has(name.as_bytes()))
        .unwrap_or_else(|| base.to_string())
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}
