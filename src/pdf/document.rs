use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object, Stream};

use super::content::{ContentBuilder, compress_data};
use super::fonts::create_font;
use super::resources::page_resources;
use crate::config::FixtureSpec;

const PDF_VERSION: &str = "1.4";
const FONT_RESOURCE: &str = "F1";

/// PDF numbers: integers where the value is whole, reals otherwise
fn number(value: f64) -> Object {
    if value.fract() == 0.0 {
        Object::Integer(value as i64)
    } else {
        Object::Real(value as _)
    }
}

/// Build the single-page fixture document in memory
pub fn build_document(spec: &FixtureSpec) -> Result<Document> {
    let mut doc = Document::with_version(PDF_VERSION);

    // The page tree root is referenced by its page before it exists
    let pages_id = doc.new_object_id();

    let font_id = create_font(&mut doc, spec.font);
    let resources_id = doc.add_object(Object::Dictionary(page_resources(&[(
        FONT_RESOURCE,
        font_id,
    )])));

    let mut builder = ContentBuilder::new(FONT_RESOURCE.to_string());
    builder.add_text(&spec.text, spec.font_size, spec.x, spec.y);

    let content_bytes = compress_data(&builder.build_content_bytes())
        .with_context(|| "Failed to compress page content")?;
    let mut stream_dict = Dictionary::new();
    stream_dict.set("Filter", "FlateDecode");
    let content_id = doc.add_object(Stream::new(stream_dict, content_bytes));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", "Page");
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        vec![
            number(0.0),
            number(0.0),
            number(spec.paper.width),
            number(spec.paper.height),
        ],
    );
    page_dict.set("Resources", Object::Reference(resources_id));
    page_dict.set("Contents", Object::Reference(content_id));
    let page_id = doc.add_object(Object::Dictionary(page_dict));
    log::debug!("Placed text on {} page {:?}", spec.paper.name, page_id);

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", "Pages");
    pages_dict.set("Kids", vec![Object::Reference(page_id)]);
    pages_dict.set("Count", 1_i64);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", "Catalog");
    catalog_dict.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog_dict));

    let mut info_dict = Dictionary::new();
    info_dict.set(
        "Producer",
        Object::string_literal(concat!("pdf_fixture ", env!("CARGO_PKG_VERSION"))),
    );
    info_dict.set("Title", Object::string_literal("Text extraction fixture"));
    let info_id = doc.add_object(Object::Dictionary(info_dict));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    Ok(doc)
}

/// Serialize a document to bytes without touching the filesystem
pub fn serialize(doc: &mut Document) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .with_context(|| "Failed to serialize PDF document")?;
    log::debug!("Serialized document to {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIXTURE_TEXT;

    fn fixture_bytes() -> Vec<u8> {
        let mut doc = build_document(&FixtureSpec::default()).unwrap();
        serialize(&mut doc).unwrap()
    }

    #[test]
    fn test_number() {
        assert!(matches!(number(612.0), Object::Integer(612)));
        assert!(matches!(number(0.5), Object::Real(_)));
    }

    #[test]
    fn test_serialized_header_and_trailer() {
        let bytes = fixture_bytes();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len() - 16..]).to_string();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn test_single_letter_page() {
        let doc = Document::load_mem(&fixture_bytes()).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page = doc.get_dictionary(pages[&1]).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let dims: Vec<f64> = media_box
            .iter()
            .map(|v| v.as_float().unwrap() as f64)
            .collect();
        assert_eq!(dims, vec![0.0, 0.0, 612.0, 792.0]);
    }

    #[test]
    fn test_page_content() {
        let doc = Document::load_mem(&fixture_bytes()).unwrap();
        let page_id = doc.get_pages()[&1];
        let content = doc.get_page_content(page_id).unwrap();
        let content = String::from_utf8(content).unwrap();

        assert!(content.contains("/F1 12 Tf"));
        assert!(content.contains("72 720 Td"));
        assert!(content.contains(&format!("({}) Tj", FIXTURE_TEXT)));
    }

    #[test]
    fn test_font_resource() {
        let doc = Document::load_mem(&fixture_bytes()).unwrap();
        let page_id = doc.get_pages()[&1];
        let page = doc.get_dictionary(page_id).unwrap();
        let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
        let resources = doc.get_dictionary(resources_id).unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        let font_id = fonts.get(b"F1").unwrap().as_reference().unwrap();
        let font = doc.get_dictionary(font_id).unwrap();
        assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
    }

    #[test]
    fn test_extract_text() {
        let doc = Document::load_mem(&fixture_bytes()).unwrap();
        let text = doc.extract_text(&[1]).unwrap();
        assert_eq!(text.trim(), FIXTURE_TEXT);
    }
}
