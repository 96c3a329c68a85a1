use lopdf::{Dictionary, Document, Object, ObjectId};

/// Add a standard Type1 font to the document and return its object id.
///
/// The 14 standard fonts need no embedded program, only the base name.
pub fn create_font(doc: &mut Document, base_font: &str) -> ObjectId {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", "Font");
    font_dict.set("Subtype", "Type1");
    font_dict.set("BaseFont", base_font);
    font_dict.set("Encoding", "WinAnsiEncoding");
    doc.add_object(Object::Dictionary(font_dict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_font() {
        let mut doc = Document::with_version("1.4");
        let font_id = create_font(&mut doc, "Helvetica");

        let font = doc.get_dictionary(font_id).unwrap();
        assert_eq!(font.get(b"Type").unwrap().as_name().unwrap(), b"Font");
        assert_eq!(font.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
        assert_eq!(
            font.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }
}
