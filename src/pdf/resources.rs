use lopdf::{Dictionary, Object, ObjectId};

/// Build a page resources dictionary that binds font resource names to
/// font objects.
///
/// Content streams refer to fonts by these names (`/F1 12 Tf`), so every
/// name used in the content must appear here.
pub fn page_resources(fonts: &[(&str, ObjectId)]) -> Dictionary {
    let mut font_resources = Dictionary::new();
    for (name, font_id) in fonts {
        font_resources.set(name.as_bytes().to_vec(), Object::Reference(*font_id));
    }

    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_resources));
    resources.set(
        "ProcSet",
        vec![Object::Name(b"PDF".to_vec()), Object::Name(b"Text".to_vec())],
    );
    resources
}
