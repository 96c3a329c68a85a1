//! PDF content stream generation.
//!
//! This module provides:
//! - Text placement with a standard font
//! - PDF literal string escaping
//! - zlib compression for content streams

use anyhow::Result;
use std::io::Write;

/// Builder for a page content stream
pub struct ContentBuilder {
    content_parts: Vec<String>,
    font_name: String,
}

impl ContentBuilder {
    /// Create a new ContentBuilder drawing with the given font resource name
    pub fn new(font_name: String) -> Self {
        Self {
            content_parts: Vec::new(),
            font_name,
        }
    }

    /// Draw a single line of text with its baseline starting at (x, y)
    pub fn add_text(&mut self, value: &str, font_size: f64, x: f64, y: f64) {
        let escaped_value = escape_pdf_string(value);
        self.content_parts.push(format!(
            "q BT 0 g /{} {} Tf {} {} Td ({}) Tj ET Q ",
            self.font_name, font_size, x, y, escaped_value
        ));
    }

    /// Build the final content bytes
    pub fn build_content_bytes(&self) -> Vec<u8> {
        self.content_parts.join("").into_bytes()
    }
}

/// Escape special characters in PDF strings
///
/// Latin-1 characters are written as octal escapes, which WinAnsiEncoding
/// maps to the same glyphs. Anything outside that range becomes `?`.
pub fn escape_pdf_string(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            '(' => result.push_str(r"\("),
            ')' => result.push_str(r"\)"),
            '\\' => result.push_str(r"\\"),
            '\n' => result.push_str(r"\n"),
            '\r' => result.push_str(r"\r"),
            '\t' => result.push_str(r"\t"),
            ' '..='~' => result.push(c),
            '\u{A0}'..='\u{FF}' => result.push_str(&format!("\\{:03o}", c as u32)),
            _ => result.push('?'),
        }
    }
    result
}

/// Compress data using zlib/flate2
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
