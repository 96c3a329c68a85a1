//! Fixed description of the fixture document.
//!
//! Everything here is a constant: the page size, the font, where the text
//! goes and what it says. Coordinates are PDF points measured from the
//! bottom-left corner of the page.

/// Name of the file written by the command-line entry point.
pub const DEFAULT_OUTPUT: &str = "test.pdf";

/// Text drawn on the fixture page.
pub const FIXTURE_TEXT: &str = "This is a test PDF document created for text extraction testing.";

/// A named paper size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    /// US Letter, 8.5 x 11 inches
    pub const LETTER: PaperSize = PaperSize {
        name: "Letter",
        width: 8.5 * 72.0,
        height: 11.0 * 72.0,
    };
}

/// Everything needed to draw the single text run of a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSpec {
    pub paper: PaperSize,
    /// PostScript name of a standard Type1 font
    pub font: &'static str,
    pub font_size: f64,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl Default for FixtureSpec {
    fn default() -> Self {
        Self {
            paper: PaperSize::LETTER,
            font: "Helvetica",
            font_size: 12.0,
            // one inch in from the left, one inch down from the top
            x: 72.0,
            y: 720.0,
            text: FIXTURE_TEXT.to_string(),
        }
    }
}
