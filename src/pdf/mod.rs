//! Low-level PDF assembly on top of `lopdf`.

mod content;
mod document;
mod fonts;
mod resources;

pub use document::{build_document, serialize};
