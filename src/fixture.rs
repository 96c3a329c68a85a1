use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::FixtureSpec;
use crate::pdf::{build_document, serialize};

/// Write the standard text-extraction fixture to `path`.
///
/// Any existing file at `path` is replaced. The containing directory must
/// already exist. Prints a confirmation line naming the file once it has
/// been written.
pub fn create_fixture(path: &Path) -> Result<()> {
    write_fixture(&FixtureSpec::default(), path)?;
    println!("{}", confirmation(path));
    Ok(())
}

fn confirmation(path: &Path) -> String {
    format!("Created PDF file: {}", path.display())
}

/// Render `spec` and write it to `path`.
///
/// The document is serialized completely before the file is opened, so a
/// serialization failure leaves `path` untouched.
pub fn write_fixture(spec: &FixtureSpec, path: &Path) -> Result<()> {
    let mut doc = build_document(spec)?;
    let bytes = serialize(&mut doc)?;

    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write PDF file at {:?}", path))?;
    log::info!("Wrote {} bytes to {:?}", bytes.len(), path);

    Ok(())
}
