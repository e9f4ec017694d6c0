//! Answer file template generation
//!
//! Renders a fully commented starter answer file covering every option the
//! installer recognizes, with the example values from the upstream
//! `setup-alpine` documentation. Operators edit it down rather than writing
//! the grammar from scratch.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

use crate::options::InstallerOption;

/// Render the commented starter template as a document string.
pub fn render() -> String {
    let mut out = String::from(
        "# Answer file for setup-alpine\n\
         # Each option pre-seeds one interactive step of the installer.\n\
         # Comment an option out to answer that step interactively instead.\n",
    );

    for option in InstallerOption::iter() {
        out.push('\n');
        out.push_str("# ");
        out.push_str(option.purpose());
        out.push('\n');
        out.push_str(&option.to_string());
        out.push_str("=\"");
        out.push_str(option.example_value());
        out.push_str("\"\n");
    }

    out
}

/// Write the starter template to `path`.
pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render())
        .with_context(|| format!("Failed to write answer file template to {:?}", path))?;
    Ok(())
}
