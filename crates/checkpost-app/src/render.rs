//! Render use case and output helpers.

use anyhow::Context;
use camino::Utf8Path;
use checkpost_types::ReportInputs;

/// Render the comment body for already-loaded inputs.
pub fn run_render(inputs: &ReportInputs) -> String {
    checkpost_render::render_report(inputs)
}

/// Write text to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
