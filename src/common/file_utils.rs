use crate::error::{DocGenError, GeneratorError};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the report goes: the explicit output path, or `file_name` next to the template.
pub fn resolve_output_path(template: &Path, output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => template
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(file_name),
    }
}

/// Name used in source links when none is configured.
pub fn template_link_name(template: &Path) -> String {
    template
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| template.display().to_string())
}

/// Replaces the contents of `path` with `content`.
pub fn write_report(path: &Path, content: &str) -> Result<(), DocGenError> {
    fs::write(path, content).map_err(|source| DocGenError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Reads a Markdown file supplied as replacement narrative.
pub fn read_narrative(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|source| GeneratorError::NarrativeUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
