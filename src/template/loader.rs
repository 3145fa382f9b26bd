use super::document::ConfigDocument;
use super::value::TemplateValue;
use crate::error::TemplateError;
use std::fs;
use std::path::{Path, PathBuf};

/// The raw template text together with the path it was read from.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub path: PathBuf,
    pub text: String,
}

impl TemplateSource {
    pub fn read(path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Parses the text into a document. No domain validation is performed.
    pub fn parse(&self) -> Result<ConfigDocument, TemplateError> {
        parse_document(&self.text).map_err(|reason| TemplateError::MalformedSource {
            path: self.path.clone(),
            reason,
        })
    }
}

/// Reads and parses the template at `path`.
pub fn load_document(path: &Path) -> Result<(TemplateSource, ConfigDocument), TemplateError> {
    let source = TemplateSource::read(path)?;
    let document = source.parse()?;
    log::info!(
        "Loaded template {} ({} parameters, {} resources)",
        path.display(),
        document.parameters().len(),
        document.resources().len()
    );
    Ok((source, document))
}

fn parse_document(text: &str) -> Result<ConfigDocument, String> {
    if text.trim().is_empty() {
        return Ok(ConfigDocument::default());
    }

    let root: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| format!("YAML parsing error: {}", e))?;

    match TemplateValue::from(root) {
        root @ (TemplateValue::Mapping(_) | TemplateValue::Null) => {
            Ok(ConfigDocument::from_root(root))
        }
        _ => Err("template root must be a mapping".to_string()),
    }
}
