use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGenError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Report generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write report to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template file not found: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing YAML template {}: {reason}", .path.display())]
    MalformedSource { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Template rendering failed: {0}")]
    TemplateRendering(String),

    #[error("Narrative file {} could not be read: {source}", .path.display())]
    NarrativeUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file {} could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing failed for {}: {reason}", .path.display())]
    ParsingFailed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, DocGenError>;
