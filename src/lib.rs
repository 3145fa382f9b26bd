//! # cfn-docgen
//!
//! Generates a "System Requirements" Markdown reference from a CloudFormation
//! template: a narrative overview, a grouped parameter table and a resource
//! table, each entry linked to the line it is declared on.
//!
//! ## Pipeline
//!
//! - **Load**: parse the YAML template into a [`template::ConfigDocument`]
//! - **Index**: scan the raw text for declaration lines ([`template::LineIndex`])
//! - **Organize**: group parameters by the console interface metadata
//! - **Describe**: derive a one-line description per resource
//! - **Assemble**: compose the sections into a [`generator::Report`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use cfn_docgen::{config::types::Config, generate_report};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generated = generate_report(Path::new("codeocean.template.yaml"), &Config::default())?;
//! println!("{}", generated.report.render());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod generator;
pub mod template;

use common::file_utils;
use config::types::Config;
use generator::{Report, ReportSettings};
use std::path::Path;
use template::LineIndex;

// Re-export commonly used types and functions
pub use error::{DocGenError, Result};
pub use generator::generate_requirements;
pub use template::{load_document, ConfigDocument};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A report together with the counts reported to the user.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: Report,
    pub parameter_count: usize,
    pub resource_count: usize,
}

/// Runs the whole pipeline for the template at `template_path`. Nothing is written.
pub fn generate_report(template_path: &Path, config: &Config) -> Result<GeneratedReport> {
    let settings = report_settings(template_path, config)?;
    let (source, document) = load_document(template_path)?;
    let index = LineIndex::build(&source.text);
    let declared = document.parameters().len() + document.resources().len();
    if index.is_empty() && declared > 0 {
        log::warn!(
            "No declaration lines recognised in {}; names are rendered without links",
            source.path.display()
        );
    } else {
        log::debug!("{} declarations linked to source lines", index.len());
    }
    let report = generator::assemble_report(&document, &index, &settings)?;

    Ok(GeneratedReport {
        report,
        parameter_count: document.parameters().len(),
        resource_count: document.resources().len(),
    })
}

/// Presentation settings for `template_path` derived from the configuration.
pub fn report_settings(template_path: &Path, config: &Config) -> Result<ReportSettings> {
    let system_overview = match &config.report.system_overview {
        Some(path) => file_utils::read_narrative(path)?,
        None => generator::report::DEFAULT_SYSTEM_OVERVIEW.to_string(),
    };

    Ok(ReportSettings::from_config(
        &config.report,
        file_utils::template_link_name(template_path),
        system_overview,
    ))
}
