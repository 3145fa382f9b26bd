use crate::error::Result;
use crate::template::{ConfigDocument, LineIndex};

pub mod markdown;
pub mod parameters;
pub mod report;
pub mod resources;

pub use parameters::{organize_parameters, ParameterGroup, ParameterRow};
pub use report::{assemble_report, Report, ReportSettings};
pub use resources::{describe_resource, describe_resources, ResourceRow};

/// Generate the System Requirements document for a parsed template
pub fn generate_requirements(
    document: &ConfigDocument,
    index: &LineIndex,
    settings: &ReportSettings,
) -> Result<String> {
    Ok(assemble_report(document, index, settings)?.render())
}
