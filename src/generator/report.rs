use super::markdown::{escape_cell, label_row, source_link, table_row};
use super::parameters::{organize_parameters, ParameterGroup};
use super::resources::{describe_resources, ResourceRow};
use crate::cli::DEFAULT_TEMPLATE;
use crate::config::types::ReportConfig;
use crate::error::{GeneratorError, Result};
use crate::template::{ConfigDocument, LineIndex};
use tera::{Context, Tera};

/// Built-in architecture narrative.
pub const DEFAULT_SYSTEM_OVERVIEW: &str = include_str!("templates/system_overview.md");

const FRONT_MATTER_TEMPLATE: &str = "# {{ title }}

## Overview

This document provides a comprehensive overview of the system requirements and infrastructure components defined in the {{ system_name }} CloudFormation template. It serves as a reference for understanding the deployment architecture, resource dependencies, and configuration parameters required for the {{ system_name }} system.

The full resource configuration, including all properties, dependencies, and conditions, is available in the CloudFormation template file. This document provides a high-level summary with direct links to the complete definitions.

### Document Structure
- **System Overview**: High-level architecture and components
- **Parameters**: Configurable values that customize the deployment
- **Resources**: AWS infrastructure resources

All parameters and resources are linked to their exact line numbers in the template file for easy reference to the complete configuration
{% if version_info %}
**Template Version:** {{ version_info.version }}  
**Commit:** {{ version_info.commit }}
{% endif %}";

const PARAMETER_COLUMNS: [&str; 4] = ["Parameter", "Type", "Default", "Description"];
const RESOURCE_COLUMNS: [&str; 3] = ["Logical Name", "Resource Type", "Description"];

/// Presentation settings for one report.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub title: String,
    /// Name of the deployed system as used in the overview prose.
    pub system_name: String,
    /// Link target for line references, usually the template file name.
    pub source_link: String,
    pub ungrouped_label: String,
    pub version_info_key: String,
    pub system_overview: String,
}

impl ReportSettings {
    /// Settings from the `[report]` table; `source_link` is used when the table leaves it unset.
    pub fn from_config(
        report: &ReportConfig,
        source_link: String,
        system_overview: String,
    ) -> Self {
        Self {
            title: report.title.clone(),
            system_name: report.system_name.clone(),
            source_link: report.source_link.clone().unwrap_or(source_link),
            ungrouped_label: report.ungrouped_label.clone(),
            version_info_key: report.version_info_key.clone(),
            system_overview,
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::from_config(
            &ReportConfig::default(),
            DEFAULT_TEMPLATE.to_string(),
            DEFAULT_SYSTEM_OVERVIEW.to_string(),
        )
    }
}

/// The finished document: Markdown sections in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<String>,
}

impl Report {
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn render(&self) -> String {
        self.sections.join("\n")
    }
}

/// Builds the report from the parsed document and its line index.
pub fn assemble_report(
    document: &ConfigDocument,
    index: &LineIndex,
    settings: &ReportSettings,
) -> Result<Report> {
    let groups = organize_parameters(document, index, &settings.ungrouped_label);
    let resources = describe_resources(document, index);

    let sections = vec![
        front_matter(document, settings)?,
        settings.system_overview.clone(),
        parameters_table(&groups, document.parameters().len(), &settings.source_link),
        resources_table(&resources, &settings.source_link),
    ];

    log::info!(
        "Assembled report with {} parameter groups and {} resources",
        groups.len(),
        resources.len()
    );
    Ok(Report { sections })
}

fn front_matter(document: &ConfigDocument, settings: &ReportSettings) -> Result<String> {
    let mut context = Context::new();
    context.insert("title", &settings.title);
    context.insert("system_name", &settings.system_name);
    context.insert(
        "version_info",
        &document.version_info(&settings.version_info_key),
    );

    Tera::one_off(FRONT_MATTER_TEMPLATE, &context, false)
        .map_err(|e| GeneratorError::TemplateRendering(e.to_string()).into())
}

fn table_header(columns: &[&str]) -> String {
    let separator: Vec<String> = columns.iter().map(|c| "-".repeat(c.len())).collect();
    let separator: Vec<&str> = separator.iter().map(String::as_str).collect();
    format!("{}{}", table_row(columns), table_row(&separator))
}

fn parameters_table(
    groups: &[ParameterGroup<'_>],
    declared: usize,
    link_target: &str,
) -> String {
    if declared == 0 {
        return "## Parameters\n\nNo parameters defined in this template.\n".to_string();
    }

    let mut table = format!("## Parameters\n\n{}", table_header(&PARAMETER_COLUMNS));
    for group in groups {
        table.push_str(&label_row(&group.label, PARAMETER_COLUMNS.len()));
        for row in &group.rows {
            let name = source_link(&row.spec.name, link_target, row.line);
            let description = escape_cell(row.spec.description.as_deref().unwrap_or(""));
            table.push_str(&table_row(&[
                name.as_str(),
                escape_cell(&row.spec.param_type).as_str(),
                row.formatted_default().as_str(),
                description.as_str(),
            ]));
        }
    }
    table
}

fn resources_table(rows: &[ResourceRow<'_>], link_target: &str) -> String {
    if rows.is_empty() {
        return "## Resources\n\nNo resources defined in this template.\n".to_string();
    }

    let mut table = format!("## Resources\n\n{}", table_header(&RESOURCE_COLUMNS));
    for row in rows {
        let name = source_link(&row.spec.name, link_target, row.line);
        table.push_str(&table_row(&[
            name.as_str(),
            escape_cell(row.spec.type_label()).as_str(),
            escape_cell(&row.description).as_str(),
        ]));
    }
    table
}
