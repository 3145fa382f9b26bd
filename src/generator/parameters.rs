//! # Parameter Organizer
//!
//! Arranges template parameters into the groups declared in the
//! `AWS::CloudFormation::Interface` metadata, followed by an implicit group
//! for everything no declared group claimed.

use super::markdown::escape_cell;
use crate::template::{ConfigDocument, DeclarationKind, LineIndex, ParameterSpec, TemplateValue};
use std::collections::HashSet;

/// A parameter as presented in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRow<'a> {
    pub spec: &'a ParameterSpec,
    pub line: Option<usize>,
}

impl ParameterRow<'_> {
    /// Default value as it appears in the table cell; empty when there is none.
    pub fn formatted_default(&self) -> String {
        match &self.spec.default {
            None | Some(TemplateValue::Null) => String::new(),
            Some(TemplateValue::String(s)) if s.is_empty() => String::new(),
            Some(value) => format!("`{}`", escape_cell(&value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup<'a> {
    pub label: String,
    pub rows: Vec<ParameterRow<'a>>,
    /// True for the trailing group of parameters no declared group mentions.
    pub implicit: bool,
}

/// Groups every parameter of `document` exactly once.
///
/// Declared groups keep metadata order and list order; names that are unknown
/// or were already emitted by an earlier group are skipped. A declared group
/// with an empty member list is omitted. Leftover parameters form a final
/// group labelled `ungrouped_label`, sorted by name.
pub fn organize_parameters<'a>(
    document: &'a ConfigDocument,
    index: &LineIndex,
    ungrouped_label: &str,
) -> Vec<ParameterGroup<'a>> {
    let row = |spec: &'a ParameterSpec| ParameterRow {
        spec,
        line: index.line(DeclarationKind::Parameter, &spec.name),
    };

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut groups = Vec::new();

    for hint in document.parameter_group_hints() {
        if hint.members.is_empty() {
            continue;
        }

        let mut rows = Vec::new();
        for member in &hint.members {
            match document.parameter(member) {
                Some(spec) if emitted.insert(spec.name.as_str()) => rows.push(row(spec)),
                Some(_) => {
                    log::debug!("Parameter {} already listed in an earlier group", member)
                }
                None => {
                    log::debug!("Group '{}' references unknown parameter {}", hint.label, member)
                }
            }
        }

        groups.push(ParameterGroup {
            label: hint.label,
            rows,
            implicit: false,
        });
    }

    let mut leftovers: Vec<&ParameterSpec> = document
        .parameters()
        .iter()
        .filter(|p| !emitted.contains(p.name.as_str()))
        .collect();
    leftovers.sort_by(|a, b| a.name.cmp(&b.name));

    if !leftovers.is_empty() {
        groups.push(ParameterGroup {
            label: ungrouped_label.to_string(),
            rows: leftovers.into_iter().map(row).collect(),
            implicit: true,
        });
    }

    for group in &groups {
        for r in group.rows.iter().filter(|r| r.line.is_none()) {
            log::debug!("No source line found for parameter {}", r.spec.name);
        }
    }

    groups
}
