use super::value::TemplateValue;
use serde::Serialize;

/// Metadata key holding the console parameter grouping.
pub const INTERFACE_METADATA_KEY: &str = "AWS::CloudFormation::Interface";

/// Parameter type assumed when a declaration omits `Type`.
pub const DEFAULT_PARAMETER_TYPE: &str = "String";

/// Resource type label used when a declaration omits `Type`.
pub const UNKNOWN_RESOURCE_TYPE: &str = "Unknown";

const UNNAMED_GROUP_LABEL: &str = "Unnamed Group";

/// The parsed template: parameters and resources in declaration order plus the
/// optional `Metadata` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    parameters: Vec<ParameterSpec>,
    resources: Vec<ResourceSpec>,
    metadata: Option<TemplateValue>,
}

/// A declared template parameter.
///
/// | field         | source key    | when absent              |
/// |---------------|---------------|--------------------------|
/// | `param_type`  | `Type`        | `"String"`               |
/// | `default`     | `Default`     | `None` (null also `None`) |
/// | `description` | `Description` | `None`                   |
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub param_type: String,
    pub default: Option<TemplateValue>,
    pub description: Option<String>,
}

/// A declared template resource.
///
/// | field           | source key   | when absent |
/// |-----------------|--------------|-------------|
/// | `resource_type` | `Type`       | `None`      |
/// | `properties`    | `Properties` | `None`      |
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSpec {
    pub name: String,
    pub resource_type: Option<String>,
    pub properties: Option<TemplateValue>,
}

/// One entry of `AWS::CloudFormation::Interface.ParameterGroups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterGroupHint {
    pub label: String,
    pub members: Vec<String>,
}

/// Release identification carried in the template metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
}

impl ConfigDocument {
    /// Builds a document from the root of the parsed tree. A null root is an empty template.
    pub fn from_root(root: TemplateValue) -> Self {
        let parameters = root
            .get("Parameters")
            .and_then(|p| p.as_mapping())
            .map(|entries| {
                entries
                    .iter()
                    .map(|(name, decl)| ParameterSpec::from_declaration(name, decl))
                    .collect()
            })
            .unwrap_or_default();

        let resources = root
            .get("Resources")
            .and_then(|r| r.as_mapping())
            .map(|entries| {
                entries
                    .iter()
                    .map(|(name, decl)| ResourceSpec::from_declaration(name, decl))
                    .collect()
            })
            .unwrap_or_default();

        let metadata = root.get("Metadata").filter(|m| !m.is_null()).cloned();

        Self {
            parameters,
            resources,
            metadata,
        }
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn resources(&self) -> &[ResourceSpec] {
        &self.resources
    }

    pub fn metadata(&self) -> Option<&TemplateValue> {
        self.metadata.as_ref()
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameter groups declared in the interface metadata, in declaration order.
    /// Empty when the template carries no grouping hint.
    pub fn parameter_group_hints(&self) -> Vec<ParameterGroupHint> {
        let groups = self
            .metadata()
            .and_then(|m| m.get(INTERFACE_METADATA_KEY))
            .and_then(|i| i.get("ParameterGroups"))
            .and_then(|g| g.as_sequence());

        let Some(groups) = groups else {
            return Vec::new();
        };

        groups
            .iter()
            .map(|group| {
                let label = group
                    .get("Label")
                    .and_then(|label| {
                        label
                            .as_str()
                            .map(str::to_string)
                            .or_else(|| label.get("default").and_then(|d| d.scalar_text()))
                    })
                    .unwrap_or_else(|| UNNAMED_GROUP_LABEL.to_string());

                let members = group
                    .get("Parameters")
                    .and_then(|p| p.as_sequence())
                    .map(|names| names.iter().filter_map(|n| n.scalar_text()).collect())
                    .unwrap_or_default();

                ParameterGroupHint { label, members }
            })
            .collect()
    }

    /// Version record stored under `key` in the metadata block.
    pub fn version_info(&self, key: &str) -> Option<VersionInfo> {
        let record = self.metadata()?.get(key)?;
        if record.as_mapping().map_or(true, |entries| entries.is_empty()) {
            return None;
        }

        let field = |name: &str| {
            record
                .get(name)
                .and_then(|v| v.scalar_text())
                .unwrap_or_else(|| "Unknown".to_string())
        };

        Some(VersionInfo {
            version: field("Version"),
            commit: field("Commit"),
        })
    }
}

impl ParameterSpec {
    pub fn from_declaration(name: &str, decl: &TemplateValue) -> Self {
        Self {
            name: name.to_string(),
            param_type: decl
                .get("Type")
                .and_then(|t| t.scalar_text())
                .unwrap_or_else(|| DEFAULT_PARAMETER_TYPE.to_string()),
            default: decl.get("Default").filter(|d| !d.is_null()).cloned(),
            description: decl.get("Description").and_then(|d| d.scalar_text()),
        }
    }
}

impl ResourceSpec {
    pub fn from_declaration(name: &str, decl: &TemplateValue) -> Self {
        Self {
            name: name.to_string(),
            resource_type: decl.get("Type").and_then(|t| t.scalar_text()),
            properties: decl.get("Properties").filter(|p| !p.is_null()).cloned(),
        }
    }

    pub fn type_label(&self) -> &str {
        self.resource_type.as_deref().unwrap_or(UNKNOWN_RESOURCE_TYPE)
    }

    /// `Properties.Description` when present and not null.
    pub fn explicit_description(&self) -> Option<&TemplateValue> {
        self.properties
            .as_ref()?
            .get("Description")
            .filter(|d| !d.is_null())
    }
}
