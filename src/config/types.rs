use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub report: ReportConfig,
    pub output: OutputConfig,
}

/// Report content configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub title: String,
    /// System name used in the overview prose
    pub system_name: String,
    /// Link target for line references; the template file name when unset
    pub source_link: Option<String>,
    pub ungrouped_label: String,
    pub version_info_key: String,
    /// Markdown file replacing the built-in System Overview section
    pub system_overview: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report file name used when no explicit output path is given
    pub file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Code Ocean VPC System Requirements".to_string(),
            system_name: "Code Ocean VPC".to_string(),
            source_link: None,
            ungrouped_label: "Other Parameters".to_string(),
            version_info_key: "CodeOcean::VersionInfo".to_string(),
            system_overview: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "System Requirements.md".to_string(),
        }
    }
}
