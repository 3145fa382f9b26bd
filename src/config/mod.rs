pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from file or use defaults
///
/// A relative `report.system_overview` path is resolved against the directory
/// of the configuration file.
pub fn load_config(path: Option<&Path>) -> Result<types::Config> {
    let Some(path) = path else {
        return Ok(types::Config::default());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: types::Config =
        toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Some(overview) = config.report.system_overview.take() {
        let resolved = match path.parent() {
            Some(dir) if overview.is_relative() => dir.join(overview),
            _ => overview,
        };
        config.report.system_overview = Some(resolved);
    }

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
