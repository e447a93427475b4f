//! `mvnw-gen.toml` loading.

use std::path::{Path, PathBuf};

use super::config_dto::ConfigFileDto;
use crate::domain::AppError;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "mvnw-gen.toml";

/// A parsed config file together with the directory relative paths resolve against.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub dto: ConfigFileDto,
    pub base_dir: Option<PathBuf>,
}

/// Load the config file.
///
/// An explicit path must exist. Without one, `<project_root>/mvnw-gen.toml` is
/// used when present and an empty config otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = project_root.join(DEFAULT_CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(LoadedConfig::default());
            }
            candidate
        }
    };

    log::debug!("Loading config from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    let dto = parse_config_content(&content)?;
    Ok(LoadedConfig { dto, base_dir: path.parent().map(Path::to_path_buf) })
}

pub fn parse_config_content(content: &str) -> Result<ConfigFileDto, AppError> {
    Ok(toml::from_str(content)?)
}
