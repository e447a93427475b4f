//! Generation parameters and the distribution URL they produce.

use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

/// Apache release repository prefix used when no `baseDistributionUrl` is given.
pub const DEFAULT_BASE_DISTRIBUTION_URL: &str =
    "https://repository.apache.org/content/repositories/releases/org/apache/maven/apache-maven/";
/// Top-level folder under the project root holding the wrapper files.
pub const WRAPPER_ROOT_FOLDER_NAME: &str = "maven";
/// Folder inside `maven/` that the launchers read from.
pub const WRAPPER_BASE_FOLDER_NAME: &str = "wrapper";
/// Properties file carrying `distributionUrl`.
pub const WRAPPER_PROPERTIES_FILE_NAME: &str = "maven-wrapper.properties";
/// Destination name of the copied bootstrap jar.
pub const WRAPPER_JAR_FILE_NAME: &str = "maven-wrapper.jar";
/// Unix launcher script.
pub const LAUNCHER_UNIX_FILE_NAME: &str = "mvnw";
/// Windows launcher script.
pub const LAUNCHER_WINDOWS_FILE_NAME: &str = "mvnw.bat";
/// Artifact id in the distribution file name (`<artifact>-<version>-bin.zip`).
pub const DISTRIBUTION_ARTIFACT_NAME: &str = "apache-maven";

/// Everything one generation run needs, resolved up front.
///
/// File and folder names default to the standard wrapper layout; tests swap
/// them out to exercise alternate layouts without touching global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperConfig {
    pub project_root: PathBuf,
    pub maven_version: String,
    pub base_distribution_url: String,
    pub root_folder: String,
    pub base_folder: String,
    pub launcher_names: Vec<String>,
    pub properties_file_name: String,
    pub jar_file_name: String,
    pub artifact_name: String,
}

impl WrapperConfig {
    /// Standard layout for `project_root` targeting `maven_version`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(project_root: P, maven_version: S) -> Self {
        Self {
            project_root: project_root.into(),
            maven_version: maven_version.into(),
            base_distribution_url: DEFAULT_BASE_DISTRIBUTION_URL.to_string(),
            root_folder: WRAPPER_ROOT_FOLDER_NAME.to_string(),
            base_folder: WRAPPER_BASE_FOLDER_NAME.to_string(),
            launcher_names: vec![
                LAUNCHER_WINDOWS_FILE_NAME.to_string(),
                LAUNCHER_UNIX_FILE_NAME.to_string(),
            ],
            properties_file_name: WRAPPER_PROPERTIES_FILE_NAME.to_string(),
            jar_file_name: WRAPPER_JAR_FILE_NAME.to_string(),
            artifact_name: DISTRIBUTION_ARTIFACT_NAME.to_string(),
        }
    }

    pub fn with_base_distribution_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_distribution_url = url.into();
        self
    }

    /// `<project_root>/<root_folder>/<base_folder>`
    pub fn wrapper_dir(&self) -> PathBuf {
        self.project_root.join(&self.root_folder).join(&self.base_folder)
    }

    pub fn launcher_path(&self, name: &str) -> PathBuf {
        self.project_root.join(name)
    }

    pub fn properties_path(&self) -> PathBuf {
        self.wrapper_dir().join(&self.properties_file_name)
    }

    pub fn jar_path(&self) -> PathBuf {
        self.wrapper_dir().join(&self.jar_file_name)
    }

    /// Reject values that would produce a broken properties file.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.maven_version.trim().is_empty() {
            return Err(AppError::config_error("Maven version must not be empty"));
        }
        if self.maven_version.contains(|c: char| c == '/' || c.is_whitespace()) {
            return Err(AppError::config_error(format!(
                "Invalid Maven version '{}': must not contain '/' or whitespace",
                self.maven_version
            )));
        }

        Url::parse(&self.base_distribution_url).map_err(|e| {
            AppError::config_error(format!(
                "Invalid baseDistributionUrl '{}': {}",
                self.base_distribution_url, e
            ))
        })?;

        Ok(())
    }

    /// Download URL written as `distributionUrl`.
    pub fn distribution_url(&self) -> String {
        distribution_url(&self.base_distribution_url, &self.artifact_name, &self.maven_version)
    }
}

/// `<base>/` + `<version>/<artifact>-<version>-bin.zip`, adding the separator only when missing.
pub fn distribution_url(base: &str, artifact_name: &str, version: &str) -> String {
    let separator = if base.ends_with('/') { "" } else { "/" };
    format!("{base}{separator}{version}/{artifact_name}-{version}-bin.zip")
}
