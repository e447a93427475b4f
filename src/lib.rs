//! mvnw-gen: generate a self-bootstrapping Maven wrapper into a project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::EmbeddedLauncherStore;
use app::commands::generate;
use app::config::{load_config, resolve, runtime_for};

pub use app::commands::generate::GenerationReport;
pub use app::config::GenerateOptions;
pub use domain::{AppError, DEFAULT_BASE_DISTRIBUTION_URL, WrapperConfig};

/// Generate the wrapper from caller options.
///
/// Options left unset are filled from `mvnw-gen.toml` (or the explicit config
/// file), then from `mvn --version` and the built-in defaults.
pub fn generate(options: GenerateOptions) -> Result<GenerationReport, AppError> {
    let project_root = match &options.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let loaded = load_config(&project_root, options.config_file.as_deref())?;
    let runtime = runtime_for(&loaded);
    let resolved = resolve(options, loaded, project_root, &runtime)?;

    generate::execute(&resolved.config, &resolved.bootstrap_jar, &EmbeddedLauncherStore::new())
}

/// Generate the standard wrapper layout from plain values.
///
/// # Arguments
/// * `project_root` - Directory receiving `mvnw`, `mvnw.bat` and `maven/wrapper/`
/// * `maven_version` - Version substituted into the distribution URL
/// * `base_distribution_url` - URL prefix; a trailing `/` is added when missing
/// * `bootstrap_jar` - Jar copied to `maven/wrapper/maven-wrapper.jar`
pub fn generate_wrapper(
    project_root: &Path,
    maven_version: &str,
    base_distribution_url: &str,
    bootstrap_jar: &Path,
) -> Result<GenerationReport, AppError> {
    let config = WrapperConfig::new(project_root, maven_version)
        .with_base_distribution_url(base_distribution_url);
    generate_with_config(&config, bootstrap_jar)
}

/// Generate with a fully specified `WrapperConfig` and the embedded launchers.
pub fn generate_with_config(
    config: &WrapperConfig,
    bootstrap_jar: &Path,
) -> Result<GenerationReport, AppError> {
    generate::execute(config, bootstrap_jar, &EmbeddedLauncherStore::new())
}
