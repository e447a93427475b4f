//! Merge CLI options, config file, and environment into one `WrapperConfig`.

use std::path::PathBuf;

use super::load_config::LoadedConfig;
use crate::adapters::{MVN_COMMAND_ENV, MavenRuntimeCommand};
use crate::domain::{AppError, WrapperConfig};
use crate::ports::RuntimeInformation;

/// Caller-supplied generation options. `None` falls back to the config file,
/// then to discovery or defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub project_dir: Option<PathBuf>,
    pub maven_version: Option<String>,
    pub base_distribution_url: Option<String>,
    pub bootstrap_jar: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// A fully resolved generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGeneration {
    pub config: WrapperConfig,
    pub bootstrap_jar: PathBuf,
}

/// Version discovery for a loaded config: `$MVNW_GEN_MVN`, then `mvn_command`, then `mvn`.
pub fn runtime_for(loaded: &LoadedConfig) -> MavenRuntimeCommand {
    let configured = loaded.dto.wrapper.as_ref().and_then(|w| w.mvn_command.clone());
    match (std::env::var_os(MVN_COMMAND_ENV), configured) {
        (None, Some(command)) => MavenRuntimeCommand::new(command),
        _ => MavenRuntimeCommand::from_env(),
    }
}

pub fn resolve<R: RuntimeInformation>(
    options: GenerateOptions,
    loaded: LoadedConfig,
    project_root: PathBuf,
    runtime: &R,
) -> Result<ResolvedGeneration, AppError> {
    let wrapper = loaded.dto.wrapper.unwrap_or_default();

    let bootstrap_jar = match (options.bootstrap_jar, wrapper.bootstrap_jar) {
        (Some(path), _) => path,
        (None, Some(path)) => match &loaded.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        },
        (None, None) => {
            return Err(AppError::config_error(
                "No bootstrap jar given. \
                 Pass --jar <PATH> or set wrapper.bootstrap_jar in mvnw-gen.toml",
            ));
        }
    };

    let maven_version = match options.maven_version.or(wrapper.maven_version) {
        Some(version) => version,
        None => {
            let version = runtime.maven_version()?;
            log::info!("Detected Maven {}", version);
            version
        }
    };

    let mut config = WrapperConfig::new(project_root, maven_version);
    if let Some(url) = options.base_distribution_url.or(wrapper.base_distribution_url) {
        config.base_distribution_url = url;
    }

    Ok(ResolvedGeneration { config, bootstrap_jar })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::parse_config_content;
    use crate::domain::DEFAULT_BASE_DISTRIBUTION_URL;
    use crate::testing::FakeRuntimeInfo;
    use std::path::Path;

    fn loaded(content: &str, base_dir: &str) -> LoadedConfig {
        LoadedConfig {
            dto: parse_config_content(content).unwrap(),
            base_dir: Some(PathBuf::from(base_dir)),
        }
    }

    fn options_with_jar() -> GenerateOptions {
        GenerateOptions {
            bootstrap_jar: Some(PathBuf::from("/dist/wrapper.jar")),
            ..Default::default()
        }
    }

    #[test]
    fn discovers_version_when_not_given() {
        let resolved = resolve(
            options_with_jar(),
            LoadedConfig::default(),
            PathBuf::from("/work"),
            &FakeRuntimeInfo::with_version("3.9.6"),
        )
        .unwrap();

        assert_eq!(resolved.config.maven_version, "3.9.6");
        assert_eq!(resolved.config.base_distribution_url, DEFAULT_BASE_DISTRIBUTION_URL);
        assert_eq!(resolved.bootstrap_jar, Path::new("/dist/wrapper.jar"));
    }

    #[test]
    fn explicit_version_skips_discovery() {
        let options = GenerateOptions { maven_version: Some("3.0.5".into()), ..options_with_jar() };

        let resolved = resolve(
            options,
            LoadedConfig::default(),
            PathBuf::from("/work"),
            &FakeRuntimeInfo::unavailable(),
        )
        .unwrap();

        assert_eq!(resolved.config.maven_version, "3.0.5");
    }

    #[test]
    fn discovery_failure_is_runtime_info_unavailable() {
        let err = resolve(
            options_with_jar(),
            LoadedConfig::default(),
            PathBuf::from("/work"),
            &FakeRuntimeInfo::unavailable(),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::RuntimeInfoUnavailable(_)));
    }

    #[test]
    fn cli_options_override_config_file() {
        let config = loaded(
            "[wrapper]\nmaven_version = \"3.8.8\"\nbase_distribution_url = \"https://file.example\"\n",
            "/cfg",
        );
        let options = GenerateOptions {
            maven_version: Some("3.9.6".into()),
            base_distribution_url: Some("https://cli.example".into()),
            ..options_with_jar()
        };

        let resolved =
            resolve(options, config, PathBuf::from("/work"), &FakeRuntimeInfo::unavailable())
                .unwrap();

        assert_eq!(resolved.config.maven_version, "3.9.6");
        assert_eq!(resolved.config.base_distribution_url, "https://cli.example");
    }

    #[test]
    fn config_file_supplies_values() {
        let config = loaded(
            "[wrapper]\nmaven_version = \"3.8.8\"\nbootstrap_jar = \"lib/wrapper.jar\"\n",
            "/cfg",
        );

        let resolved = resolve(
            GenerateOptions::default(),
            config,
            PathBuf::from("/work"),
            &FakeRuntimeInfo::unavailable(),
        )
        .unwrap();

        assert_eq!(resolved.config.maven_version, "3.8.8");
        assert_eq!(resolved.bootstrap_jar, Path::new("/cfg/lib/wrapper.jar"));
        assert_eq!(resolved.config.wrapper_dir(), Path::new("/work/maven/wrapper"));
    }

    #[test]
    fn missing_jar_is_configuration_error() {
        let err = resolve(
            GenerateOptions { maven_version: Some("3.9.6".into()), ..Default::default() },
            LoadedConfig::default(),
            PathBuf::from("/work"),
            &FakeRuntimeInfo::unavailable(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("--jar"));
    }
}
