//! Wrapper generation: launchers, properties file, and bootstrap jar.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::byte_copy;
use crate::domain::{AppError, BootstrapArtifact, WrapperConfig, WrapperProperties};
use crate::ports::{LauncherResource, LauncherStore};

/// What a generation run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub maven_version: String,
    pub distribution_url: String,
    pub launchers: Vec<PathBuf>,
    pub properties: PathBuf,
    pub jar: PathBuf,
    pub jar_bytes: u64,
    /// Non-fatal problems, e.g. a launcher that could not be marked executable.
    pub warnings: Vec<String>,
}

/// Execute wrapper generation.
///
/// Writes, relative to `config.project_root`:
/// - one launcher per `config.launcher_names` (marked executable)
/// - `<root_folder>/<base_folder>/<properties_file_name>`
/// - `<root_folder>/<base_folder>/<jar_file_name>`, copied from `bootstrap_jar`
///
/// The properties file and the jar are staged next to their final paths and
/// only renamed into place once both have been written, so a failed run never
/// leaves one without the other. Launchers are not rolled back.
pub fn execute<L: LauncherStore>(
    config: &WrapperConfig,
    bootstrap_jar: &Path,
    launchers: &L,
) -> Result<GenerationReport, AppError> {
    execute_with(config, bootstrap_jar, launchers, make_executable)
}

/// `execute` with the step that marks launchers executable supplied by the caller.
pub(crate) fn execute_with<L, P>(
    config: &WrapperConfig,
    bootstrap_jar: &Path,
    launchers: &L,
    set_executable: P,
) -> Result<GenerationReport, AppError>
where
    L: LauncherStore,
    P: Fn(&Path) -> io::Result<()>,
{
    config.validate()?;

    let resources = config
        .launcher_names
        .iter()
        .map(|name| {
            launchers.launcher(name).ok_or_else(|| AppError::ResourceMissing { name: name.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut warnings = Vec::new();
    let mut launcher_paths = Vec::with_capacity(resources.len());
    for resource in &resources {
        let path = write_launcher(config, resource)?;
        if let Err(e) = set_executable(&path) {
            let warning =
                format!("Could not set executable flag on file: {}: {}", path.display(), e);
            log::warn!("{warning}");
            warnings.push(warning);
        }
        launcher_paths.push(path);
    }

    let wrapper_dir = config.wrapper_dir();
    fs::create_dir_all(&wrapper_dir)
        .map_err(|source| AppError::DirectoryCreation { path: wrapper_dir.clone(), source })?;

    let distribution_url = config.distribution_url();
    let properties = WrapperProperties::new(distribution_url.clone());
    let artifact = BootstrapArtifact::new(bootstrap_jar, config.jar_path());
    let jar_bytes = commit_wrapper_files(&config.properties_path(), &properties, &artifact)?;

    log::info!("distributionUrl={}", distribution_url);

    Ok(GenerationReport {
        maven_version: config.maven_version.clone(),
        distribution_url,
        launchers: launcher_paths,
        properties: config.properties_path(),
        jar: artifact.destination().to_path_buf(),
        jar_bytes,
        warnings,
    })
}

fn write_launcher(
    config: &WrapperConfig,
    resource: &LauncherResource,
) -> Result<PathBuf, AppError> {
    let path = config.launcher_path(&resource.name);
    byte_copy::copy_to_file(resource.content.as_slice(), &path)
        .map_err(|e| AppError::write("write launcher", &path, e))?;
    log::debug!("Wrote {} ({} bytes)", path.display(), resource.content.len());
    Ok(path)
}

fn make_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(path, perms)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(())
    }
}

/// Write the properties file and the jar as a pair.
fn commit_wrapper_files(
    properties_path: &Path,
    properties: &WrapperProperties,
    artifact: &BootstrapArtifact,
) -> Result<u64, AppError> {
    // Open the source before touching the destination so a missing jar writes nothing.
    let source = File::open(artifact.source())
        .map_err(|e| AppError::write("read bootstrap jar", artifact.source(), e))?;

    let jar_staging = staging_path(artifact.destination());
    let properties_staging = staging_path(properties_path);

    let staged = byte_copy::copy_to_file(source, &jar_staging)
        .map_err(|e| AppError::write("copy bootstrap jar to", &jar_staging, e))
        .and_then(|bytes| {
            byte_copy::copy_to_file(properties.render().as_bytes(), &properties_staging)
                .map_err(|e| AppError::write("write properties to", &properties_staging, e))?;
            Ok(bytes)
        });

    let jar_bytes = match staged {
        Ok(bytes) => bytes,
        Err(e) => {
            discard(&jar_staging);
            discard(&properties_staging);
            return Err(e);
        }
    };

    if let Err(e) = fs::rename(&properties_staging, properties_path) {
        discard(&jar_staging);
        discard(&properties_staging);
        return Err(AppError::write("replace", properties_path, e));
    }
    fs::rename(&jar_staging, artifact.destination()).map_err(|e| {
        discard(&jar_staging);
        AppError::write("replace", artifact.destination(), e)
    })?;

    log::debug!("Wrote {}", properties_path.display());
    log::debug!(
        "Copied {} -> {} ({} bytes)",
        artifact.source().display(),
        artifact.destination().display(),
        jar_bytes
    );
    Ok(jar_bytes)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path)
        && e.kind() != io::ErrorKind::NotFound
    {
        log::debug!("Could not remove staging file {}: {}", path.display(), e);
    }
}
