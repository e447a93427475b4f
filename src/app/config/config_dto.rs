use std::path::PathBuf;

use serde::Deserialize;

/// On-disk shape of `mvnw-gen.toml`.
///
/// The output layout is fixed: the launchers look for `maven/wrapper/`, so
/// folder names are not configurable here.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileDto {
    pub wrapper: Option<WrapperSectionDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapperSectionDto {
    pub maven_version: Option<String>,
    #[serde(alias = "baseDistributionUrl")]
    pub base_distribution_url: Option<String>,
    pub bootstrap_jar: Option<PathBuf>,
    pub mvn_command: Option<String>,
}
