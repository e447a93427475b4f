//! Wrapper command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::adapters::EmbeddedLauncherStore;
use crate::app::config::GenerateOptions;
use crate::domain::AppError;
use crate::ports::LauncherStore;

#[derive(Args)]
pub struct WrapperArgs {
    /// Project root to write the wrapper into (defaults to current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    project_dir: Option<PathBuf>,
    /// Maven version to pin (detected from `mvn --version` when omitted)
    #[arg(short = 'm', long, value_name = "VERSION")]
    maven_version: Option<String>,
    /// Prefix of the distribution download URL
    #[arg(long, visible_alias = "baseDistributionUrl", value_name = "URL")]
    base_distribution_url: Option<String>,
    /// Bootstrap jar copied to maven/wrapper/maven-wrapper.jar
    #[arg(short = 'j', long, env = "MVNW_GEN_JAR", value_name = "PATH")]
    jar: Option<PathBuf>,
    /// Config file (defaults to <DIR>/mvnw-gen.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run_wrapper(args: WrapperArgs) -> Result<(), AppError> {
    let options = GenerateOptions {
        project_dir: args.project_dir,
        maven_version: args.maven_version,
        base_distribution_url: args.base_distribution_url,
        bootstrap_jar: args.jar,
        config_file: args.config,
    };

    let report = crate::generate(options)?;

    println!("✅ Generated Maven wrapper for Maven {}", report.maven_version);
    for launcher in &report.launchers {
        println!("  • {}", launcher.display());
    }
    println!("  • {}", report.properties.display());
    println!("  • {} ({} bytes)", report.jar.display(), report.jar_bytes);
    println!("distributionUrl={}", report.distribution_url);

    if !report.warnings.is_empty() {
        println!("⚠️  {} warning(s); see log output above", report.warnings.len());
    }
    Ok(())
}

pub fn run_list_launchers() -> Result<(), AppError> {
    for name in EmbeddedLauncherStore::new().launcher_names() {
        println!("{}", name);
    }
    Ok(())
}
