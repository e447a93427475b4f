use std::ffi::OsString;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::RuntimeInformation;

/// Environment variable overriding the `mvn` executable used for version discovery.
pub const MVN_COMMAND_ENV: &str = "MVNW_GEN_MVN";

/// Discovers the installed Maven version by running `mvn --version`.
#[derive(Debug, Clone)]
pub struct MavenRuntimeCommand {
    program: OsString,
}

impl MavenRuntimeCommand {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into() }
    }

    /// `$MVNW_GEN_MVN` if set, otherwise `mvn` from `PATH`.
    pub fn from_env() -> Self {
        let program = std::env::var_os(MVN_COMMAND_ENV).unwrap_or_else(|| default_program().into());
        Self::new(program)
    }

    fn command_line(&self) -> String {
        format!("{} --version", self.program.to_string_lossy())
    }
}

fn default_program() -> &'static str {
    if cfg!(windows) { "mvn.cmd" } else { "mvn" }
}

impl RuntimeInformation for MavenRuntimeCommand {
    fn maven_version(&self) -> Result<String, AppError> {
        let output =
            Command::new(&self.program).args(["--version", "--batch-mode"]).output().map_err(
                |e| AppError::RuntimeInfoUnavailable(format!("'{}': {}", self.command_line(), e)),
            )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::RuntimeInfoUnavailable(format!(
                "'{}' exited with {}: {}",
                self.command_line(),
                output.status,
                if stderr.is_empty() { "no output" } else { &stderr }
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        log::debug!("{} reported:\n{}", self.command_line(), stdout.trim());
        parse_maven_version(&stdout).ok_or_else(|| {
            AppError::RuntimeInfoUnavailable(format!(
                "no 'Apache Maven <version>' line in output of '{}'",
                self.command_line()
            ))
        })
    }
}

/// Extract the version from `mvn --version` output.
///
/// Output may carry ANSI colour codes and a trailing build descriptor, e.g.
/// `Apache Maven 3.9.6 (bc0240f3c744dd6b6ec2920b3cd08dcc295161ae)`.
pub fn parse_maven_version(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let line = strip_ansi(line);
        let rest = line.trim().strip_prefix("Apache Maven ")?;
        let version = rest.split_whitespace().next()?;
        (!version.is_empty()).then(|| version.to_string())
    })
}

fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end at the first byte in '@'..='~'
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) && next != '[' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
