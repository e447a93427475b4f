//! Shared testing utilities for mvnw-gen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BOOTSTRAP_JAR_BYTES: &[u8] = b"PK\x03\x04 bootstrap jar for tests";

/// Testing harness providing an isolated project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    jar_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty project and a bootstrap jar.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");

        let jar_path = root.path().join("dist").join("maven-wrapper-0.5.6.jar");
        fs::create_dir_all(jar_path.parent().unwrap()).unwrap();
        fs::write(&jar_path, BOOTSTRAP_JAR_BYTES).expect("Failed to write bootstrap jar");

        Self { root, work_dir, jar_path }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used as the CLI working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn jar_path(&self) -> &Path {
        &self.jar_path
    }

    /// Build a command for invoking the compiled `mvnw-gen` binary in the project.
    ///
    /// Version discovery points at a missing program so tests never depend on a host Maven.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mvnw-gen").expect("Failed to locate mvnw-gen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("MVNW_GEN_MVN", self.root.path().join("no-such-mvn"))
            .env_remove("MVNW_GEN_JAR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `wrapper` subcommand with an explicit version and the test jar.
    pub fn wrapper(&self, version: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("wrapper").args(["--maven-version", version]).arg("--jar").arg(&self.jar_path);
        cmd
    }

    pub fn wrapper_dir(&self) -> PathBuf {
        self.work_dir.join("maven").join("wrapper")
    }

    pub fn read_properties(&self) -> String {
        fs::read_to_string(self.wrapper_dir().join("maven-wrapper.properties"))
            .expect("maven-wrapper.properties should exist")
    }

    /// Snapshot of every generated file, for idempotence checks.
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        [
            "mvnw",
            "mvnw.bat",
            "maven/wrapper/maven-wrapper.properties",
            "maven/wrapper/maven-wrapper.jar",
        ]
        .iter()
        .map(|rel| (rel.to_string(), fs::read(self.work_dir.join(rel)).unwrap_or_default()))
        .collect()
    }

    /// Assert that the four wrapper files exist.
    pub fn assert_wrapper_exists(&self) {
        assert!(self.work_dir.join("mvnw").is_file(), "mvnw should exist");
        assert!(self.work_dir.join("mvnw.bat").is_file(), "mvnw.bat should exist");
        assert!(
            self.wrapper_dir().join("maven-wrapper.properties").is_file(),
            "maven-wrapper.properties should exist"
        );
        assert!(
            self.wrapper_dir().join("maven-wrapper.jar").is_file(),
            "maven-wrapper.jar should exist"
        );
    }

    /// Write a shell script standing in for `mvn` that prints `version`.
    #[cfg(unix)]
    pub fn fake_mvn(&self, version: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("fake-mvn");
        let script = format!(
            "#!/bin/sh\necho 'Apache Maven {version} (deadbeef)'\necho 'Maven home: /opt/maven'\n"
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}
