use std::path::{Path, PathBuf};

/// The bootstrap jar copied next to the properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapArtifact {
    source: PathBuf,
    destination: PathBuf,
}

impl BootstrapArtifact {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(source: S, destination: D) -> Self {
        Self { source: source.into(), destination: destination.into() }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
