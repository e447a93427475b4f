use crate::domain::AppError;
use crate::ports::RuntimeInformation;

/// Runtime information with a canned answer.
#[derive(Debug, Clone)]
pub struct FakeRuntimeInfo {
    version: Option<String>,
}

#[allow(dead_code)]
impl FakeRuntimeInfo {
    pub fn with_version(version: &str) -> Self {
        Self { version: Some(version.to_string()) }
    }

    pub fn unavailable() -> Self {
        Self { version: None }
    }
}

impl RuntimeInformation for FakeRuntimeInfo {
    fn maven_version(&self) -> Result<String, AppError> {
        self.version
            .clone()
            .ok_or_else(|| AppError::RuntimeInfoUnavailable("fake runtime has no Maven".into()))
    }
}
