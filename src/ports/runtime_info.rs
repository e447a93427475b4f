use crate::domain::AppError;

/// Port for discovering the Maven version the wrapper should pin.
pub trait RuntimeInformation {
    /// Fails with `AppError::RuntimeInfoUnavailable` when the version cannot be determined.
    fn maven_version(&self) -> Result<String, AppError>;
}
