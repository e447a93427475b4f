pub mod bootstrap_artifact;
pub mod error;
pub mod wrapper_config;
pub mod wrapper_properties;

pub use bootstrap_artifact::BootstrapArtifact;
pub use error::AppError;
pub use wrapper_config::{DEFAULT_BASE_DISTRIBUTION_URL, WrapperConfig, distribution_url};
pub use wrapper_properties::{DISTRIBUTION_URL_PROPERTY, WrapperProperties};
