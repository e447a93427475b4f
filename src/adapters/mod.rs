pub mod byte_copy;
mod embedded_launcher_store;
mod maven_runtime_command;

pub use embedded_launcher_store::EmbeddedLauncherStore;
pub use maven_runtime_command::{MVN_COMMAND_ENV, MavenRuntimeCommand, parse_maven_version};
