mod launcher_store;
mod runtime_info;

pub use launcher_store::{LauncherResource, LauncherStore};
pub use runtime_info::RuntimeInformation;
