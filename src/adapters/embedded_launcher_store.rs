use include_dir::{Dir, include_dir};

use crate::ports::{LauncherResource, LauncherStore};

static LAUNCHERS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/launchers");

/// Launcher scripts compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLauncherStore;

impl EmbeddedLauncherStore {
    pub fn new() -> Self {
        Self
    }
}

impl LauncherStore for EmbeddedLauncherStore {
    fn launcher(&self, name: &str) -> Option<LauncherResource> {
        LAUNCHERS_DIR.get_file(name).map(|file| LauncherResource {
            name: name.to_string(),
            content: file.contents().to_vec(),
        })
    }

    fn launcher_names(&self) -> Vec<String> {
        let mut names: Vec<String> = LAUNCHERS_DIR
            .files()
            .filter_map(|file| file.path().file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
