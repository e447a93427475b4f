/// A platform launcher script shipped with the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherResource {
    /// File name, also the name written into the project root.
    pub name: String,
    /// Script bytes, written verbatim.
    pub content: Vec<u8>,
}

/// Port for resolving launcher scripts by name.
pub trait LauncherStore {
    /// Look up a launcher. `None` means the resource was never packaged.
    fn launcher(&self, name: &str) -> Option<LauncherResource>;

    /// Names of every launcher this store can provide.
    fn launcher_names(&self) -> Vec<String>;
}
