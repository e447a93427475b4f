mod fake_runtime_info;
mod mock_launcher_store;

#[allow(unused_imports)]
pub use fake_runtime_info::FakeRuntimeInfo;
#[allow(unused_imports)]
pub use mock_launcher_store::MockLauncherStore;
