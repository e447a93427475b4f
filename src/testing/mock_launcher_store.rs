use std::collections::BTreeMap;

use crate::ports::{LauncherResource, LauncherStore};

/// In-memory launcher store for testing.
#[derive(Debug, Default, Clone)]
pub struct MockLauncherStore {
    launchers: BTreeMap<String, Vec<u8>>,
}

#[allow(dead_code)]
impl MockLauncherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both standard launchers with short recognizable bodies.
    pub fn standard() -> Self {
        Self::new()
            .with_launcher("mvnw", b"#!/bin/sh\necho mvnw\n")
            .with_launcher("mvnw.bat", b"@echo off\r\n")
    }

    pub fn with_launcher(mut self, name: &str, content: &[u8]) -> Self {
        self.launchers.insert(name.to_string(), content.to_vec());
        self
    }
}

impl LauncherStore for MockLauncherStore {
    fn launcher(&self, name: &str) -> Option<LauncherResource> {
        self.launchers
            .get(name)
            .map(|content| LauncherResource { name: name.to_string(), content: content.clone() })
    }

    fn launcher_names(&self) -> Vec<String> {
        self.launchers.keys().cloned().collect()
    }
}
