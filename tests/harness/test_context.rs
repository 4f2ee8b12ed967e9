//! Shared testing harness for `componentry` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `componentry` binary in the project directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("componentry").expect("Failed to locate componentry binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("COMPONENTRY_LOG");
        cmd
    }

    /// Write `componentry.toml` in the project directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("componentry.toml"), content).expect("Failed to write config");
    }

    /// Default storage root.
    pub(crate) fn storage_root(&self) -> PathBuf {
        self.work_dir.join("components")
    }

    /// Path of the definition written for `id` in the default storage root.
    pub(crate) fn definition_path(&self, id: &str) -> PathBuf {
        self.storage_root().join(id).join(format!("{id}.component.yml"))
    }

    /// Write a definition file at `rel` below the project directory.
    pub(crate) fn write_definition(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create definition directory");
        }
        fs::write(&path, content).expect("Failed to write definition");
        path
    }

    /// Configure `vendor/` as a discovery root holding two library providers.
    pub(crate) fn with_vendor_libraries(&self) {
        self.write_config("[discovery]\npaths = [\"vendor\"]\n");
        self.write_definition(
            "vendor/site_studio/slider/slider.component.yml",
            "name: Slider\ntype: library\njs:\n  https://cdn.test/slider.js: { type: external }\n",
        );
        self.write_definition(
            "vendor/site_studio/fonts/fonts.component.yml",
            "name: Fonts\ntype: library\ncss:\n  https://cdn.test/fonts.css: { type: external }\n",
        );
        self.write_definition(
            "vendor/site_studio/hero/hero.component.yml",
            "name: Hero\ntype: block\n",
        );
    }

    /// Parse the definition written for `id`.
    pub(crate) fn read_definition(&self, id: &str) -> serde_yaml::Value {
        let content =
            fs::read_to_string(self.definition_path(id)).expect("Failed to read definition");
        serde_yaml::from_str(&content).expect("Definition should be valid YAML")
    }
}
