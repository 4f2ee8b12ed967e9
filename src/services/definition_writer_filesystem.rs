//! Filesystem definition writer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::domain::{ComponentDefinition, WriteError, definition_file_name, render_definition};
use crate::ports::DefinitionWriter;

/// How an existing definition file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace any existing file.
    #[default]
    Overwrite,
    /// Fail with `WriteError::AlreadyExists` if the file exists.
    CreateNew,
}

/// Writes definitions to `<root>/<id>/<id>.component.yml`.
#[derive(Debug, Clone, Default)]
pub struct FilesystemDefinitionWriter {
    mode: WriteMode,
    timeout: Option<Duration>,
}

impl FilesystemDefinitionWriter {
    pub fn new(mode: WriteMode) -> Self {
        Self { mode, timeout: None }
    }

    /// Bound each write by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

}

impl DefinitionWriter for FilesystemDefinitionWriter {
    fn write(
        &self,
        definition: &ComponentDefinition,
        storage_root: &Path,
    ) -> Result<PathBuf, WriteError> {
        let yaml = render_definition(definition)
            .map_err(|e| WriteError::SerializationFailed(e.to_string()))?;
        let dir = storage_root.join(definition.id.as_str());
        let path = dir.join(definition_file_name(definition.id.as_str()));

        match self.timeout {
            None => persist(&dir, &path, yaml.as_bytes(), self.mode)?,
            Some(after) => persist_with_deadline(dir, path.clone(), yaml, self.mode, after)?,
        }

        tracing::info!(id = %definition.id, path = %path.display(), "component definition written");
        Ok(path)
    }
}

fn persist(dir: &Path, path: &Path, bytes: &[u8], mode: WriteMode) -> Result<(), WriteError> {
    fs::create_dir_all(dir)
        .map_err(|source| WriteError::DirectoryCreateFailed { path: dir.to_path_buf(), source })?;

    let mut options = OpenOptions::new();
    options.write(true);
    match mode {
        WriteMode::Overwrite => options.create(true).truncate(true),
        WriteMode::CreateNew => options.create_new(true),
    };

    let mut file =
        options.open(path).map_err(|e| WriteError::from_file_io(path.to_path_buf(), e))?;
    file.write_all(bytes).map_err(|e| WriteError::from_file_io(path.to_path_buf(), e))?;
    Ok(())
}

/// Run the write on a worker thread and give up waiting after `after`.
///
/// An abandoned worker may still complete the write later.
fn persist_with_deadline(
    dir: PathBuf,
    path: PathBuf,
    yaml: String,
    mode: WriteMode,
    after: Duration,
) -> Result<(), WriteError> {
    let (tx, rx) = mpsc::channel();
    let target = path.clone();
    thread::spawn(move || {
        let _ = tx.send(persist(&dir, &target, yaml.as_bytes(), mode));
    });

    match rx.recv_timeout(after) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            tracing::warn!(path = %path.display(), timeout_ms = after.as_millis() as u64, "definition write timed out");
            Err(WriteError::Timeout { path, after })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(WriteError::WriteFailed {
            path,
            source: std::io::Error::other("writer thread exited without a result"),
        }),
    }
}
