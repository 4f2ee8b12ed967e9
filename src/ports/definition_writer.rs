//! Definition writer port definition.

use std::path::{Path, PathBuf};

use crate::domain::{ComponentDefinition, WriteError};

/// Persists component definitions.
pub trait DefinitionWriter {
    /// Write `definition` under `storage_root` and return the file path.
    fn write(
        &self,
        definition: &ComponentDefinition,
        storage_root: &Path,
    ) -> Result<PathBuf, WriteError>;
}
