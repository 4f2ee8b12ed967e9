//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::app::config::{LoadedConfig, load_config};
use crate::app::{
    AppContext,
    commands::{create::ComponentForm, libraries, list},
};
use crate::domain::form::{FormLayout, FormValues, SubmitOutcome};
use crate::domain::{AppError, AssetKind, MachineName};
use crate::services::{
    FilesystemAssetBuilder, FilesystemComponentCatalog, FilesystemDefinitionWriter, WriteMode,
};

pub use crate::app::commands::libraries::LibrarySummary;
pub use crate::app::commands::list::ComponentSummary;

/// Context wired to the filesystem adapters.
pub type FilesystemContext =
    AppContext<FilesystemComponentCatalog, FilesystemAssetBuilder, FilesystemDefinitionWriter>;

/// Create a filesystem `AppContext` from a loaded configuration.
///
/// Definitions are written create-exclusive so that the filesystem, not the
/// catalog pre-check, decides which of two racing submissions wins.
pub fn create_context(loaded: &LoadedConfig) -> FilesystemContext {
    let storage_root = loaded.storage_root();
    let catalog = FilesystemComponentCatalog::new(
        storage_root.clone(),
        loaded.config.storage.provider.clone(),
        loaded.discovery_roots(),
    );
    let writer = FilesystemDefinitionWriter::new(WriteMode::CreateNew)
        .with_timeout(loaded.config.write.timeout());
    AppContext::new(catalog, FilesystemAssetBuilder, writer, storage_root)
}

/// Load configuration relative to the current directory and build a context.
pub fn open_context(config: Option<&Path>) -> Result<FilesystemContext, AppError> {
    open_context_at(config, &std::env::current_dir()?)
}

/// Load configuration relative to `cwd` and build a context.
pub fn open_context_at(config: Option<&Path>, cwd: &Path) -> Result<FilesystemContext, AppError> {
    let loaded = load_config(config, cwd)?;
    Ok(create_context(&loaded))
}

// =============================================================================
// Create Command API
// =============================================================================

/// Submit one component definition.
pub fn create(values: &FormValues, config: Option<&Path>) -> Result<SubmitOutcome, AppError> {
    create_at(values, config, &std::env::current_dir()?)
}

/// Submit one component definition, resolving configuration from `cwd`.
pub fn create_at(
    values: &FormValues,
    config: Option<&Path>,
    cwd: &Path,
) -> Result<SubmitOutcome, AppError> {
    let ctx = open_context_at(config, cwd)?;
    ComponentForm::new(&ctx).submit(values)
}

/// Lay out the component definition form.
pub fn form_layout(config: Option<&Path>) -> Result<FormLayout, AppError> {
    let ctx = open_context(config)?;
    ComponentForm::new(&ctx).build()
}

/// Suggest a machine name for a label.
pub fn suggest_machine_name(label: &str) -> String {
    MachineName::suggest(label.trim())
}

// =============================================================================
// Listing API
// =============================================================================

/// List every known component.
pub fn list(config: Option<&Path>) -> Result<Vec<ComponentSummary>, AppError> {
    list_at(config, &std::env::current_dir()?)
}

pub fn list_at(config: Option<&Path>, cwd: &Path) -> Result<Vec<ComponentSummary>, AppError> {
    let ctx = open_context_at(config, cwd)?;
    list::execute(ctx.catalog())
}

/// List library components offering assets, optionally for one kind.
pub fn libraries(
    kind: Option<AssetKind>,
    config: Option<&Path>,
) -> Result<Vec<LibrarySummary>, AppError> {
    libraries_at(kind, config, &std::env::current_dir()?)
}

pub fn libraries_at(
    kind: Option<AssetKind>,
    config: Option<&Path>,
    cwd: &Path,
) -> Result<Vec<LibrarySummary>, AppError> {
    let ctx = open_context_at(config, cwd)?;
    libraries::execute(ctx.catalog(), ctx.assets(), kind)
}
