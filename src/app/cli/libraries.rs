//! Libraries command implementation.

use std::path::Path;

use super::{OutputFormat, print_json};
use crate::app::api;
use crate::domain::{AppError, AssetKind};

pub fn run_libraries(
    config: Option<&Path>,
    kind: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let kind = kind.map(str::parse::<AssetKind>).transpose()?;
    let libraries = api::libraries(kind, config)?;

    if format == OutputFormat::Json {
        return print_json(&libraries);
    }

    if libraries.is_empty() {
        println!("No libraries found.");
        return Ok(());
    }
    for kind in AssetKind::ALL {
        let entries: Vec<_> = libraries.iter().filter(|l| l.kind == kind.as_str()).collect();
        if entries.is_empty() {
            continue;
        }
        println!("{} libraries:", kind.label());
        for lib in entries {
            println!("  {} - {}", lib.id, lib.name);
        }
    }
    Ok(())
}
