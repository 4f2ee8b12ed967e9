//! List command implementation.

use std::path::Path;

use super::{OutputFormat, print_json};
use crate::app::api::{self, ComponentSummary};
use crate::domain::AppError;

pub fn run_list(config: Option<&Path>, format: OutputFormat) -> Result<(), AppError> {
    let components = api::list(config)?;
    match format {
        OutputFormat::Json => print_json(&components),
        OutputFormat::Text => {
            print_listing(&components);
            Ok(())
        }
    }
}

pub(super) fn print_listing(components: &[ComponentSummary]) {
    if components.is_empty() {
        println!("No components found.");
        return;
    }

    println!("Components:");
    let mut current_provider: Option<&str> = None;
    for comp in components {
        if current_provider != Some(comp.provider.as_str()) {
            println!("  {}:", comp.provider);
            current_provider = Some(comp.provider.as_str());
        }
        let type_str =
            if comp.component_type.is_empty() { String::new() } else { format!(" [{}]", comp.component_type) };
        println!("    {} - {}{}", comp.id, comp.name, type_str);
    }
}
