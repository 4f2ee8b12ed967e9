//! Create command implementation: flag-driven or interactive form.

use std::io::ErrorKind;
use std::path::Path;

use clap::Args;
use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect, Select};

use crate::app::api;
use crate::app::commands::create::ComponentForm;
use crate::app::commands::list;
use crate::domain::AppError;
use crate::domain::form::{
    CreatedComponent, FieldDescriptor, FieldName, FormLayout, FormValues, MultiSelectField,
    SelectField, SubmitOutcome, TextAreaField, TextField, ValidationErrors,
};
use crate::ports::ComponentCatalog;

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Display name of the component
    #[arg(short, long)]
    name: Option<String>,
    /// Machine name (defaults to one derived from the name)
    #[arg(long)]
    id: Option<String>,
    /// Free-text description
    #[arg(short, long)]
    description: Option<String>,
    /// Component type: block, library, or plugin
    #[arg(short = 't', long = "type")]
    component_type: Option<String>,
    /// External JS asset URL (repeatable)
    #[arg(long = "js")]
    js: Vec<String>,
    /// External CSS asset URL (repeatable)
    #[arg(long = "css")]
    css: Vec<String>,
    /// Existing library providing JS to depend on (repeatable)
    #[arg(long = "existing-js")]
    existing_js: Vec<String>,
    /// Existing library providing CSS to depend on (repeatable)
    #[arg(long = "existing-css")]
    existing_css: Vec<String>,
    /// Fill in the form through prompts
    #[arg(short, long)]
    interactive: bool,
}

impl CreateArgs {
    fn to_values(&self) -> FormValues {
        FormValues {
            name: self.name.clone().unwrap_or_default(),
            id: self.id.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            component_type: self.component_type.clone().unwrap_or_default(),
            assets_js: self.js.join("\n"),
            assets_css: self.css.join("\n"),
            existing_js: self.existing_js.clone(),
            existing_css: self.existing_css.clone(),
        }
    }
}

pub fn run_create(config: Option<&Path>, args: CreateArgs) -> Result<i32, AppError> {
    let ctx = api::open_context(config)?;
    let form = ComponentForm::new(&ctx);
    let mut values = args.to_values();

    if !args.interactive && args.name.is_some() {
        return match form.submit(&values)? {
            SubmitOutcome::Complete(created) => {
                complete(&created, ctx.catalog())?;
                Ok(0)
            }
            SubmitOutcome::Rejected(errors) => Err(AppError::Validation(errors)),
            SubmitOutcome::Failed(err) => Err(err.into()),
        };
    }

    let layout = form.build()?;
    loop {
        if !prompt_values(&layout, &mut values)? {
            println!("Cancelled.");
            return Ok(0);
        }
        match form.submit(&values)? {
            SubmitOutcome::Complete(created) => {
                complete(&created, ctx.catalog())?;
                return Ok(0);
            }
            SubmitOutcome::Rejected(errors) => print_errors(&errors),
            SubmitOutcome::Failed(err) => {
                eprintln!("Error: {}", err);
                if !confirm("Retry with the same input?")? {
                    return Err(err.into());
                }
            }
        }
    }
}

/// Confirmation followed by the component listing.
fn complete<C: ComponentCatalog>(created: &CreatedComponent, catalog: &C) -> Result<(), AppError> {
    println!("✅ {} at {}", created.message, created.path.display());
    let components = list::execute(catalog)?;
    super::list::print_listing(&components);
    Ok(())
}

fn print_errors(errors: &ValidationErrors) {
    eprintln!("⚠️  Please correct the following:");
    for error in errors.iter() {
        eprintln!("  • {}: {}", error.field, error.message);
    }
}

/// Walk the layout, prompting for each field. Returns `false` on cancel.
fn prompt_values(layout: &FormLayout, values: &mut FormValues) -> Result<bool, AppError> {
    for descriptor in &layout.fields {
        if descriptor.requires_type() && values.component_type.trim().is_empty() {
            continue;
        }
        let answered = match descriptor {
            FieldDescriptor::Text(field) => prompt_text(field, values)?,
            FieldDescriptor::TextArea(field) => prompt_text_area(field, values)?,
            FieldDescriptor::Select(field) => prompt_select(field, values)?,
            FieldDescriptor::MultiSelect(field) => prompt_multi_select(field, values)?,
        };
        if !answered {
            return Ok(false);
        }
    }
    Ok(true)
}

fn text_value(values: &mut FormValues, field: FieldName) -> Option<&mut String> {
    match field {
        FieldName::Name => Some(&mut values.name),
        FieldName::Id => Some(&mut values.id),
        FieldName::Description => Some(&mut values.description),
        FieldName::Type => Some(&mut values.component_type),
        FieldName::AssetsJs => Some(&mut values.assets_js),
        FieldName::AssetsCss => Some(&mut values.assets_css),
        FieldName::ExistingJs | FieldName::ExistingCss => None,
    }
}

fn selection_value(values: &mut FormValues, field: FieldName) -> Option<&mut Vec<String>> {
    match field {
        FieldName::ExistingJs => Some(&mut values.existing_js),
        FieldName::ExistingCss => Some(&mut values.existing_css),
        _ => None,
    }
}

fn prompt_text(field: &TextField, values: &mut FormValues) -> Result<bool, AppError> {
    let suggestion = match field.suggest_from {
        Some(FieldName::Name) => api::suggest_machine_name(&values.name),
        _ => String::new(),
    };
    let Some(slot) = text_value(values, field.field) else {
        return Ok(true);
    };
    let initial = if slot.trim().is_empty() { suggestion } else { slot.clone() };

    let mut input = Input::<String>::new()
        .with_prompt(field.title)
        .with_initial_text(initial)
        .allow_empty(!field.required);
    if let Some(max) = field.max_length {
        input = input.validate_with(move |value: &String| -> Result<(), String> {
            if value.len() > max {
                Err(format!("must be at most {max} characters"))
            } else {
                Ok(())
            }
        });
    }

    match input.interact_text() {
        Ok(value) => {
            *slot = value;
            Ok(true)
        }
        Err(err) => cancelled_or(err, field.title),
    }
}

fn prompt_text_area(field: &TextAreaField, values: &mut FormValues) -> Result<bool, AppError> {
    let Some(slot) = text_value(values, field.field) else {
        return Ok(true);
    };
    if !slot.trim().is_empty() {
        println!("{}:\n{}", field.title, slot);
        if confirm(&format!("Keep {}?", field.title))? {
            return Ok(true);
        }
    }
    if let Some(description) = field.description {
        println!("{} (empty line to finish)", description);
    }

    let mut lines = Vec::new();
    loop {
        let line = match Input::<String>::new()
            .with_prompt(format!("{} [{}]", field.title, lines.len() + 1))
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(err) => return cancelled_or(err, field.title),
        };
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    *slot = lines.join("\n");
    Ok(true)
}

const NONE_OPTION: &str = "- None -";

fn prompt_select(field: &SelectField, values: &mut FormValues) -> Result<bool, AppError> {
    let Some(slot) = text_value(values, field.field) else {
        return Ok(true);
    };
    let offset = usize::from(!field.required);
    let mut items: Vec<&str> = Vec::with_capacity(field.options.len() + offset);
    if !field.required {
        items.push(NONE_OPTION);
    }
    items.extend(field.options.iter().map(|(_, label)| label.as_str()));

    let default = field
        .options
        .iter()
        .position(|(value, _)| value == slot.trim())
        .map_or(0, |index| index + offset);

    let selection = Select::new()
        .with_prompt(field.title)
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select {}: {}", field.title, err)))?;

    let Some(index) = selection else {
        return Ok(false);
    };
    *slot = if index < offset { String::new() } else { field.options[index - offset].0.clone() };
    Ok(true)
}

fn prompt_multi_select(field: &MultiSelectField, values: &mut FormValues) -> Result<bool, AppError> {
    let Some(slot) = selection_value(values, field.field) else {
        return Ok(true);
    };
    let items: Vec<String> =
        field.options.iter().map(|(id, name)| format!("{} ({})", name, id)).collect();
    let defaults: Vec<bool> = field.options.iter().map(|(id, _)| slot.contains(id)).collect();

    let selection = MultiSelect::new()
        .with_prompt(field.title.as_str())
        .items(&items)
        .defaults(&defaults)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select {}: {}", field.title, err)))?;

    let Some(indices) = selection else {
        return Ok(false);
    };
    *slot = indices.into_iter().map(|i| field.options[i].0.clone()).collect();
    Ok(true)
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|err| AppError::config_error(format!("Failed to read confirmation: {}", err)))
}

fn cancelled_or(err: DialoguerError, title: &str) -> Result<bool, AppError> {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => Ok(false),
        err => Err(AppError::config_error(format!("Failed to read {}: {}", title, err))),
    }
}
