use askama::Template;
use std::fs;
use std::path::Path;

use anyhow::Context;

use super::functions::{generate_bind_function, generate_validate_function};
use crate::descriptor::RecordDescriptor;

/// Generated functions of one record, ready for the module template
#[derive(Debug, Clone)]
pub struct RenderedRecord {
    /// Record type name
    pub name: String,
    /// Text of `bind_<record>`
    pub bind_fn: String,
    /// Text of `validate_<record>`
    pub validate_fn: String,
}

impl RenderedRecord {
    pub fn from_descriptor(record: &RecordDescriptor) -> Self {
        Self {
            name: record.name.clone(),
            bind_fn: generate_bind_function(record),
            validate_fn: generate_validate_function(record),
        }
    }
}

/// Template data for a generated bindings module
#[derive(Template)]
#[template(path = "bindings.rs.txt", escape = "none")]
pub struct BindingsTemplateData {
    /// Module (target) name shown in the header
    pub target: String,
    /// Records in output order
    pub records: Vec<RenderedRecord>,
}

/// Render a complete bindings module for `records`.
///
/// The module imports the record types with `use super::*;`, so it must be
/// declared next to (or below) the module that defines them.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn synthesize(records: &[RecordDescriptor], target: &str) -> anyhow::Result<String> {
    let data = BindingsTemplateData {
        target: target.to_string(),
        records: records.iter().map(RenderedRecord::from_descriptor).collect(),
    };
    let mut rendered = data
        .render()
        .with_context(|| format!("Failed to render bindings for {}", target))?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render bindings for `records` and write them to `path`.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_bindings(path: &Path, records: &[RecordDescriptor], target: &str) -> anyhow::Result<()> {
    let code = synthesize(records, target)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
    }
    fs::write(path, code).with_context(|| format!("Failed to write generated file: {:?}", path))?;
    println!("✅ Generated code written to {}", path.display());
    Ok(())
}
