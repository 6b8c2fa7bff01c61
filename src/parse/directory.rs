use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::source::AnnotationParser;
use crate::descriptor::RecordDescriptor;
use crate::generator::to_snake_case;

/// Descriptors gathered from one directory.
#[derive(Debug, Clone)]
pub struct ParsedDirectory {
    /// Records from every source file, file by file in name order
    pub records: Vec<RecordDescriptor>,
    /// Module name derived from the directory name
    pub group_name: String,
}

/// Parse every `.rs` file directly inside `dir`.
///
/// Subdirectories are not visited. Files ending with `skip_suffix` are
/// treated as previously generated output and ignored.
///
/// # Errors
///
/// Fails if the directory or a file cannot be read, or if any file does not
/// parse. The error names the offending path.
pub fn parse_directory(
    dir: &Path,
    parser: &AnnotationParser,
    skip_suffix: &str,
) -> anyhow::Result<ParsedDirectory> {
    let group_name = group_name(dir)?;
    let mut files = source_files(dir, skip_suffix)?;
    files.sort();

    let mut records = Vec::new();
    for path in &files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {:?}", path))?;
        let parsed = parser
            .parse(&source)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        debug!(path = %path.display(), records = parsed.len(), "parsed source file");
        records.extend(parsed);
    }

    info!(
        dir = %dir.display(),
        files = files.len(),
        records = records.len(),
        "parsed directory"
    );
    Ok(ParsedDirectory {
        records,
        group_name,
    })
}

fn source_files(dir: &Path, skip_suffix: &str) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory: {:?}", dir))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let generated = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| !skip_suffix.is_empty() && n.ends_with(skip_suffix));
        if generated {
            debug!(path = %path.display(), "skipping generated file");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Module name for a directory: its last component in snake_case.
fn group_name(dir: &Path) -> anyhow::Result<String> {
    let canonical = fs::canonicalize(dir)
        .with_context(|| format!("Failed to canonicalize directory: {:?}", dir))?;
    let name = canonical
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Cannot derive a module name from {:?}", dir))?;
    let module: String = to_snake_case(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if module.is_empty() || module.starts_with(|c: char| c.is_ascii_digit()) {
        anyhow::bail!("Directory name {:?} is not a valid module name", name);
    }
    Ok(module)
}
