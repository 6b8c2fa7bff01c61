use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::templates::{synthesize, write_bindings};
use crate::descriptor::RecordDescriptor;
use crate::parse::{parse_directory, AnnotationParser};
use crate::runtime_config::GeneratorConfig;

/// Where generated modules are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPlan {
    /// One `<group>_bindings.rs` inside each input directory
    SameLocation,
    /// One `<target_dir>/<pkg>.rs` per input directory, `pkgs[i]` for `dirs[i]`
    PerGroup {
        target_dir: PathBuf,
        target_pkgs: Vec<String>,
    },
    /// All records of all directories merged into `<target_dir>/<target_pkg>.rs`
    SingleGroup {
        target_dir: PathBuf,
        target_pkg: String,
    },
}

impl OutputPlan {
    /// Check the plan against the input directories before anything is parsed.
    ///
    /// # Errors
    ///
    /// Fails when the number of target modules does not match the number of
    /// input directories, or a target name is not a valid module name.
    pub fn validate(&self, dirs: &[PathBuf]) -> anyhow::Result<()> {
        if dirs.is_empty() {
            anyhow::bail!("at least one input directory is required");
        }
        match self {
            OutputPlan::SameLocation => Ok(()),
            OutputPlan::PerGroup { target_pkgs, .. } => {
                if target_pkgs.len() != dirs.len() {
                    anyhow::bail!(
                        "number of target packages ({}) must match number of input directories ({})",
                        target_pkgs.len(),
                        dirs.len()
                    );
                }
                target_pkgs.iter().try_for_each(|pkg| check_module_name(pkg))
            }
            OutputPlan::SingleGroup { target_pkg, .. } => check_module_name(target_pkg),
        }
    }
}

fn check_module_name(name: &str) -> anyhow::Result<()> {
    if syn::parse_str::<syn::Ident>(name).is_err() {
        anyhow::bail!("target package {:?} is not a valid module name", name);
    }
    Ok(())
}

/// Options shared by every output plan
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub config: GeneratorConfig,
    /// Report output paths without writing
    pub dry_run: bool,
}

/// Parse `dirs` and write bindings according to `plan`.
///
/// Returns the paths written (or that would be written in a dry run).
///
/// # Errors
///
/// Fails on an invalid plan, an unreadable or unparsable source file, or a
/// write failure. Nothing is written for a directory that fails to parse.
pub fn generate_bindings(
    dirs: &[PathBuf],
    plan: &OutputPlan,
    options: &GenerateOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    plan.validate(dirs)?;
    let parser = AnnotationParser::with_attribute(options.config.tag_attribute.clone());
    let suffix = options.config.bindings_suffix.as_str();

    let mut outputs = Vec::new();
    match plan {
        OutputPlan::SameLocation => {
            for dir in dirs {
                let parsed = parse_directory(dir, &parser, suffix)?;
                if !report_records(dir, &parsed.records) {
                    continue;
                }
                let path = dir.join(format!("{}{}", parsed.group_name, suffix));
                emit(&path, &parsed.records, &parsed.group_name, options)?;
                outputs.push(path);
            }
        }
        OutputPlan::PerGroup {
            target_dir,
            target_pkgs,
        } => {
            for (dir, pkg) in dirs.iter().zip(target_pkgs) {
                let parsed = parse_directory(dir, &parser, suffix)?;
                if !report_records(dir, &parsed.records) {
                    continue;
                }
                let path = target_dir.join(format!("{}.rs", pkg));
                emit(&path, &parsed.records, pkg, options)?;
                outputs.push(path);
            }
        }
        OutputPlan::SingleGroup {
            target_dir,
            target_pkg,
        } => {
            // Accumulate everything first so the merged module is written once.
            let mut all = Vec::new();
            for dir in dirs {
                let parsed = parse_directory(dir, &parser, suffix)?;
                if report_records(dir, &parsed.records) {
                    all.extend(parsed.records);
                }
            }
            if all.is_empty() {
                println!("No structs with bind or validate tags found.");
                return Ok(outputs);
            }
            let path = target_dir.join(format!("{}.rs", target_pkg));
            emit(&path, &all, target_pkg, options)?;
            outputs.push(path);
        }
    }
    Ok(outputs)
}

/// Print what was found; false when there is nothing to generate.
fn report_records(dir: &Path, records: &[RecordDescriptor]) -> bool {
    if records.is_empty() {
        println!("No structs in {}", dir.display());
        warn!(dir = %dir.display(), "no tagged structs found");
        return false;
    }
    for record in records {
        println!("Parsed struct: {}", record.name);
    }
    true
}

fn emit(
    path: &Path,
    records: &[RecordDescriptor],
    target: &str,
    options: &GenerateOptions,
) -> anyhow::Result<()> {
    if options.dry_run {
        // Render anyway so template failures show up in a dry run.
        let code = synthesize(records, target)?;
        println!(
            "🔍 Dry run: would write {} ({} bytes)",
            path.display(),
            code.len()
        );
        return Ok(());
    }
    info!(path = %path.display(), records = records.len(), target, "writing bindings");
    write_bindings(path, records, target)
}
