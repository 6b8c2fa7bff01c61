use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::descriptor::RecordDescriptor;
use crate::generator::{generate_bindings, GenerateOptions, OutputPlan};
use crate::parse::{parse_directory, AnnotationParser};
use crate::runtime_config::GeneratorConfig;

/// Command-line interface for tagwrangler
///
/// Generates request binding and validation functions from tag-annotated
/// Rust structs.
#[derive(Parser)]
#[command(name = "tagwrangler-gen")]
#[command(about = "Generate bind/validate functions from tagged structs", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate bindings for the tagged structs in one or more directories
    Generate {
        /// Output strategy
        #[arg(long, value_enum, default_value_t = Strategy::Same, env = "TAGWRANGLER_STRATEGY")]
        strategy: Strategy,

        /// Target module name for the single strategy
        #[arg(long, env = "TAGWRANGLER_TARGET_PKG")]
        target_pkg: Option<String>,

        /// Target directory for the per or single strategy
        #[arg(long, env = "TAGWRANGLER_TARGET_DIR")]
        target_dir: Option<PathBuf>,

        /// Target module names for the per strategy, one per input directory (space-separated)
        #[arg(long, value_delimiter = ' ')]
        target_pkgs: Option<Vec<String>>,

        /// Show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Directories containing the annotated source files
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
    /// Print the descriptors parsed from one or more directories
    Inspect {
        /// Print JSON instead of a readable listing
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Directories containing the annotated source files
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
}

/// How generated modules are grouped on disk
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Write `<dir>/<dir>_bindings.rs` next to each input directory's sources
    Same,
    /// Write one `<target-dir>/<pkg>.rs` per input directory
    Per,
    /// Merge every directory into `<target-dir>/<target-pkg>.rs`
    Single,
}

/// Parse process arguments and execute the command.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns an error if:
/// - The strategy flags are missing or inconsistent with the input directories
/// - A source file cannot be read or is not valid Rust
/// - A generated file cannot be written
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::from_env();
    match cli.command {
        Commands::Generate {
            strategy,
            target_pkg,
            target_dir,
            target_pkgs,
            dry_run,
            dirs,
        } => {
            let plan = build_plan(strategy, target_pkg, target_dir, target_pkgs)?;
            let options = GenerateOptions { config, dry_run };
            generate_bindings(&dirs, &plan, &options)?;
            Ok(())
        }
        Commands::Inspect { json, dirs } => {
            let parser = AnnotationParser::with_attribute(config.tag_attribute.clone());
            let mut all = Vec::new();
            for dir in &dirs {
                let parsed = parse_directory(dir, &parser, &config.bindings_suffix)?;
                all.extend(parsed.records);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                print_records(&all);
            }
            Ok(())
        }
    }
}

/// Turn strategy flags into an [`OutputPlan`].
///
/// # Errors
///
/// Fails when a flag the strategy needs is missing.
pub fn build_plan(
    strategy: Strategy,
    target_pkg: Option<String>,
    target_dir: Option<PathBuf>,
    target_pkgs: Option<Vec<String>>,
) -> anyhow::Result<OutputPlan> {
    match strategy {
        Strategy::Same => Ok(OutputPlan::SameLocation),
        Strategy::Per => match (target_dir, target_pkgs) {
            (Some(target_dir), Some(target_pkgs)) if !target_pkgs.is_empty() => {
                Ok(OutputPlan::PerGroup {
                    target_dir,
                    target_pkgs,
                })
            }
            _ => anyhow::bail!("per strategy requires --target-dir and --target-pkgs"),
        },
        Strategy::Single => match (target_pkg, target_dir) {
            (Some(target_pkg), Some(target_dir)) if !target_pkg.is_empty() => {
                Ok(OutputPlan::SingleGroup {
                    target_dir,
                    target_pkg,
                })
            }
            _ => anyhow::bail!("single strategy requires --target-pkg and --target-dir"),
        },
    }
}

fn print_records(records: &[RecordDescriptor]) {
    if records.is_empty() {
        println!("No structs with bind or validate tags found.");
        return;
    }
    for record in records {
        println!("Struct: {}", record.name);
        for field in &record.fields {
            println!("  Field: {} ({})", field.name, field.ty);
            if let Some(bind) = &field.bind {
                println!("    Bind: {} (required: {})", bind.source, bind.required);
            }
            if let Some(validate) = &field.validate {
                if let Some(min) = validate.min() {
                    println!("    Validate Min: {}", min);
                }
                if let Some(max) = validate.max() {
                    println!("    Validate Max: {}", max);
                }
            }
        }
    }
}
