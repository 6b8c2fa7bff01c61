//! Unit tests for CLI commands

use crate::cli::{build_plan, Cli, Commands, Strategy};
use crate::generator::OutputPlan;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_generate_defaults_to_same_strategy() {
    let cli = Cli::try_parse_from(["tagwrangler-gen", "generate", "models"]).unwrap();

    match cli.command {
        Commands::Generate {
            strategy,
            dirs,
            dry_run,
            ..
        } => {
            assert_eq!(strategy, Strategy::Same);
            assert_eq!(dirs, vec![PathBuf::from("models")]);
            assert!(!dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_per_flags() {
    let cli = Cli::try_parse_from([
        "tagwrangler-gen",
        "generate",
        "--strategy",
        "per",
        "--target-dir",
        "out",
        "--target-pkgs",
        "users orders",
        "src/users",
        "src/orders",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            strategy,
            target_dir,
            target_pkgs,
            dirs,
            ..
        } => {
            assert_eq!(strategy, Strategy::Per);
            assert_eq!(target_dir, Some(PathBuf::from("out")));
            assert_eq!(
                target_pkgs,
                Some(vec!["users".to_string(), "orders".to_string()])
            );
            assert_eq!(dirs.len(), 2);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_missing_directories_is_rejected() {
    assert!(Cli::try_parse_from(["tagwrangler-gen", "generate"]).is_err());
    assert!(Cli::try_parse_from(["tagwrangler-gen", "inspect"]).is_err());
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let cli = Cli::try_parse_from(["tagwrangler-gen", "generate", "--strategy", "all", "models"]);
    assert!(cli.is_err());
}

#[test]
fn test_inspect_json_flag() {
    let cli = Cli::try_parse_from(["tagwrangler-gen", "inspect", "--json", "models"]).unwrap();
    match cli.command {
        Commands::Inspect { json, dirs } => {
            assert!(json);
            assert_eq!(dirs, vec![PathBuf::from("models")]);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_build_plan_requires_strategy_flags() {
    assert!(build_plan(Strategy::Per, None, Some("out".into()), None).is_err());
    assert!(build_plan(Strategy::Per, None, None, Some(vec!["a".into()])).is_err());
    assert!(build_plan(Strategy::Single, Some("api".into()), None, None).is_err());
    assert!(build_plan(Strategy::Single, None, Some("out".into()), None).is_err());

    let plan = build_plan(Strategy::Single, Some("api".into()), Some("out".into()), None).unwrap();
    assert_eq!(
        plan,
        OutputPlan::SingleGroup {
            target_dir: PathBuf::from("out"),
            target_pkg: "api".to_string(),
        }
    );
    assert_eq!(
        build_plan(Strategy::Same, None, None, None).unwrap(),
        OutputPlan::SameLocation
    );
}
