mod common;

use common::source_dirs::{create_source_dir, read, TEST_STRUCT};
use tagwrangler::generator::{generate_bindings, GenerateOptions, OutputPlan};
use tagwrangler::parse::{parse_directory, AnnotationParser};
use tagwrangler::runtime_config::GeneratorConfig;

fn options() -> GenerateOptions {
    GenerateOptions {
        config: GeneratorConfig::default(),
        dry_run: false,
    }
}

#[test]
fn test_same_location_strategy() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);

    let written = generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &options()).unwrap();

    let expected = dir.join("testpkg_bindings.rs");
    assert_eq!(written, vec![expected.clone()]);
    let code = read(&expected);
    assert!(code.contains("Request binding and validation for `testpkg`"));
    assert!(code.contains("pub fn bind_test_struct<B>("));
    assert!(code.contains("s.name = query_value(req, \"name\");"));
}

#[test]
fn test_same_location_regeneration_skips_own_output() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);

    generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &options()).unwrap();
    let first = read(&dir.join("testpkg_bindings.rs"));
    generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &options()).unwrap();
    let second = read(&dir.join("testpkg_bindings.rs"));
    assert_eq!(first, second);

    let parsed = parse_directory(&dir, &AnnotationParser::new(), "_bindings.rs").unwrap();
    assert_eq!(parsed.records.len(), 1);
}

#[test]
fn test_per_group_strategy() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);
    let target = tempfile::tempdir().unwrap();
    let target_dir = target.path().join("bindings");

    let plan = OutputPlan::PerGroup {
        target_dir: target_dir.clone(),
        target_pkgs: vec!["otarget".to_string()],
    };
    generate_bindings(&[dir], &plan, &options()).unwrap();

    let code = read(&target_dir.join("otarget.rs"));
    assert!(code.contains("Request binding and validation for `otarget`"));
    assert!(code.contains("pub fn bind_test_struct<B>("));
}

#[test]
fn test_single_group_strategy_merges_directories() {
    let (_a, users) = create_source_dir(
        "users",
        &[(
            "user.rs",
            r##"
pub struct User {
    #[tag = r#"bind:"header,required""#]
    pub name: String,
}
"##,
        )],
    );
    let (_b, orders) = create_source_dir(
        "orders",
        &[(
            "order.rs",
            r##"
pub struct Order {
    #[tag = r#"bind:"path,required" validate:"min=1""#]
    pub id: u64,
}
"##,
        )],
    );
    let target = tempfile::tempdir().unwrap();

    let plan = OutputPlan::SingleGroup {
        target_dir: target.path().to_path_buf(),
        target_pkg: "bindings".to_string(),
    };
    let written = generate_bindings(&[users, orders], &plan, &options()).unwrap();
    assert_eq!(written.len(), 1);

    let code = read(&target.path().join("bindings.rs"));
    let user_at = code.find("pub fn bind_user<B>(").unwrap();
    let order_at = code.find("pub fn bind_order<B>(").unwrap();
    assert!(user_at < order_at);
    assert!(code.contains("return Err(\"id must be at least 1\".to_string());"));
}

#[test]
fn test_directory_without_tagged_structs_writes_nothing() {
    let (_root, dir) = create_source_dir("empty", &[("plain.rs", "pub struct Plain { pub a: u8 }")]);
    let written = generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &options()).unwrap();
    assert!(written.is_empty());
    assert!(!dir.join("empty_bindings.rs").exists());
}

#[test]
fn test_dry_run_does_not_write() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);
    let opts = GenerateOptions {
        config: GeneratorConfig::default(),
        dry_run: true,
    };
    let written = generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &opts).unwrap();
    assert_eq!(written, vec![dir.join("testpkg_bindings.rs")]);
    assert!(!dir.join("testpkg_bindings.rs").exists());
}

#[test]
fn test_syntax_error_aborts_before_writing() {
    let (_root, dir) = create_source_dir(
        "broken",
        &[
            ("a.rs", TEST_STRUCT),
            ("b.rs", "pub struct Broken { name String }"),
        ],
    );
    let err = generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &options()).unwrap_err();
    assert!(format!("{err:#}").contains("syntax error"));
    assert!(!dir.join("broken_bindings.rs").exists());
}

#[test]
fn test_per_group_requires_matching_package_count() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);
    let target = tempfile::tempdir().unwrap();
    let plan = OutputPlan::PerGroup {
        target_dir: target.path().to_path_buf(),
        target_pkgs: vec!["one".to_string(), "two".to_string()],
    };
    let err = generate_bindings(&[dir], &plan, &options()).unwrap_err();
    assert!(err.to_string().contains("must match number of input directories"));
}

#[test]
fn test_invalid_target_module_name() {
    let (_root, dir) = create_source_dir("testpkg", &[("test.rs", TEST_STRUCT)]);
    let target = tempfile::tempdir().unwrap();
    let plan = OutputPlan::SingleGroup {
        target_dir: target.path().to_path_buf(),
        target_pkg: "not-a-module".to_string(),
    };
    assert!(generate_bindings(&[dir], &plan, &options()).is_err());
}

#[test]
fn test_missing_directory_fails() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("nope");
    assert!(generate_bindings(&[missing], &OutputPlan::SameLocation, &options()).is_err());
}

#[test]
fn test_custom_tag_attribute_from_config() {
    let (_root, dir) = create_source_dir(
        "custom",
        &[(
            "model.rs",
            r##"
pub struct Search {
    #[wrangle = r#"bind:"query,required""#]
    pub q: String,
}
"##,
        )],
    );
    let opts = GenerateOptions {
        config: GeneratorConfig {
            tag_attribute: "wrangle".to_string(),
            bindings_suffix: "_gen.rs".to_string(),
        },
        dry_run: false,
    };
    generate_bindings(&[dir.clone()], &OutputPlan::SameLocation, &opts).unwrap();
    let code = read(&dir.join("custom_gen.rs"));
    assert!(code.contains("return Err(\"q is required\".to_string());"));
}
