#![allow(dead_code)]

pub mod source_dirs {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A struct with one query-bound field, the smallest input that generates output
    pub const TEST_STRUCT: &str = r##"
pub struct TestStruct {
    #[tag = r#"bind:"query""#]
    pub name: String,
}
"##;

    /// Create `<tempdir>/<name>/` and fill it with `files` (file name, contents).
    ///
    /// Returns the guard (keep it alive) and the created directory.
    pub fn create_source_dir(name: &str, files: &[(&str, &str)]) -> (TempDir, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }
        (root, dir)
    }

    pub fn read(path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("expected generated file {}: {e}", path.display()))
    }
}
