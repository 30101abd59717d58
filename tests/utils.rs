#![allow(dead_code)]

use preloader::cli::Args;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const TEMPLATE: &str = "<!DOCTYPE html>
<html>
  <head>
    <title>demo</title>
    <!--PRELOAD-HERE-->
  </head>
</html>
";

/// Creates a package directory with the given files, relative to its root.
pub fn create_package(name: &str, files: &[(&str, &str)]) -> (TempDir, std::path::PathBuf) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let root = tmp_dir.path().join(name);
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    fs::create_dir_all(&root).unwrap();
    (tmp_dir, root)
}

/// Arguments equivalent to `preloader <root>` with no flags.
pub fn default_args(root: &Path) -> Args {
    Args {
        package_root: root.to_path_buf(),
        template: None,
        package: None,
        include: Vec::new(),
        exclude: Vec::new(),
        diagnostics: false,
        verbose: 2,
        dry_run: false,
    }
}

/// Reads a file relative to the package root.
pub fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}
