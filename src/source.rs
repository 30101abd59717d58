//! Where candidate assets come from.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use globset::GlobMatcher;
use walkdir::WalkDir;

use crate::error::Result;
use crate::ext::PathExt;

/// A build output, addressed by package and `/`-separated package-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId {
    pub package: String,
    pub path: String,
}

impl AssetId {
    pub fn new(package: impl Into<String>, path: impl Into<String>) -> Self {
        Self { package: package.into(), path: path.into() }
    }
}

/// Trait for anything that can list the assets of a build.
pub trait CandidateSource {
    /// Returns every known asset whose path matches `pattern`.
    ///
    /// Called once per include pattern; the order of the result is not significant.
    fn find_candidates(&self, pattern: &GlobMatcher) -> Result<Vec<AssetId>>;
}

/// Lists the files below a package root on disk.
///
/// The root is walked once, on the first query; later queries reuse that listing.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
    package: String,
    files: OnceCell<Vec<String>>,
}

impl FileSystemSource {
    pub fn new<P: AsRef<Path>>(root: P, package: impl Into<String>) -> Self {
        Self { root: root.as_ref().to_path_buf(), package: package.into(), files: OnceCell::new() }
    }

    fn files(&self) -> Result<&[String]> {
        if let Some(files) = self.files.get() {
            return Ok(files.as_slice());
        }
        let files = self.walk()?;
        Ok(self.files.get_or_init(|| files).as_slice())
    }

    /// Collects the `/`-separated relative paths of every readable file.
    ///
    /// Unreadable entries and symlink loops are logged and skipped.
    fn walk(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        for dir_entry in WalkDir::new(&self.root).follow_links(true) {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry below '{}': {e}", self.root.display());
                    continue;
                }
            };
            if !dir_entry.file_type().is_file() {
                continue;
            }
            let relative = dir_entry.path().strip_prefix(&self.root).map_err(|e| {
                anyhow::anyhow!("'{}' is outside the package root: {e}", dir_entry.path().display())
            })?;
            files.push(relative.to_logical_path()?);
        }
        log::debug!("Found {} file(s) below '{}'", files.len(), self.root.display());
        Ok(files)
    }
}

impl CandidateSource for FileSystemSource {
    fn find_candidates(&self, pattern: &GlobMatcher) -> Result<Vec<AssetId>> {
        let found: Vec<AssetId> = self
            .files()?
            .iter()
            .filter(|path| pattern.is_match(path.as_str()))
            .map(|path| AssetId::new(self.package.as_str(), path.as_str()))
            .collect();
        log::debug!("Pattern '{}' matched {} file(s)", pattern.glob(), found.len());
        Ok(found)
    }
}

/// A fixed list of assets, for hosts that already know their build outputs.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    assets: Vec<AssetId>,
}

impl StaticSource {
    pub fn new(assets: Vec<AssetId>) -> Self {
        Self { assets }
    }

    /// Builds a source of `paths` that all belong to `package`.
    pub fn from_paths<I, S>(package: &str, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths.into_iter().map(|p| AssetId::new(package, p)).collect())
    }
}

impl CandidateSource for StaticSource {
    fn find_candidates(&self, pattern: &GlobMatcher) -> Result<Vec<AssetId>> {
        Ok(self.assets.iter().filter(|a| pattern.is_match(&a.path)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::Glob;
    use std::fs;

    fn matcher(glob: &str) -> GlobMatcher {
        Glob::new(glob).unwrap().compile_matcher()
    }

    #[test]
    fn static_source_filters_by_pattern() {
        let source = StaticSource::from_paths("demo", ["web/app.js", "lib/a.ttf", "test/x.js"]);
        let found = source.find_candidates(&matcher("web/**")).unwrap();
        assert_eq!(found, vec![AssetId::new("demo", "web/app.js")]);
    }

    #[test]
    fn file_system_source_walks_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("web/js")).unwrap();
        fs::create_dir_all(tmp.path().join("lib/fonts")).unwrap();
        fs::write(tmp.path().join("web/js/app.js"), "").unwrap();
        fs::write(tmp.path().join("lib/fonts/a.ttf"), "").unwrap();

        let source = FileSystemSource::new(tmp.path(), "demo");
        let mut found = source.find_candidates(&matcher("{web,lib}/**")).unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![AssetId::new("demo", "lib/fonts/a.ttf"), AssetId::new("demo", "web/js/app.js")]
        );
    }

    #[test]
    fn file_system_source_lists_the_root_once() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("web")).unwrap();
        fs::write(tmp.path().join("web/app.js"), "").unwrap();

        let source = FileSystemSource::new(tmp.path(), "demo");
        assert_eq!(source.find_candidates(&matcher("web/**")).unwrap().len(), 1);

        fs::write(tmp.path().join("web/late.js"), "").unwrap();
        assert_eq!(source.find_candidates(&matcher("web/**")).unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn file_system_source_skips_symlink_loops() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("web")).unwrap();
        fs::create_dir_all(tmp.path().join("node_modules")).unwrap();
        fs::write(tmp.path().join("web/app.js"), "").unwrap();
        std::os::unix::fs::symlink("..", tmp.path().join("node_modules/loop")).unwrap();

        let source = FileSystemSource::new(tmp.path(), "demo");
        let found = source.find_candidates(&matcher("web/**")).unwrap();
        assert_eq!(found, vec![AssetId::new("demo", "web/app.js")]);
    }
}
