use crate::{constants::IGNORE_FILE, error::Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads the `.preloadignore` file of a package, if any, and returns its patterns.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_preloadignore_file<P: AsRef<Path>>(package_root: P) -> Vec<String> {
    let ignore_path = package_root.as_ref().join(IGNORE_FILE);
    match read_to_string(&ignore_path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(_) => {
            debug!("No {IGNORE_FILE} file found, using configured patterns only.");
            Vec::new()
        }
    }
}

/// Compiles include patterns into one matcher each, so a source can be queried per pattern.
pub fn compile_include_patterns(patterns: &[String]) -> Result<Vec<GlobMatcher>> {
    patterns
        .iter()
        .map(|pattern| -> Result<GlobMatcher> {
            debug!("Compiling include pattern: {pattern}");
            Ok(Glob::new(pattern)?.compile_matcher())
        })
        .collect()
}

/// A set of exclude globs that remembers the source text of each pattern.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    patterns: Vec<String>,
    globset: GlobSet,
}

impl ExcludeSet {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            debug!("Adding exclude pattern: {pattern} to globset");
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { patterns: patterns.to_vec(), globset: builder.build()? })
    }

    /// Returns the first configured pattern that matches `path`.
    pub fn first_match(&self, path: &str) -> Option<&str> {
        self.globset
            .matches(path)
            .into_iter()
            .min()
            .map(|index| self.patterns[index].as_str())
    }
}
