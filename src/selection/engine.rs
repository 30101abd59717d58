use std::collections::HashSet;

use globset::GlobMatcher;

use crate::classifier::{classify, Classification};
use crate::constants::DEFAULT_INCLUDE_PATTERNS;
use crate::entry::PreloadEntry;
use crate::error::Result;
use crate::ignore::{compile_include_patterns, ExcludeSet};
use crate::source::CandidateSource;

use super::diagnostics::{DiagnosticSink, NoDiagnostics, SkipLog};

/// Which assets to consider, fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub diagnostics: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            exclude: Vec::new(),
            diagnostics: false,
        }
    }
}

/// Result of [`SelectionEngine::select_with_report`].
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub entries: Vec<PreloadEntry>,
    /// Present only when diagnostics are enabled; its table is what gets logged.
    pub skipped: Option<SkipLog>,
}

/// Turns the candidates of a [`CandidateSource`] into an ordered, deduplicated
/// list of preload entries.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    include: Vec<GlobMatcher>,
    exclude: ExcludeSet,
    diagnostics: bool,
}

impl SelectionEngine {
    /// Compiles the configured patterns. An empty include list means the
    /// default `web/**` and `lib/**`.
    ///
    /// # Errors
    /// Returns an error if any include or exclude pattern is not a valid glob.
    pub fn new(config: &SelectionConfig) -> Result<Self> {
        let include = if config.include.is_empty() {
            SelectionConfig::default().include
        } else {
            config.include.clone()
        };
        Ok(Self {
            include: compile_include_patterns(&include)?,
            exclude: ExcludeSet::new(&config.exclude)?,
            diagnostics: config.diagnostics,
        })
    }

    /// Selects, classifies, deduplicates and sorts the candidates of `source`.
    ///
    /// Skipped candidates are reported to `sink`. An unknown source root aborts
    /// the whole selection and nothing is returned.
    pub fn select(
        &self,
        source: &dyn CandidateSource,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<PreloadEntry>> {
        let mut selected = HashSet::new();

        for pattern in &self.include {
            for asset in source.find_candidates(pattern)? {
                if let Some(excluded_by) = self.exclude.first_match(&asset.path) {
                    log::debug!("Skipping '{}': excluded by `{excluded_by}`", asset.path);
                    sink.skipped(&asset.path, &format!("excluded by pattern `{excluded_by}`"));
                    continue;
                }
                match classify(&asset)? {
                    Classification::Preload(entry) => {
                        selected.insert(entry);
                    }
                    Classification::Excluded { reason } => {
                        log::debug!("Skipping '{}': {reason}", asset.path);
                        sink.skipped(&asset.path, &reason);
                    }
                }
            }
        }

        let mut entries: Vec<PreloadEntry> = selected.into_iter().collect();
        entries.sort();
        Ok(entries)
    }

    /// Runs [`select`](Self::select) with a sink chosen by the diagnostics flag
    /// and logs the skip table at warn level when it is enabled.
    pub fn select_with_report(&self, source: &dyn CandidateSource) -> Result<Selection> {
        if !self.diagnostics {
            let entries = self.select(source, &mut NoDiagnostics)?;
            return Ok(Selection { entries, skipped: None });
        }

        let mut skip_log = SkipLog::new();
        let entries = self.select(source, &mut skip_log)?;
        if !skip_log.is_empty() {
            log::warn!("Skipped the following assets:\n{}", skip_log.table());
        }
        Ok(Selection { entries, skipped: Some(skip_log) })
    }
}
