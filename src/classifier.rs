//! Maps a build output to a preload entry or a reason to leave it out.

use crate::constants::{EXCLUDED_INFIXES, EXCLUDED_SUFFIXES, PACKAGES_PREFIX};
use crate::entry::{PreloadEntry, ResourceKind};
use crate::error::{Error, Result};
use crate::source::AssetId;

/// The directories of a package whose files end up in the served site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRoot {
    /// `web/`, served as-is from the site root.
    Web,
    /// `lib/`, served under `packages/<package>/`.
    Lib,
}

impl SourceRoot {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "web" => Some(SourceRoot::Web),
            "lib" => Some(SourceRoot::Lib),
            _ => None,
        }
    }

    /// Rewrites the segments after the root into destination segments.
    fn rewrite<'a>(&self, package: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
        match self {
            SourceRoot::Web => rest.to_vec(),
            SourceRoot::Lib => {
                let mut segments = Vec::with_capacity(rest.len() + 2);
                segments.push(PACKAGES_PREFIX);
                segments.push(package);
                segments.extend_from_slice(rest);
                segments
            }
        }
    }
}

/// Outcome of classifying a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Preload(PreloadEntry),
    Excluded { reason: String },
}

impl Classification {
    fn excluded(reason: impl Into<String>) -> Self {
        Classification::Excluded { reason: reason.into() }
    }
}

/// Classifies a candidate asset.
///
/// Exclusion rules are checked before the root, so a hidden or generated file
/// under an unknown root is still just skipped.
///
/// # Errors
/// Returns [`Error::UnimplementedRoot`] if the first path segment is not a
/// known [`SourceRoot`].
pub fn classify(asset: &AssetId) -> Result<Classification> {
    let path = asset.path.as_str();
    let segments: Vec<&str> = path.split('/').collect();
    let file_name = segments.last().copied().unwrap_or_default();

    if file_name.starts_with('.') {
        return Ok(Classification::excluded("starts with a dot"));
    }
    if let Some(suffix) = EXCLUDED_SUFFIXES.iter().find(|s| path.ends_with(*s)) {
        return Ok(Classification::excluded(format!("ends with `{suffix}`")));
    }
    if let Some(infix) = EXCLUDED_INFIXES.iter().find(|s| path.contains(*s)) {
        return Ok(Classification::excluded(format!("contains `{infix}`")));
    }

    let (first, rest) = match segments.split_first() {
        Some((first, rest)) => (*first, rest),
        None => ("", &[][..]),
    };
    let root = SourceRoot::from_segment(first)
        .ok_or_else(|| Error::UnimplementedRoot { path: path.to_string() })?;

    let rewritten = root.rewrite(&asset.package, rest);
    let kind = rewritten
        .last()
        .map_or(ResourceKind::Fetch, |name| ResourceKind::from_file_name(name));
    let href = rewritten.join("/");
    log::trace!("Classified '{path}' as {kind} at '{href}'");

    Ok(Classification::Preload(PreloadEntry::new(href, kind)))
}
