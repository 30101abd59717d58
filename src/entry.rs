//! Resource hint entries and their deterministic ordering

use std::cmp::Ordering;
use std::fmt::Display;

/// The `as` value of a preload hint, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Script,
    Font,
    /// Fallback for everything that is neither a script nor a font.
    Fetch,
}

impl ResourceKind {
    /// Picks the kind for a file name. Only the last extension is inspected.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("js") => ResourceKind::Script,
            Some("ttf") | Some("woff") => ResourceKind::Font,
            _ => ResourceKind::Fetch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Script => "script",
            ResourceKind::Font => "font",
            ResourceKind::Fetch => "fetch",
        }
    }

    /// Scripts come first, all other kinds share a single rank.
    fn rank(&self) -> u8 {
        match self {
            ResourceKind::Script => 0,
            ResourceKind::Font | ResourceKind::Fetch => 1,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `<link rel="preload">` line: where the asset lives relative to the
/// output document and how the browser should fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreloadEntry {
    href: String,
    kind: ResourceKind,
}

impl PreloadEntry {
    pub fn new(href: impl Into<String>, kind: ResourceKind) -> Self {
        Self { href: href.into(), kind }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl Ord for PreloadEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .rank()
            .cmp(&other.kind.rank())
            .then_with(|| self.href.cmp(&other.href))
            // Only reached for equal hrefs of different non-script kinds.
            .then_with(|| self.kind.as_str().cmp(other.kind.as_str()))
    }
}

impl PartialOrd for PreloadEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
