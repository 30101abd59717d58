//! Constants used throughout preloader

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["preload.json", "preload.yaml", "preload.yml"];

/// Ignore file name, one exclude glob per line
pub const IGNORE_FILE: &str = ".preloadignore";

/// Marker replaced in the template's file name to get the output name
pub const TEMPLATE_MARKER: &str = ".template.";

/// Default template location relative to the package root
pub const DEFAULT_TEMPLATE: &str = "web/index.template.html";

/// Token replaced by the rendered `<link>` lines
pub const PRELOAD_ANCHOR: &str = "<!--PRELOAD-HERE-->";

/// Include globs used when none are configured
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["web/**", "lib/**"];

/// Prefix that `lib/` assets are served under
pub const PACKAGES_PREFIX: &str = "packages";

/// Generated or non-deployable outputs that are never preloaded.
pub const EXCLUDED_SUFFIXES: &[&str] = &[
    ".dart",
    ".dart.js.deps",
    ".dart.js.tar.gz",
    ".js.map",
    ".map",
    ".digests",
    ".module",
    ".module.library",
    ".ddc_merged_metadata",
    ".g.part",
    ".html",
    ".ico",
    "FontManifest.json",
    "AssetManifest.json",
    ".placeholder",
];

/// Infixes inserted by intermediate compiler passes.
pub const EXCLUDED_INFIXES: &[&str] = &[".dart2js.", ".ddc.", ".ddk.", ".sound."];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
