/// Handles argument parsing and the command line workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Preload entries and their ordering.
pub mod entry;

/// Classifies build outputs into preload entries.
pub mod classifier;

/// Candidate asset sources.
pub mod source;

/// Include and exclude glob handling, including `.preloadignore` files.
pub mod ignore;

/// Selects, deduplicates and orders preload entries.
pub mod selection;

/// Renders entries as `<link>` markup into a template.
pub mod renderer;

/// Reads the template and writes the derived document.
pub mod builder;

/// Configuration handling for packages.
pub mod config;
