use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse glob pattern. Original error: {0}")]
    GlobSetParse(#[from] globset::Error),

    #[error("Failed to walk the package directory. Original error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Failed to parse JSON config. Original error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Represents invalid values in the loaded configuration.
    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    /// A candidate lives outside every known source root. This means the include
    /// patterns reach further than the classifier understands, so the whole run aborts.
    #[error("Unimplemented source root for asset '{path}'. Only 'web/' and 'lib/' assets can be preloaded; check the include patterns.")]
    UnimplementedRoot { path: String },

    #[error("Cannot derive an output name for template '{path}': the file name has no '.template.' marker.")]
    TemplateName { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
