//! Configuration loading and management

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_INCLUDE_PATTERNS, DEFAULT_TEMPLATE, TEMPLATE_MARKER,
};
use crate::error::{Error, Result};
use crate::selection::SelectionConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one package, as written in `preload.yaml` / `preload.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigV1 {
    /// Name used in `packages/<package>/` hrefs; defaults to the directory name.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default = "get_default_template")]
    pub template: PathBuf,
    #[serde(default = "get_default_include")]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub diagnostics: bool,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            package: None,
            template: get_default_template(),
            include: get_default_include(),
            exclude: Vec::new(),
            diagnostics: false,
        }
    }
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        if self.include.is_empty() {
            return Err(Error::ConfigValidation("include must list at least one pattern".into()));
        }
        if self.package.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(Error::ConfigValidation("package must not be empty".into()));
        }
        let has_marker = self
            .template
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(TEMPLATE_MARKER));
        if !has_marker {
            return Err(Error::ConfigValidation(format!(
                "template '{}' must contain '{TEMPLATE_MARKER}' in its file name",
                self.template.display()
            )));
        }
        Ok(())
    }

    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            diagnostics: self.diagnostics,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Loads the first config file found in `package_root`, falling back to
    /// defaults when there is none.
    pub fn load_config<P: AsRef<Path>>(package_root: P) -> Result<Self> {
        let package_root = package_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = package_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading config from {}", config_file_path.display());
                let content = std::fs::read_to_string(config_file_path)?;
                let config: Config = match config_file_name.rsplit_once('.') {
                    Some((_, "json")) => serde_json::from_str(&content)?,
                    _ => serde_yaml::from_str(&content)?,
                };

                return Ok(config);
            }
        }

        log::debug!(
            "No config file in '{}' (tried {}), using defaults",
            package_root.display(),
            CONFIG_FILENAMES.join(", ")
        );
        Ok(Config::V1(ConfigV1::default()))
    }
}

fn get_default_template() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE)
}

fn get_default_include() -> Vec<String> {
    DEFAULT_INCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect()
}
