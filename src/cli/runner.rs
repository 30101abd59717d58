use crate::{
    builder::{FileSystemHost, PreloadBuilder},
    cli::Args,
    config::{Config, ConfigV1},
    error::{Error, Result},
    ext::PathExt,
    ignore::read_preloadignore_file,
    selection::SelectionEngine,
    source::FileSystemSource,
};
use std::path::{Path, PathBuf};

/// Main CLI runner that renders the preload hints of one package
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow and returns the path of the written document
    pub fn run(self) -> Result<PathBuf> {
        let package_root = self.args.package_root.clone();
        let config = self.load_and_validate_config(&package_root)?;
        let package = self.resolve_package_name(&package_root, &config)?;
        log::debug!("Using package name '{package}'");

        let mut selection = config.selection_config();
        selection.exclude.extend(read_preloadignore_file(&package_root));
        let engine = SelectionEngine::new(&selection)?;

        let source = FileSystemSource::new(&package_root, package);
        let host = FileSystemHost::new(&package_root);
        let builder = PreloadBuilder::new(&engine, &source, &host, self.args.dry_run);

        let output = builder.build(&config.template)?;
        Ok(package_root.join(output))
    }

    /// Loads the package config and applies command line overrides on top
    fn load_and_validate_config(&self, package_root: &Path) -> Result<ConfigV1> {
        let Config::V1(mut config) = Config::load_config(package_root)?;

        if let Some(template) = &self.args.template {
            config.template = template.clone();
        }
        if let Some(package) = &self.args.package {
            config.package = Some(package.clone());
        }
        if !self.args.include.is_empty() {
            config.include = self.args.include.clone();
        }
        config.exclude.extend(self.args.exclude.iter().cloned());
        config.diagnostics |= self.args.diagnostics;

        config.validate()?;
        Ok(config)
    }

    /// Uses the configured package name, or the name of the package directory
    fn resolve_package_name(&self, package_root: &Path, config: &ConfigV1) -> Result<String> {
        if let Some(package) = &config.package {
            return Ok(package.clone());
        }
        let canonical = std::fs::canonicalize(package_root)?;
        let name = canonical.file_name().ok_or_else(|| {
            Error::ConfigValidation(format!(
                "cannot infer a package name from '{}'; pass --package",
                canonical.display()
            ))
        })?;
        Ok(Path::new(name).to_str_checked()?.to_string())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<PathBuf> {
    let runner = Runner::new(args);
    runner.run()
}
