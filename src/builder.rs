use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_MARKER;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::render;
use crate::selection::SelectionEngine;
use crate::source::CandidateSource;

/// Text I/O provided by whoever hosts the build.
pub trait AssetHost {
    fn read_text(&self, id: &Path) -> Result<String>;
    fn write_text(&self, id: &Path, contents: &str) -> Result<()>;
}

/// Reads and writes documents relative to a package root on disk.
#[derive(Debug, Clone)]
pub struct FileSystemHost {
    root: PathBuf,
}

impl FileSystemHost {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl AssetHost for FileSystemHost {
    fn read_text(&self, id: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(self.root.join(id))?)
    }

    fn write_text(&self, id: &Path, contents: &str) -> Result<()> {
        let dest_path = self.root.join(id);

        // Ensure parent directory exists
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(dest_path, contents).map_err(Error::from)
    }
}

/// Maps `web/index.template.html` to `web/index.html`.
///
/// Only the first marker in the file name is replaced; the directory is kept.
pub fn derive_output_path(template: &Path) -> Result<PathBuf> {
    let file_name = template
        .file_name()
        .map(|name| Path::new(name).to_str_checked())
        .transpose()?
        .filter(|name| name.contains(TEMPLATE_MARKER))
        .ok_or_else(|| Error::TemplateName { path: template.display().to_string() })?;

    Ok(template.with_file_name(file_name.replacen(TEMPLATE_MARKER, ".", 1)))
}

/// Produces the output document for one template.
pub struct PreloadBuilder<'a> {
    engine: &'a SelectionEngine,
    source: &'a dyn CandidateSource,
    host: &'a dyn AssetHost,
    dry_run: bool,
}

impl<'a> PreloadBuilder<'a> {
    pub fn new(
        engine: &'a SelectionEngine,
        source: &'a dyn CandidateSource,
        host: &'a dyn AssetHost,
        dry_run: bool,
    ) -> Self {
        Self { engine, source, host, dry_run }
    }

    /// Reads `template`, renders the selected assets into it and writes the
    /// derived document. Returns the output id.
    ///
    /// Nothing is written when any step fails.
    pub fn build(&self, template: &Path) -> Result<PathBuf> {
        let output = derive_output_path(template)?;
        let template_text = self.host.read_text(template)?;
        let selection = self.engine.select_with_report(self.source)?;
        let document = render(&template_text, &selection.entries);

        if self.dry_run {
            log::info!(
                "[DRY RUN] Would write {} preload hint(s) to '{}'",
                selection.entries.len(),
                output.display()
            );
            println!("{document}");
            return Ok(output);
        }

        self.host.write_text(&output, &document)?;
        log::info!(
            "Wrote {} preload hint(s) to '{}'",
            selection.entries.len(),
            output.display()
        );
        Ok(output)
    }
}
