use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path to convert file system paths into asset paths
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use preloader::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("web");
    /// assert_eq!(path.to_str_checked().unwrap(), "web");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Joins the normal components of a relative path with `/`, whatever the
    /// platform separator is.
    ///
    /// # Examples
    /// ```
    /// use preloader::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("web").join("js").join("app.js");
    /// assert_eq!(path.to_logical_path().unwrap(), "web/js/app.js");
    /// ```
    fn to_logical_path(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_logical_path(&self) -> Result<String> {
        let mut segments = Vec::new();
        for component in self.components() {
            match component {
                Component::Normal(segment) => {
                    segments.push(Path::new(segment).to_str_checked()?)
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::Other(anyhow::anyhow!(
                        "Path '{}' is not a plain relative path",
                        self.display()
                    )))
                }
            }
        }
        Ok(segments.join("/"))
    }
}
