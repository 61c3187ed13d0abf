use std::path::PathBuf;

use crate::error::{Error, Result};

/// Immutable configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Directory containing the .svg source files.
    pub source_dir: PathBuf,
    /// Directory the generated files are written to (created if absent).
    pub output_dir: PathBuf,
    /// Optional prefix merged into every component identifier.
    pub prefix: Option<String>,
    /// Default rendered size, bound to the component's `size` prop.
    pub size: f64,
    /// Default stroke width, bound to the `strokeWidth` prop in outline mode.
    pub stroke_width: f64,
    /// Filled mode: fill="currentColor", stroke="none", no strokeWidth.
    pub filled: bool,
}

impl GenerationOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(Error::invalid_options(format!(
                "default size must be a finite positive number, got {}",
                self.size
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(Error::invalid_options(format!(
                "default stroke width must be a finite positive number, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}
