use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::adapters::AdapterError;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no .svg files found in '{source_dir}'")]
    #[diagnostic(
        code(glyphforge::no_input_files),
        help("check that the source directory exists and contains .svg files")
    )]
    NoInputFiles { source_dir: PathBuf },

    #[error("invalid generation options: {message}")]
    #[diagnostic(code(glyphforge::invalid_options))]
    InvalidOptions { message: String },

    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(glyphforge::io_error))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("optimizer failed on '{path}'")]
    #[diagnostic(code(glyphforge::optimize_error))]
    Optimize {
        path: String,
        #[source]
        source: AdapterError,
    },

    #[error("transformer failed on '{path}'")]
    #[diagnostic(code(glyphforge::transform_error))]
    Transform {
        path: String,
        #[source]
        source: AdapterError,
    },

    #[error("formatter failed on '{path}'")]
    #[diagnostic(code(glyphforge::format_error))]
    Format {
        path: String,
        #[source]
        source: AdapterError,
    },

    #[error("no <svg> root pair found in transformed output for '{path}'")]
    #[diagnostic(
        code(glyphforge::extract_error),
        help("the transformer must emit exactly one top-level <svg> element")
    )]
    Extract { path: String },
}

impl Error {
    pub(crate) fn no_input_files(source_dir: &Path) -> Box<Self> {
        Box::new(Error::NoInputFiles {
            source_dir: source_dir.to_path_buf(),
        })
    }

    pub(crate) fn invalid_options(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidOptions {
            message: message.into(),
        })
    }

    pub(crate) fn io(action: &'static str, path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn optimize(path: &str, source: AdapterError) -> Box<Self> {
        Box::new(Error::Optimize {
            path: path.to_string(),
            source,
        })
    }

    pub(crate) fn transform(path: &str, source: AdapterError) -> Box<Self> {
        Box::new(Error::Transform {
            path: path.to_string(),
            source,
        })
    }

    pub(crate) fn format(path: &str, source: AdapterError) -> Box<Self> {
        Box::new(Error::Format {
            path: path.to_string(),
            source,
        })
    }

    pub(crate) fn extract(path: &str) -> Box<Self> {
        Box::new(Error::Extract {
            path: path.to_string(),
        })
    }
}
