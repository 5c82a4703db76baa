//! Error type shared by the template pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, compiling or rendering note templates.
#[derive(Debug, Error)]
pub enum Error {
    /// The template file does not exist.
    #[error("Template file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The template file exists but could not be opened or read.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error, unchanged.
        #[source]
        source: io::Error,
    },

    /// The template text is not valid template syntax.
    #[error("Template compile error: {0}")]
    Compile(#[source] Box<handlebars::TemplateError>),

    /// The template referenced something that did not resolve, or a helper failed.
    #[error("Template execution error: {0}")]
    Execution(#[source] Box<handlebars::RenderError>),
}

impl Error {
    /// Map an IO error for `path`, keeping absence distinguishable.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path)
        } else {
            Error::Io { path, source }
        }
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Error::Compile(Box::new(err))
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Self {
        Error::Execution(Box::new(err))
    }
}

/// Result alias for the template pipeline.
pub type Result<T> = std::result::Result<T, Error>;
