//! Reading the filename directive from the first line of a template.
//!
//! A directive is whatever follows the last `#` on the first line:
//!
//! ```text
//! +++ # {{TitleSlug}}.md
//!       ^^^^^^^^^^^^^^^^ filename template
//! ```
//!
//! Using the last `#` lets the text before it contain `#` characters of its own.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Outcome of looking for a filename template on a directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameDirective {
    /// The trimmed text after the last `#`. May be empty.
    Template(String),
    /// The line has no `#`; the default filename template applies.
    NoOverride,
}

impl FilenameDirective {
    /// The extracted template, or `default` when there is no usable override.
    ///
    /// An empty directive (`"heading #"`) also falls back to `default`.
    pub fn or_default<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            FilenameDirective::Template(template) if !template.is_empty() => template,
            _ => default,
        }
    }
}

/// Open `path` and return its first line, trimmed.
///
/// The first line must end with a newline. An empty file, or one whose only
/// line is unterminated, is an [`Error::Io`] with kind `UnexpectedEof`.
pub fn get_first_line(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| Error::from_io(path, e))?;

    if !line.ends_with('\n') {
        return Err(missing_first_line(path));
    }

    Ok(line.trim().to_string())
}

/// Error for a file without a newline-terminated first line.
pub(crate) fn missing_first_line(path: &Path) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source: io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no newline-terminated first line",
        ),
    }
}

/// Pull the filename template out of a directive line.
pub fn extract_template(line: &str) -> FilenameDirective {
    match line.rsplit_once('#') {
        Some((_, template)) => FilenameDirective::Template(template.trim().to_string()),
        None => FilenameDirective::NoOverride,
    }
}

/// The directive line with its filename template removed.
///
/// `"+++ # {{TitleSlug}}.md"` becomes `"+++"`. Lines without `#` are
/// returned unchanged.
pub fn strip_directive(line: &str) -> &str {
    match line.rsplit_once('#') {
        Some((head, _)) => head.trim_end(),
        None => line,
    }
}
