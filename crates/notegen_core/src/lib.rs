//! # `notegen_core`
//!
//! Filename and body generation for markdown notes.
//!
//! A note template is plain text rendered with Handlebars. Its first line may
//! carry a filename directive after a `#`, for example
//! `+++ # {{TitleSlug}}-{{dateFormat "%Y" Date}}.md`. The directive decides
//! the name the rendered note is saved under; the rest of the template
//! becomes the note body.
//!
//! Two helpers are available inside every template: `dateFormat` (chrono
//! strftime layouts) and `makeSlug`.

#![warn(missing_docs)]

/// Renderer configuration
pub mod config;

/// Date formatting
pub mod date;

/// Error types
pub mod error;

/// Note data passed to templates
pub mod note;

/// Slug generation
pub mod slug;

pub mod template;

pub use config::{ConfigError, TemplateConfig};
pub use date::date_format;
pub use error::{Error, Result};
pub use note::NoteData;
pub use crate::slug::make_slug;
pub use template::{
    DEFAULT_BODY_TEMPLATE, DEFAULT_FILENAME_TEMPLATE, FilenameDirective, NoteRenderer,
    RenderedNote, extract_template, filename_from_file, filename_from_template_str,
    get_first_line,
};
