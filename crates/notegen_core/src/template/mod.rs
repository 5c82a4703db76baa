//! Template extraction and rendering.
//!
//! The pipeline for a filename is: read the first line of a template file,
//! pull the filename template out of it, render that against [`NoteData`].
//! [`NoteRenderer::render_note`] additionally renders the note body from the
//! same template.

pub mod directive;
pub mod funcs;
pub mod render;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use directive::{FilenameDirective, extract_template, get_first_line, strip_directive};
pub use funcs::{TEMPLATE_FUNCS, TemplateFn};

use crate::config::TemplateConfig;
use crate::error::{Error, Result};
use crate::note::NoteData;

/// Body template for a brand-new note with no template of its own.
pub const DEFAULT_BODY_TEMPLATE: &str = r#"+++ # {{TitleSlug}}.md
title = "{{Title}}"
created_at = "{{dateFormat "%Y-%m-%dT%H:%M:%S%:z" Date}}"
modified_at = "{{dateFormat "%Y-%m-%dT%H:%M:%S%:z" Date}}"
+++

{{Content}}
"#;

/// Filename template used when a template carries no directive.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "{{TitleSlug}}.md";

/// A note ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedNote {
    /// File name derived from the template's directive.
    pub filename: String,
    /// Rendered body, directive removed.
    pub content: String,
}

/// Renders filenames and note bodies with a fixed [`TemplateConfig`].
#[derive(Debug, Clone, Default)]
pub struct NoteRenderer {
    config: TemplateConfig,
}

impl NoteRenderer {
    /// Create a renderer with the given defaults.
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// The config this renderer was built with.
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Render arbitrary template text against `data`.
    pub fn render(&self, template: &str, data: &NoteData) -> Result<String> {
        render::render(template, data, self.config.strict)
    }

    /// Render a filename template. An empty template means the default one.
    pub fn filename_from_template_str(&self, template: &str, data: &NoteData) -> Result<String> {
        let template = if template.is_empty() {
            log::debug!(
                "No filename template given, using default {:?}",
                self.config.filename_template
            );
            self.config.filename_template.as_str()
        } else {
            template
        };

        self.render(template, data)
    }

    /// Read the directive on the first line of `path` and render the filename.
    ///
    /// A first line without `#` falls back to the default filename template.
    /// IO errors, including a missing file, are returned unchanged.
    pub fn filename_from_file(&self, path: impl AsRef<Path>, data: &NoteData) -> Result<String> {
        let path = path.as_ref();
        let first_line = get_first_line(path)?;
        let directive = extract_template(&first_line);
        log::trace!("Filename directive in {}: {:?}", path.display(), directive);

        self.filename_from_template_str(directive.or_default(""), data)
            .inspect_err(|e| {
                log::debug!("Rendering filename from {} failed: {}", path.display(), e);
            })
    }

    /// Render a whole note from a body template.
    ///
    /// The template's first line carries the filename directive; the directive
    /// is stripped from the rendered content. An empty template means the
    /// configured default body template.
    pub fn render_note(&self, body_template: &str, data: &NoteData) -> Result<RenderedNote> {
        let body_template = if body_template.is_empty() {
            log::debug!("No body template given, using default");
            self.config.body_template.as_str()
        } else {
            body_template
        };

        let (first_line, rest) = match body_template.split_once('\n') {
            Some((first, rest)) => (first, Some(rest)),
            None => (body_template, None),
        };

        let directive = extract_template(first_line);
        let filename = self.filename_from_template_str(directive.or_default(""), data)?;

        let content = match (&directive, rest) {
            (FilenameDirective::NoOverride, _) => self.render(body_template, data)?,
            (FilenameDirective::Template(_), Some(rest)) => {
                let stripped = format!("{}\n{}", strip_directive(first_line), rest);
                self.render(&stripped, data)?
            }
            (FilenameDirective::Template(_), None) => {
                self.render(strip_directive(first_line), data)?
            }
        };

        Ok(RenderedNote { filename, content })
    }

    /// Read a template file and render a whole note from it.
    ///
    /// Like [`get_first_line`], the file must start with a newline-terminated
    /// line; an empty or unterminated file is an [`Error::Io`] with kind
    /// `UnexpectedEof` rather than a request for the default body template.
    pub fn note_from_file(&self, path: impl AsRef<Path>, data: &NoteData) -> Result<RenderedNote> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        if !template.contains('\n') {
            return Err(directive::missing_first_line(path));
        }

        self.render_note(&template, data).inspect_err(|e| {
            log::debug!("Rendering note from {} failed: {}", path.display(), e);
        })
    }
}

/// Render a filename template with the default config.
pub fn filename_from_template_str(template: &str, data: &NoteData) -> Result<String> {
    NoteRenderer::default().filename_from_template_str(template, data)
}

/// Render the filename directive found in `path` with the default config.
pub fn filename_from_file(path: impl AsRef<Path>, data: &NoteData) -> Result<String> {
    NoteRenderer::default().filename_from_file(path, data)
}
