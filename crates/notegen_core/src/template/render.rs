//! Compiling and executing a single template.

use handlebars::Handlebars;
use serde::Serialize;

use super::funcs::register_template_funcs;
use crate::error::Result;

const TEMPLATE_NAME: &str = "note";

/// Compile `template` with the helper table bound and render it against `data`.
///
/// Output is not HTML-escaped. With `strict` set, a field that does not
/// resolve is an execution error rather than empty text.
pub fn render<T: Serialize>(template: &str, data: &T, strict: bool) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(strict);
    registry.register_escape_fn(handlebars::no_escape);
    register_template_funcs(&mut registry);

    registry.register_template_string(TEMPLATE_NAME, template)?;
    Ok(registry.render(TEMPLATE_NAME, data)?)
}
