//! Helper functions callable from template text.
//!
//! | Name         | Usage                           |
//! |--------------|---------------------------------|
//! | `dateFormat` | `{{dateFormat "%Y-%m-%d" Date}}`|
//! | `makeSlug`   | `{{makeSlug Title}}`            |
//!
//! The table is fixed at compile time and copied into each template
//! registry as it is built.

use chrono::DateTime;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};

use crate::date::date_format;
use crate::slug::make_slug;

/// Signature shared by every template helper.
pub type TemplateFn = for<'reg, 'rc> fn(
    &Helper<'rc>,
    &'reg Handlebars<'reg>,
    &'rc Context,
    &mut RenderContext<'reg, 'rc>,
    &mut dyn Output,
) -> HelperResult;

/// Name-to-function table exposed to templates.
pub static TEMPLATE_FUNCS: &[(&str, TemplateFn)] = &[
    ("dateFormat", date_format_helper),
    ("makeSlug", make_slug_helper),
];

/// Bind every entry of [`TEMPLATE_FUNCS`] into `registry`.
pub fn register_template_funcs(registry: &mut Handlebars<'_>) {
    for &(name, func) in TEMPLATE_FUNCS {
        registry.register_helper(name, Box::new(func));
    }
}

fn str_param<'a>(
    h: &'a Helper<'_>,
    name: &'static str,
    idx: usize,
) -> Result<&'a str, RenderErrorReason> {
    let param = h
        .param(idx)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(name, idx))?;
    param
        .value()
        .as_str()
        .ok_or(RenderErrorReason::InvalidParamType("string"))
}

/// `{{dateFormat layout date}}` where `date` is an RFC 3339 string.
fn date_format_helper(
    h: &Helper<'_>,
    _: &Handlebars<'_>,
    _: &Context,
    _: &mut RenderContext<'_, '_>,
    out: &mut dyn Output,
) -> HelperResult {
    let layout = str_param(h, "dateFormat", 0)?;
    let raw = str_param(h, "dateFormat", 1)?;
    let date = DateTime::parse_from_rfc3339(raw).map_err(|e| {
        RenderErrorReason::Other(format!("dateFormat: invalid date {raw:?}: {e}"))
    })?;

    out.write(&date_format(layout, &date))?;
    Ok(())
}

/// `{{makeSlug text}}`
fn make_slug_helper(
    h: &Helper<'_>,
    _: &Handlebars<'_>,
    _: &Context,
    _: &mut RenderContext<'_, '_>,
    out: &mut dyn Output,
) -> HelperResult {
    let text = str_param(h, "makeSlug", 0)?;
    out.write(&make_slug(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        register_template_funcs(&mut hb);
        hb
    }

    #[test]
    fn test_table_names() {
        let names: Vec<&str> = TEMPLATE_FUNCS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["dateFormat", "makeSlug"]);
    }

    #[test]
    fn test_date_format_helper() {
        let out = registry()
            .render_template(
                "{{dateFormat \"%Y/%m\" Date}}",
                &json!({ "Date": "2024-03-09T10:00:00+00:00" }),
            )
            .unwrap();
        assert_eq!(out, "2024/03");
    }

    #[test]
    fn test_date_format_helper_rejects_bad_date() {
        let result = registry().render_template(
            "{{dateFormat \"%Y\" Date}}",
            &json!({ "Date": "yesterday" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_date_format_helper_missing_param() {
        let result = registry().render_template("{{dateFormat \"%Y\"}}", &json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_make_slug_helper() {
        let out = registry()
            .render_template("{{makeSlug Title}}", &json!({ "Title": "Hello World!" }))
            .unwrap();
        assert_eq!(out, "hello-world");
    }

    #[test]
    fn test_make_slug_helper_rejects_non_string() {
        let result = registry().render_template("{{makeSlug 42}}", &json!({}));
        assert!(result.is_err());
    }
}
