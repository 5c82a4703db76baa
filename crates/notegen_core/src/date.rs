use std::borrow::Cow;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};

/// Layout used by the default body template for `created_at`/`modified_at`.
/// Renders as e.g. `2024-01-15T09:30:00+02:00`.
pub const ISO_8601_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format a timestamp with a strftime layout (`%Y-%m-%d`, `%H:%M`, ...).
///
/// Never fails. Unrecognized specifiers are echoed literally, so
/// `"%Q %Y"` renders as `"%Q 2024"`.
pub fn date_format(layout: &str, date: &DateTime<FixedOffset>) -> String {
    let layout = escape_unknown_specifiers(layout);

    let mut out = String::with_capacity(layout.len() + 16);
    if write!(out, "{}", date.format(&layout)).is_err() {
        log::debug!("date_format: layout {:?} could not be applied", layout);
        return layout.into_owned();
    }
    out
}

fn has_error(layout: &str) -> bool {
    StrftimeItems::new(layout).any(|item| item == Item::Error)
}

/// Escape every `%` that does not start a valid specifier as `%%`.
///
/// Specifiers are at most five characters long (`%:::z`), so each
/// candidate is checked at two to five characters.
fn escape_unknown_specifiers(layout: &str) -> Cow<'_, str> {
    if !has_error(layout) {
        return Cow::Borrowed(layout);
    }

    let mut escaped = String::with_capacity(layout.len() + 4);
    let mut rest = layout;
    while let Some(idx) = rest.find('%') {
        escaped.push_str(&rest[..idx]);
        rest = &rest[idx..];

        let spec_end = rest
            .char_indices()
            .skip(2)
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()))
            .take(4)
            .find(|&end| !has_error(&rest[..end]));

        match spec_end {
            Some(end) => {
                escaped.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            None => {
                escaped.push_str("%%");
                rest = &rest[1..];
            }
        }
    }
    escaped.push_str(rest);

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 9, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_date_format() {
        assert_eq!(date_format("%Y", &sample()), "2024");
        assert_eq!(date_format("%Y-%m-%d", &sample()), "2024-01-15");
        assert_eq!(date_format("%B %d, %Y", &sample()), "January 15, 2024");
    }

    #[test]
    fn test_iso_layout() {
        assert_eq!(
            date_format(ISO_8601_LAYOUT, &sample()),
            "2024-01-15T09:30:05+02:00"
        );
    }

    #[test]
    fn test_round_trip() {
        let date = sample();
        for layout in [ISO_8601_LAYOUT, "%Y%m%d %H%M%S %z", "%d/%m/%Y %H:%M:%S %:z"] {
            let text = date_format(layout, &date);
            let parsed = DateTime::parse_from_str(&text, layout).unwrap();
            assert_eq!(parsed, date, "layout {layout}");
        }
    }

    #[test]
    fn test_unknown_specifier_is_echoed() {
        assert_eq!(date_format("%Q %Y", &sample()), "%Q 2024");
        assert_eq!(date_format("100%", &sample()), "100%");
    }

    #[test]
    fn test_plain_text_layout() {
        assert_eq!(date_format("no specifiers", &sample()), "no specifiers");
        assert_eq!(date_format("", &sample()), "");
    }

    #[test]
    fn test_escape_leaves_valid_layouts_alone() {
        assert!(matches!(
            escape_unknown_specifiers("%Y-%m-%d"),
            Cow::Borrowed("%Y-%m-%d")
        ));
        assert_eq!(escape_unknown_specifiers("%-d %Q"), "%-d %%Q");
        assert_eq!(escape_unknown_specifiers("%:::z %Q"), "%:::z %%Q");
    }

    #[test]
    fn test_long_specifier_next_to_unknown() {
        let date = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 9, 30, 5)
            .unwrap();
        assert_eq!(date_format("%:::z %Q", &date), "+01 %Q");
    }
}
