use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::slug::make_slug;

/// The data a note template is rendered against.
///
/// Fields are exposed to templates in PascalCase: `{{Title}}`,
/// `{{TitleSlug}}`, `{{Date}}` and `{{Content}}`. `Date` serializes as an
/// RFC 3339 string, which is what `dateFormat` expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoteData {
    /// Note title as typed by the user.
    pub title: String,
    /// Slug of `title`. The renderer never derives it; populate it before rendering.
    pub title_slug: String,
    /// Creation timestamp.
    pub date: DateTime<FixedOffset>,
    /// Note body.
    pub content: String,
}

impl NoteData {
    /// Build note data, deriving `title_slug` from `title`.
    pub fn new(
        title: impl Into<String>,
        date: DateTime<FixedOffset>,
        content: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            title_slug: make_slug(&title),
            title,
            date,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_derives_slug() {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        let data = NoteData::new("My Cool Entry", date, "body");
        assert_eq!(data.title_slug, "my-cool-entry");
        assert_eq!(data.title, "My Cool Entry");
    }

    #[test]
    fn test_serializes_pascal_case() {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        let value = serde_json::to_value(NoteData::new("A", date, "c")).unwrap();
        for key in ["Title", "TitleSlug", "Date", "Content"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        let raw = value["Date"].as_str().unwrap();
        assert_eq!(DateTime::parse_from_rfc3339(raw).unwrap(), date);
    }
}
