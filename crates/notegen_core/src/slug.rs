/// Turn arbitrary text into a lowercase, dash-separated token safe for
/// filenames and URLs.
///
/// Unicode is transliterated to ASCII first, so `"Café Notes"` becomes
/// `"cafe-notes"`. Empty or all-punctuation input yields an empty string.
pub fn make_slug(text: &str) -> String {
    ::slug::slugify(text)
}
