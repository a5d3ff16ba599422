//! Text cleaning helpers for URL-embedded product names.

/// Drop every non-ASCII character from the input
pub fn strip_non_ascii(input: &str) -> String {
    input.chars().filter(char::is_ascii).collect()
}

/// Clean a product name for embedding in a URL template.
///
/// Strips non-ASCII characters, collapses runs of whitespace to single
/// spaces, trims, percent-encodes, and rewrites encoded spaces as `+`.
pub fn clean_text(text: &str) -> String {
    let stripped = strip_non_ascii(text);
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    urlencoding::encode(&collapsed).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_ascii() {
        assert_eq!(strip_non_ascii("Fahrvergnügen"), "Fahrvergngen");
        assert_eq!(strip_non_ascii("plain"), "plain");
    }

    #[test]
    fn test_clean_text_collapses_whitespace_and_encodes_spaces() {
        assert_eq!(clean_text("  Blue   Suede  Shoes "), "Blue+Suede+Shoes");
    }

    #[test]
    fn test_clean_text_percent_encodes_reserved_characters() {
        assert_eq!(clean_text("A&B / C"), "A%26B+%2F+C");
    }

    #[test]
    fn test_clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
    }
}
