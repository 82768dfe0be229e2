/// Placeholder memegen renders as "no text"
pub const EMPTY_CAPTION: &str = "_";

/// Encode a caption as a single memegen URL path segment.
///
/// | input   | output |
/// |---------|--------|
/// | space   | `_`    |
/// | `_`     | `__`   |
/// | `-`     | `--`   |
/// | `?`     | `~q`   |
/// | `%`     | `~p`   |
/// | `#`     | `~h`   |
/// | `/`     | `~s`   |
/// | `"`     | `''`   |
///
/// Every other character is copied unchanged. The empty string becomes `_`.
pub fn escape_caption(caption: &str) -> String {
    if caption.is_empty() {
        return EMPTY_CAPTION.to_string();
    }

    let mut escaped = String::with_capacity(caption.len() + caption.len() / 4);
    for ch in caption.chars() {
        match ch {
            ' ' => escaped.push('_'),
            '_' => escaped.push_str("__"),
            '-' => escaped.push_str("--"),
            '?' => escaped.push_str("~q"),
            '%' => escaped.push_str("~p"),
            '#' => escaped.push_str("~h"),
            '/' => escaped.push_str("~s"),
            '"' => escaped.push_str("''"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_caption_is_placeholder() {
        assert_eq!(escape_caption(""), "_");
    }

    #[test]
    fn test_each_mapped_character() {
        let table = [
            (" ", "_"),
            ("_", "__"),
            ("-", "--"),
            ("?", "~q"),
            ("%", "~p"),
            ("#", "~h"),
            ("/", "~s"),
            ("\"", "''"),
        ];
        for (input, expected) in table {
            assert_eq!(escape_caption(input), expected, "escaping {input:?}");
        }
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(
            escape_caption("what if \"we\" 100% re-try_it?"),
            "what_if_''we''_100~p_re--try__it~q"
        );
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(escape_caption("Ünïcode~ok!"), "Ünïcode~ok!");
    }
}
