//! Name and date field extraction helpers.

/// Reorder "given /surname/" notation to "surname given".
///
/// A raw value without the slash pattern is preserved verbatim.
pub(crate) fn display_name(raw: &str) -> String {
    if let Some(open) = raw.find('/') {
        if let Some(close) = raw[open + 1..].find('/') {
            let given = raw[..open].trim();
            let surname = raw[open + 1..open + 1 + close].trim();
            return format!("{surname} {given}").trim().to_string();
        }
    }
    raw.to_string()
}

/// First run of four consecutive ASCII digits in a date value
pub(crate) fn extract_year(text: &str) -> Option<String> {
    text.as_bytes()
        .windows(4)
        .position(|window| window.iter().all(u8::is_ascii_digit))
        .map(|start| text[start..start + 4].to_string())
}

#[cfg(test)]
mod tests {
    use super::{display_name, extract_year};

    #[test]
    fn reorders_slash_notation() {
        assert_eq!(display_name("Jean /Dupont/"), "Dupont Jean");
        assert_eq!(display_name("Marie Louise /Martin/"), "Martin Marie Louise");
    }

    #[test]
    fn keeps_raw_name_without_slashes() {
        assert_eq!(display_name("Jean Dupont"), "Jean Dupont");
    }

    #[test]
    fn surname_only_has_no_trailing_space() {
        assert_eq!(display_name("/Dupont/"), "Dupont");
    }

    #[test]
    fn extracts_first_four_digit_run() {
        assert_eq!(extract_year("12 JAN 1850").as_deref(), Some("1850"));
        assert_eq!(extract_year("ABT 1792").as_deref(), Some("1792"));
        assert_eq!(extract_year("BEF JAN").as_deref(), None);
    }
}
