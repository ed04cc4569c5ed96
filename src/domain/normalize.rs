//! Input normalization shared by the value objects.
//!
//! Every function here is total: any string goes in, a canonical string comes
//! out. Rejection is left to the validators that consume the result.

/// Keep only ASCII digits, dropping masks such as `.`, `-`, `/`, `(`, `)` and spaces.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trim surrounding whitespace and lower-case the rest.
pub fn trim_lowercase(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trim surrounding whitespace.
pub fn trim_text(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_masks() {
        assert_eq!(digits_only("123.456.789-09"), "12345678909");
        assert_eq!(digits_only("11.222.333/0001-81"), "11222333000181");
        assert_eq!(digits_only(" (11) 99999-9999 "), "11999999999");
    }

    #[test]
    fn test_digits_only_without_digits() {
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_trim_lowercase() {
        assert_eq!(trim_lowercase("  User@Example.COM "), "user@example.com");
        assert_eq!(trim_lowercase("   "), "");
    }

    #[test]
    fn test_trim_text_keeps_case() {
        assert_eq!(trim_text("  Maria Silva "), "Maria Silva");
    }
}
