//! Field validation rules
//!
//! Each [`FieldKind`] maps to a pure predicate over the field's text. The
//! rules never fail: anything that does not match is simply invalid.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Blank characters for every rule: ASCII whitespace, the Unicode space
/// separators, line and paragraph separators, and the byte order mark.
/// Unlike Unicode `White_Space` this includes U+FEFF and excludes U+0085.
const BLANK_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`, no blanks or extra `@` in any part
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BLANK_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("Invalid email regex")
});

/// Optional leading `+` followed by 7 to 15 digits
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("Invalid phone regex"));

fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Kind of a form field, selects the validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    ShortText,
    Email,
    Phone,
}

impl FieldKind {
    /// Parse a kind tag. Unrecognized tags fall back to short text.
    #[allow(dead_code)]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "phone" | "tel" => Self::Phone,
            _ => Self::ShortText,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortText => "text",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Decide whether `value` is acceptable for a field of `kind`
pub fn validate(kind: FieldKind, value: &str) -> bool {
    match kind {
        FieldKind::ShortText => is_short_text(value),
        FieldKind::Email => is_email(value),
        FieldKind::Phone => is_phone(value),
    }
}

fn is_short_text(value: &str) -> bool {
    value.chars().any(|c| !is_blank(c))
}

fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn is_phone(value: &str) -> bool {
    // Spaces and hyphens are separators only
    let compact: String = value
        .chars()
        .filter(|c| !is_blank(*c) && *c != '-')
        .collect();
    PHONE_REGEX.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod short_text {
        use super::*;

        #[test]
        fn test_single_char_is_valid() {
            assert!(validate(FieldKind::ShortText, "x"));
        }

        #[test]
        fn test_whitespace_only_is_invalid() {
            assert!(!validate(FieldKind::ShortText, "   "));
            assert!(!validate(FieldKind::ShortText, "\t\n"));
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate(FieldKind::ShortText, ""));
        }

        #[test]
        fn test_padded_name_is_valid() {
            assert!(validate(FieldKind::ShortText, "  Jane Doe  "));
        }

        #[test]
        fn test_unicode_blanks_are_invalid() {
            assert!(!validate(FieldKind::ShortText, "\u{feff}"));
            assert!(!validate(FieldKind::ShortText, "\u{a0}\u{3000}\u{2028}"));
        }

        #[test]
        fn test_next_line_is_not_blank() {
            assert!(validate(FieldKind::ShortText, "\u{85}"));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_simple_address_is_valid() {
            assert!(validate(FieldKind::Email, "a@b.com"));
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            assert!(!validate(FieldKind::Email, "a@b"));
        }

        #[test]
        fn test_uppercase_is_valid() {
            assert!(validate(FieldKind::Email, "Jane.Doe@Example.COM"));
        }

        #[test]
        fn test_whitespace_is_invalid() {
            assert!(!validate(FieldKind::Email, "jane doe@example.com"));
            assert!(!validate(FieldKind::Email, " a@b.com"));
        }

        #[test]
        fn test_byte_order_mark_is_invalid() {
            assert!(!validate(FieldKind::Email, "a\u{feff}@b.com"));
            assert!(!validate(FieldKind::Email, "a@b.c\u{feff}om"));
            assert!(!validate(FieldKind::Email, "a@b\u{a0}c.com"));
        }

        #[test]
        fn test_next_line_is_allowed() {
            assert!(validate(FieldKind::Email, "a\u{85}@b.com"));
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert!(!validate(FieldKind::Email, "a@@b.com"));
            assert!(!validate(FieldKind::Email, "a@b@c.com"));
        }

        #[test]
        fn test_empty_parts_are_invalid() {
            assert!(!validate(FieldKind::Email, "@b.com"));
            assert!(!validate(FieldKind::Email, "a@.com"));
            assert!(!validate(FieldKind::Email, "a@b."));
            assert!(!validate(FieldKind::Email, ""));
        }

        #[test]
        fn test_subdomains_are_valid() {
            assert!(validate(FieldKind::Email, "user@mail.example.co.uk"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_international_number_is_valid() {
            assert!(validate(FieldKind::Phone, "+1234567890"));
            assert!(validate(FieldKind::Phone, "+14155552671"));
        }

        #[test]
        fn test_too_short_is_invalid() {
            assert!(!validate(FieldKind::Phone, "123"));
            assert!(!validate(FieldKind::Phone, "123456"));
        }

        #[test]
        fn test_length_bounds() {
            assert!(validate(FieldKind::Phone, "1234567"));
            assert!(validate(FieldKind::Phone, "123456789012345"));
            assert!(!validate(FieldKind::Phone, "1234567890123456"));
        }

        #[test]
        fn test_separators_are_ignored() {
            assert!(validate(FieldKind::Phone, "+1 415-555-2671"));
            assert!(validate(FieldKind::Phone, "415 555 2671"));
        }

        #[test]
        fn test_unicode_blanks_are_ignored() {
            assert!(validate(FieldKind::Phone, "+1234567\u{feff}890"));
            assert!(validate(FieldKind::Phone, "415\u{a0}555\u{2009}2671"));
        }

        #[test]
        fn test_next_line_is_invalid() {
            assert!(!validate(FieldKind::Phone, "415\u{85}5552671"));
        }

        #[test]
        fn test_letters_are_invalid() {
            assert!(!validate(FieldKind::Phone, "notaphone"));
            assert!(!validate(FieldKind::Phone, "555-CALL-NOW"));
        }

        #[test]
        fn test_plus_only_at_start() {
            assert!(!validate(FieldKind::Phone, "1234+567890"));
            assert!(!validate(FieldKind::Phone, "++1234567890"));
        }

        #[test]
        fn test_parentheses_are_invalid() {
            assert!(!validate(FieldKind::Phone, "(415) 555-2671"));
        }

        #[test]
        fn test_non_ascii_digits_are_invalid() {
            assert!(!validate(FieldKind::Phone, "١٢٣٤٥٦٧٨"));
        }
    }

    mod field_kind {
        use super::*;

        #[test]
        fn test_from_tag_known_kinds() {
            assert_eq!(FieldKind::from_tag("email"), FieldKind::Email);
            assert_eq!(FieldKind::from_tag("tel"), FieldKind::Phone);
            assert_eq!(FieldKind::from_tag("phone"), FieldKind::Phone);
            assert_eq!(FieldKind::from_tag("text"), FieldKind::ShortText);
        }

        #[test]
        fn test_unknown_tag_falls_back_to_short_text() {
            let kind = FieldKind::from_tag("postcode");
            assert_eq!(kind, FieldKind::ShortText);
            assert!(validate(kind, "anything"));
            assert!(!validate(kind, "  "));
        }

        #[test]
        fn test_default_is_short_text() {
            assert_eq!(FieldKind::default(), FieldKind::ShortText);
        }

        #[test]
        fn test_validation_is_repeatable() {
            for value in ["a@b.com", "a@b", "", "x y@z.io"] {
                assert_eq!(
                    validate(FieldKind::Email, value),
                    validate(FieldKind::Email, value)
                );
            }
        }

        #[test]
        fn test_serde_uses_kebab_case() {
            let json = serde_json::to_string(&FieldKind::ShortText).unwrap();
            assert_eq!(json, "\"short-text\"");
        }
    }
}
