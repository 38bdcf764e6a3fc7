//! Small text formatters shared by the views

use crate::i18n::{Translator, expand_text};

/// Localized "Yes" / "No"
pub fn yes_no(value: bool, i18n: &dyn Translator) -> String {
    i18n.l(if value { "Yes" } else { "No" })
}

/// Join items with localized comma separators only ("a, b, c")
pub fn comma_only_list_text<S: AsRef<str>>(items: &[S], i18n: &dyn Translator) -> String {
    let Some((last, rest)) = items.split_last() else {
        return String::new();
    };
    let template = i18n.l("{commas_only_list_item}, {rest}");
    rest.iter().rev().fold(last.as_ref().to_string(), |acc, item| {
        expand_text(
            &template,
            &[("commas_only_list_item", item.as_ref()), ("rest", acc.as_str())],
        )
    })
}

/// Row parity class for zebra-striped tables; the first row is "odd"
pub fn loop_parity(index: usize) -> &'static str {
    if index % 2 == 0 { "odd" } else { "even" }
}

/// Percent-encode a string for use inside a URL query component
///
/// Keeps the same unreserved set as JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Untranslated;

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true, &Untranslated), "Yes");
        assert_eq!(yes_no(false, &Untranslated), "No");
    }

    #[test]
    fn test_comma_only_list_text() {
        let empty: [&str; 0] = [];
        assert_eq!(comma_only_list_text(&empty, &Untranslated), "");
        assert_eq!(comma_only_list_text(&["1"], &Untranslated), "1");
        assert_eq!(comma_only_list_text(&["1", "2"], &Untranslated), "1, 2");
        assert_eq!(
            comma_only_list_text(&["00000000001", "00000000002", "3"], &Untranslated),
            "00000000001, 00000000002, 3"
        );
    }

    #[test]
    fn test_loop_parity() {
        assert_eq!(loop_parity(0), "odd");
        assert_eq!(loop_parity(1), "even");
        assert_eq!(loop_parity(2), "odd");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Yesterday"), "Yesterday");
        assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_uri_component("it's (live)!"), "it's%20(live)!");
        assert_eq!(encode_uri_component("Björk"), "Bj%C3%B6rk");
        assert_eq!(encode_uri_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }
}
