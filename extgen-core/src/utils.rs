//! Shared utility functions for code generation.

use std::mem;

/// Letter case of a character; `None` for caseless characters such as digits.
fn case_of(c: char) -> Option<bool> {
    if c.is_uppercase() {
        Some(true)
    } else if c.is_lowercase() {
        Some(false)
    } else {
        None
    }
}

/// Split an identifier into words.
///
/// Any non-alphanumeric character (`-`, `_`, `/`, `.`, whitespace, ...) ends a
/// word. Inside a run of alphanumerics a new word starts at a lower-to-upper
/// transition (`showOutput` -> `show`, `Output`) and before the last letter of
/// an upper-case run followed by a lower-case letter (`XMLHttp` -> `XML`,
/// `Http`). Digits are caseless: they never split a word themselves, but an
/// upper-case letter after a digit still starts a new word when a lower-case
/// letter follows it (`v2Beta` -> `v2`, `Beta`).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut buf = String::new();
    let mut prev_upper = None;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !buf.is_empty() {
                words.push(mem::take(&mut buf));
            }
            prev_upper = None;
            continue;
        }

        let upper = case_of(c);
        if !buf.is_empty() {
            if prev_upper == Some(false) && upper == Some(true) {
                words.push(mem::take(&mut buf));
            } else if prev_upper == Some(true) && upper == Some(false) && buf.chars().count() > 1 {
                if let Some(last) = buf.pop() {
                    words.push(mem::take(&mut buf));
                    buf.push(last);
                }
            }
        }

        buf.push(c);
        prev_upper = upper;
    }

    if !buf.is_empty() {
        words.push(buf);
    }
    words
}

/// Convert a string to PascalCase (e.g., "show-output" -> "ShowOutput").
///
/// Only the first character of each word is upper-cased; the remainder keeps
/// its original casing (`enableXYZ` -> `EnableXYZ`).
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_separators() {
        assert_eq!(
            split_words("foo-bar_baz/qux.quux"),
            ["foo", "bar", "baz", "qux", "quux"]
        );
        assert_eq!(split_words("open in editor"), ["open", "in", "editor"]);
        assert_eq!(split_words("a..b"), ["a", "b"]);
        assert!(split_words("").is_empty());
        assert!(split_words("-_.").is_empty());
    }

    #[test]
    fn test_split_words_case_boundaries() {
        assert_eq!(split_words("showOutput"), ["show", "Output"]);
        assert_eq!(split_words("XMLHttpRequest"), ["XML", "Http", "Request"]);
        assert_eq!(split_words("fooBARBaz"), ["foo", "BAR", "Baz"]);
        assert_eq!(split_words("ABC"), ["ABC"]);
    }

    #[test]
    fn test_split_words_digits() {
        assert_eq!(split_words("v2Beta"), ["v2", "Beta"]);
        assert_eq!(split_words("v2B"), ["v2B"]);
        assert_eq!(split_words("enable 2fa"), ["enable", "2fa"]);
        assert_eq!(split_words("level2"), ["level2"]);
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("run"), "Run");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("show-output"), "ShowOutput");
        assert_eq!(to_pascal_case("inlay.enableXYZ"), "InlayEnableXYZ");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("2fa"), "2fa");
        assert_eq!(to_pascal_case("v2Beta"), "V2Beta");
        assert_eq!(to_pascal_case("émoji-ünïcode"), "ÉmojiÜnïcode");
        assert_eq!(to_pascal_case(""), "");
    }
}
