//! Harakat removal.

use crate::unicode::is_harakat;

/// Remove every harakat mark from `text`.
///
/// Order-preserving and idempotent; text without harakat comes back
/// unchanged. The engine renders display text without vowel marks, so
/// this is the last step of the reshape pass.
pub fn strip_harakat(text: &str) -> String {
    text.chars().filter(|&c| !is_harakat(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatha_and_shadda_are_removed() {
        // beh + fatha + shadda + yeh
        let text = "\u{0628}\u{064E}\u{0651}\u{064A}";
        assert_eq!(strip_harakat(text), "\u{0628}\u{064A}");
    }

    #[test]
    fn identity_on_text_without_harakat() {
        for text in ["", "hello", "\u{0628}\u{064A}\u{062A}", "a/b"] {
            assert_eq!(strip_harakat(text), text);
        }
    }

    #[test]
    fn stripping_is_idempotent() {
        let text = "\u{0633}\u{064E}\u{0644}\u{0627}\u{064B}\u{0645}";
        let once = strip_harakat(text);
        assert_eq!(strip_harakat(&once), once);
    }
}
