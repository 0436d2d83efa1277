//! Mandatory ligature collapsing over shaped text.

use super::tables::ligature_for;

/// Collapse mandatory ligature pairs in shaped text.
///
/// Single forward scan. The pair key is the current glyph together
/// with the character immediately before it in the *input*; on a
/// match, the glyph most recently pushed to the output is replaced by
/// the ligature, so each collapse shortens the result by exactly one.
/// The output is rebuilt rather than edited in place, which keeps the
/// scan indices stable across collapses.
pub fn ligate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result: Vec<char> = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        let lig = if i > 0 {
            ligature_for(chars[i - 1], c)
        } else {
            None
        };
        match lig {
            Some(glyph) => {
                result.pop();
                result.push(glyph);
            }
            None => result.push(c),
        }
    }
    result.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::shape;

    #[test]
    fn lam_alef_pair_collapses() {
        // Shaped visual order of logical lam+alef: alef final then
        // initial lam.
        let shaped = "\u{FE8E}\u{FEDF}";
        assert_eq!(ligate(shaped), "\u{FEFB}");
    }

    #[test]
    fn shaped_lam_alef_word_collapses() {
        // Logical "لا" reversed to visual alef+lam, then shaped.
        let shaped = shape("\u{0627}\u{0644}");
        assert_eq!(ligate(&shaped), "\u{FEFB}");
    }

    #[test]
    fn text_without_pairs_is_unchanged() {
        assert_eq!(ligate("hello"), "hello");
        let shaped = shape("\u{062A}\u{064A}\u{0628}");
        assert_eq!(ligate(&shaped), shaped);
    }

    #[test]
    fn ligation_never_grows_the_text() {
        for text in [
            "",
            "abc",
            "\u{FE8E}\u{FEDF}",
            "\u{FE8E}\u{FEDF}\u{FE8E}\u{FEDF}",
        ] {
            assert!(ligate(text).chars().count() <= text.chars().count());
        }
    }

    #[test]
    fn each_pair_collapses_independently() {
        // Two adjacent eligible pairs shrink the text by two.
        let text = "\u{FE8E}\u{FEDF}\u{FE8E}\u{FEDF}";
        let out = ligate(text);
        assert_eq!(out.chars().count(), 2);
        assert_eq!(out, "\u{FEFB}\u{FEFB}");
    }
}
