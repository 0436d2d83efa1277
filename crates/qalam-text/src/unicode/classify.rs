//! Range-driven classification of code points.
//!
//! The raw predicates mirror the range sets the shaping pipeline was
//! designed against and intentionally overlap (Arabic-Indic digits
//! also fall inside the Arabic block, ASCII digits inside the neutral
//! block). [`classify`] applies a fixed precedence so the resulting
//! categories are mutually exclusive.

/// Mutually exclusive character categories used by the shaper and the
/// live-input controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Arabic-script letters, signs and presentation forms.
    Arabic,
    /// Harakat (combining diacritic) marks.
    Harakat,
    /// ASCII or Arabic-Indic digits.
    Digit,
    /// Control characters and ASCII punctuation.
    Neutral,
    /// Everything else (Latin and other foreign scripts).
    Other,
}

/// Arabic block, Arabic Supplement, Arabic Extended-A and the
/// Presentation Forms A/B blocks.
const ARABIC_RANGES: &[(u32, u32)] = &[
    (0x0600, 0x060A),
    (0x060C, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0x206C, 0x206D),
    (0xFB50, 0xFD3D),
    (0xFD50, 0xFDFB),
    (0xFE70, 0xFEFC),
];

/// Short vowels, tanween, shadda/sukun and the Quranic annotation
/// marks.
const HARAKAT_RANGES: &[(u32, u32)] = &[
    (0x0610, 0x061A),
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E8),
    (0x06EA, 0x06ED),
    (0x08D4, 0x08FF),
];

const DIGIT_RANGES: &[(u32, u32)] = &[
    (0x0030, 0x0039),
    (0x0660, 0x0669),
];

/// ASCII controls, punctuation and symbols that take their direction
/// from surrounding text.
const NEUTRAL_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x0040),
    (0x005B, 0x0060),
    (0x007B, 0x007F),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = c as u32;
    ranges.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

/// Whether `c` belongs to any Arabic-script range, harakat and
/// presentation forms included.
pub fn is_arabic(c: char) -> bool {
    in_ranges(c, ARABIC_RANGES)
}

/// Whether `c` is a harakat mark.
pub fn is_harakat(c: char) -> bool {
    in_ranges(c, HARAKAT_RANGES)
}

/// Whether `c` is an ASCII or Arabic-Indic digit.
pub fn is_digit(c: char) -> bool {
    in_ranges(c, DIGIT_RANGES)
}

/// Whether `c` is a direction-neutral control or punctuation
/// character. Note this raw predicate also matches ASCII digits;
/// [`classify`] resolves the overlap.
pub fn is_neutral(c: char) -> bool {
    in_ranges(c, NEUTRAL_RANGES)
}

/// Classify a code point. Total over all Unicode input: anything
/// outside the known ranges is `Other`.
pub fn classify(c: char) -> CharClass {
    if is_harakat(c) {
        CharClass::Harakat
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_arabic(c) {
        CharClass::Arabic
    } else if is_neutral(c) {
        CharClass::Neutral
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_letters_classify_as_arabic() {
        assert_eq!(classify('ب'), CharClass::Arabic);
        assert_eq!(classify('ي'), CharClass::Arabic);
        // Presentation forms are Arabic too.
        assert_eq!(classify('\u{FE91}'), CharClass::Arabic);
        assert_eq!(classify('\u{FEFB}'), CharClass::Arabic);
    }

    #[test]
    fn harakat_wins_over_arabic_block() {
        // Fatha sits inside the Arabic block but must classify as a
        // mark so the stripper can find it.
        assert_eq!(classify('\u{064E}'), CharClass::Harakat);
        assert!(is_arabic('\u{064E}'));
    }

    #[test]
    fn digits_win_over_neutral_and_arabic() {
        assert_eq!(classify('7'), CharClass::Digit);
        assert!(is_neutral('7'));
        // Arabic-Indic seven.
        assert_eq!(classify('\u{0667}'), CharClass::Digit);
        assert!(is_arabic('\u{0667}'));
    }

    #[test]
    fn punctuation_and_controls_are_neutral() {
        assert_eq!(classify(' '), CharClass::Neutral);
        assert_eq!(classify('!'), CharClass::Neutral);
        assert_eq!(classify('\n'), CharClass::Neutral);
        assert_eq!(classify('_'), CharClass::Neutral);
    }

    #[test]
    fn foreign_scripts_are_other() {
        assert_eq!(classify('a'), CharClass::Other);
        assert_eq!(classify('Z'), CharClass::Other);
        assert_eq!(classify('世'), CharClass::Other);
        assert_eq!(classify('é'), CharClass::Other);
    }
}
