//! Contextual presentation-form selection.

use crate::unicode::is_arabic;

use super::tables::{ShapePosition, record_for};

/// Select the contextual presentation form for every Arabic letter in
/// `text`, which must already be in visual (bidi-reordered) order.
///
/// The scan runs from the last character to the first. For position
/// `i`, the deciding neighbor is `right_char` at `i + 1` — once an RTL
/// run has been reversed into storage order, that is the character
/// preceding the letter in reading order — and `left_char` at `i - 1`
/// is the one following it. Missing neighbors at the string
/// boundaries behave like non-Arabic characters, forcing the
/// isolated/final fallback.
///
/// Output length always equals input length; ligature collapsing is a
/// separate pass.
pub fn shape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut shaped = vec!['\0'; chars.len()];
    for i in (0..chars.len()).rev() {
        let right_char = chars.get(i + 1).copied();
        let left_char = if i > 0 { Some(chars[i - 1]) } else { None };
        shaped[i] = shape_char(chars[i], right_char, left_char);
    }
    shaped.into_iter().collect()
}

/// Pick the form for one letter given its immediate neighbors.
fn shape_char(c: char, right_char: Option<char>, left_char: Option<char>) -> char {
    let Some(shapes) = record_for(c) else {
        return c;
    };
    // Letters with no final form never connect (lone hamza); they
    // pass through unshaped.
    if shapes.fina.is_none() {
        return c;
    }

    let right_has_medial = right_char
        .and_then(record_for)
        .is_some_and(|r| r.medi.is_some());
    let mut position = if right_has_medial {
        ShapePosition::Medial
    } else {
        ShapePosition::Initial
    };

    if !left_char.is_some_and(is_arabic) {
        // Nothing to connect to on the left: medial degrades to
        // final, initial to isolated.
        position = position.alternate();
    } else if left_char.and_then(record_for).and_then(|r| r.fina).is_none() {
        // Arabic neighbor that cannot take a final form (harakat, a
        // lone hamza) breaks the joining entirely.
        position = ShapePosition::Isolated;
    }

    shapes.resolve(position).unwrap_or(c)
}
