//! Top-level render/derender facade.
//!
//! `render` turns logical-order text into the visual, shaped string a
//! presentation-form-only widget can display; `derender` recovers the
//! logical text from a visual string. The path variants apply the
//! transform per path segment so bidi reordering never crosses a
//! directory separator.

use std::path::MAIN_SEPARATOR;

use crate::bidi::reorder;
use crate::shaping::{base_for, reshape};

/// Zero-width no-break space. Legacy bidi shapers inject it next to
/// lam-alef ligatures; derendering drops it.
const ZERO_WIDTH_NBSP: char = '\u{FEFF}';

const LAM: char = '\u{0644}';

/// Render logical-order text into its visual, shaped form: bidi
/// reordering, then contextual shaping, mandatory ligation and
/// harakat removal.
pub fn render(text: &str) -> String {
    reshape(&reorder(text))
}

/// Invert [`render`]: map presentation forms back to base letters,
/// dissolve lam-alef ligatures, and reorder the result back toward
/// logical order.
///
/// Harakat removed by rendering are gone for good, so the round trip
/// is exact only for harakat-free input. Characters outside the shape
/// table pass through unchanged.
pub fn derender(text: &str) -> String {
    let mut bases = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ZERO_WIDTH_NBSP {
            continue;
        }
        match base_for(c) {
            Some(base) => match lam_alef_parts(base) {
                Some((alef, lam)) => {
                    // Ligatures dissolve back into their two letters,
                    // alef first since the string is still in visual
                    // order.
                    bases.push(alef);
                    bases.push(lam);
                }
                None => bases.push(base),
            },
            None => bases.push(c),
        }
    }
    reorder(&bases)
}

/// Split a lam-alef ligature base into its alef component, paired
/// with the plain lam it absorbed.
fn lam_alef_parts(base: char) -> Option<(char, char)> {
    let alef = match base {
        '\u{FEF5}' => '\u{0622}',
        '\u{FEF7}' => '\u{0623}',
        '\u{FEF9}' => '\u{0625}',
        '\u{FEFB}' => '\u{0627}',
        _ => return None,
    };
    Some((alef, LAM))
}

/// Render each path segment independently and rejoin with the
/// platform separator. Each segment is its own bidi paragraph; the
/// separators never move.
pub fn render_path(path: &str) -> String {
    transform_path(path, render)
}

/// Inverse of [`render_path`].
pub fn derender_path(path: &str) -> String {
    transform_path(path, derender)
}

fn transform_path(path: &str, f: fn(&str) -> String) -> String {
    path.split(MAIN_SEPARATOR)
        .map(f)
        .collect::<Vec<_>>()
        .join(&MAIN_SEPARATOR.to_string())
}

/// Dispatching entry point: render plain text, or per path segment
/// when `is_path` is set.
pub fn render_text(text: &str, is_path: bool) -> String {
    if is_path { render_path(text) } else { render(text) }
}

/// Dispatching inverse of [`render_text`].
pub fn derender_text(text: &str, is_path: bool) -> String {
    if is_path {
        derender_path(text)
    } else {
        derender(text)
    }
}
