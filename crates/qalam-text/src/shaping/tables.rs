//! Static presentation-form and ligature lookup tables.
//!
//! The shape table covers the Arabic block plus the extended
//! Persian/Urdu letters, one record per base letter. Records are pure
//! data; the derived hash indexes are built once on first use and
//! shared process-wide.

use std::sync::OnceLock;

use hashbrown::HashMap;

/// Presentation-form slot for one letter occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePosition {
    Isolated,
    Initial,
    Medial,
    Final,
}

impl ShapePosition {
    /// The paired fallback slot used when a letter defines no glyph
    /// for its computed position: medial degrades to final, initial
    /// to isolated (and vice versa).
    pub fn alternate(self) -> ShapePosition {
        match self {
            ShapePosition::Isolated => ShapePosition::Initial,
            ShapePosition::Initial => ShapePosition::Isolated,
            ShapePosition::Medial => ShapePosition::Final,
            ShapePosition::Final => ShapePosition::Medial,
        }
    }
}

/// The four presentation forms of one base letter.
///
/// A `None` slot means the letter has no connecting glyph for that
/// position (right-joining letters like alef and dal have no initial
/// or medial form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterShapes {
    pub base: char,
    pub isol: char,
    pub init: Option<char>,
    pub medi: Option<char>,
    pub fina: Option<char>,
}

impl LetterShapes {
    /// Glyph for the given position, if the letter defines one.
    pub fn glyph(&self, position: ShapePosition) -> Option<char> {
        match position {
            ShapePosition::Isolated => Some(self.isol),
            ShapePosition::Initial => self.init,
            ShapePosition::Medial => self.medi,
            ShapePosition::Final => self.fina,
        }
    }

    /// Glyph for `position`, falling back to the paired alternate
    /// slot when the primary one is empty.
    pub fn resolve(&self, position: ShapePosition) -> Option<char> {
        self.glyph(position)
            .or_else(|| self.glyph(position.alternate()))
    }
}

const fn row(
    base: char,
    isol: char,
    init: Option<char>,
    medi: Option<char>,
    fina: Option<char>,
) -> LetterShapes {
    LetterShapes {
        base,
        isol,
        init,
        medi,
        fina,
    }
}

/// One record per supported base letter: (base, isolated, initial,
/// medial, final). Row order matters: reverse lookup takes the first
/// record containing a glyph.
const SHAPES: &[LetterShapes] = &[
    row('\u{0621}', '\u{FE80}', None, None, None), // hamza
    row('\u{0622}', '\u{FE81}', None, None, Some('\u{FE82}')), // alef with madda
    row('\u{0623}', '\u{FE83}', None, None, Some('\u{FE84}')), // alef with hamza above
    row('\u{0624}', '\u{FE85}', None, None, Some('\u{FE86}')), // waw with hamza
    row('\u{0625}', '\u{FE87}', None, None, Some('\u{FE88}')), // alef with hamza below
    row('\u{0626}', '\u{FE89}', Some('\u{FE8B}'), Some('\u{FE8C}'), Some('\u{FE8A}')), // yeh with hamza
    row('\u{0627}', '\u{FE8D}', None, None, Some('\u{FE8E}')), // alef
    row('\u{0628}', '\u{FE8F}', Some('\u{FE91}'), Some('\u{FE92}'), Some('\u{FE90}')), // beh
    row('\u{0629}', '\u{FE93}', None, None, Some('\u{FE94}')), // teh marbuta
    row('\u{062A}', '\u{FE95}', Some('\u{FE97}'), Some('\u{FE98}'), Some('\u{FE96}')), // teh
    row('\u{062B}', '\u{FE99}', Some('\u{FE9B}'), Some('\u{FE9C}'), Some('\u{FE9A}')), // theh
    row('\u{062C}', '\u{FE9D}', Some('\u{FE9F}'), Some('\u{FEA0}'), Some('\u{FE9E}')), // jeem
    row('\u{062D}', '\u{FEA1}', Some('\u{FEA3}'), Some('\u{FEA4}'), Some('\u{FEA2}')), // hah
    row('\u{062E}', '\u{FEA5}', Some('\u{FEA7}'), Some('\u{FEA8}'), Some('\u{FEA6}')), // khah
    row('\u{062F}', '\u{FEA9}', None, None, Some('\u{FEAA}')), // dal
    row('\u{0630}', '\u{FEAB}', None, None, Some('\u{FEAC}')), // thal
    row('\u{0631}', '\u{FEAD}', None, None, Some('\u{FEAE}')), // reh
    row('\u{0632}', '\u{FEAF}', None, None, Some('\u{FEB0}')), // zain
    row('\u{0633}', '\u{FEB1}', Some('\u{FEB3}'), Some('\u{FEB4}'), Some('\u{FEB2}')), // seen
    row('\u{0634}', '\u{FEB5}', Some('\u{FEB7}'), Some('\u{FEB8}'), Some('\u{FEB6}')), // sheen
    row('\u{0635}', '\u{FEB9}', Some('\u{FEBB}'), Some('\u{FEBC}'), Some('\u{FEBA}')), // sad
    row('\u{0636}', '\u{FEBD}', Some('\u{FEBF}'), Some('\u{FEC0}'), Some('\u{FEBE}')), // dad
    row('\u{0637}', '\u{FEC1}', Some('\u{FEC3}'), Some('\u{FEC4}'), Some('\u{FEC2}')), // tah
    row('\u{0638}', '\u{FEC5}', Some('\u{FEC7}'), Some('\u{FEC8}'), Some('\u{FEC6}')), // zah
    row('\u{0639}', '\u{FEC9}', Some('\u{FECB}'), Some('\u{FECC}'), Some('\u{FECA}')), // ain
    row('\u{063A}', '\u{FECD}', Some('\u{FECF}'), Some('\u{FED0}'), Some('\u{FECE}')), // ghain
    row('\u{0640}', '\u{0640}', Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}')), // tatweel
    row('\u{0641}', '\u{FED1}', Some('\u{FED3}'), Some('\u{FED4}'), Some('\u{FED2}')), // feh
    row('\u{0642}', '\u{FED5}', Some('\u{FED7}'), Some('\u{FED8}'), Some('\u{FED6}')), // qaf
    row('\u{0643}', '\u{FED9}', Some('\u{FEDB}'), Some('\u{FEDC}'), Some('\u{FEDA}')), // kaf
    row('\u{0644}', '\u{FEDD}', Some('\u{FEDF}'), Some('\u{FEE0}'), Some('\u{FEDE}')), // lam
    row('\u{0645}', '\u{FEE1}', Some('\u{FEE3}'), Some('\u{FEE4}'), Some('\u{FEE2}')), // meem
    row('\u{0646}', '\u{FEE5}', Some('\u{FEE7}'), Some('\u{FEE8}'), Some('\u{FEE6}')), // noon
    row('\u{0647}', '\u{FEE9}', Some('\u{FEEB}'), Some('\u{FEEC}'), Some('\u{FEEA}')), // heh
    row('\u{0648}', '\u{FEED}', None, None, Some('\u{FEEE}')), // waw
    row('\u{0649}', '\u{FEEF}', None, None, Some('\u{FEF0}')), // alef maksura
    row('\u{064A}', '\u{FEF1}', Some('\u{FEF3}'), Some('\u{FEF4}'), Some('\u{FEF2}')), // yeh
    row('\u{0671}', '\u{FB50}', None, None, Some('\u{FB51}')), // alef wasla
    row('\u{0677}', '\u{FBDD}', None, None, None), // u with hamza above
    row('\u{0679}', '\u{FB66}', Some('\u{FB68}'), Some('\u{FB69}'), Some('\u{FB67}')), // tteh
    row('\u{067A}', '\u{FB5E}', Some('\u{FB60}'), Some('\u{FB61}'), Some('\u{FB5F}')), // tteheh
    row('\u{067B}', '\u{FB52}', Some('\u{FB54}'), Some('\u{FB55}'), Some('\u{FB53}')), // beeh
    row('\u{067E}', '\u{FB56}', Some('\u{FB58}'), Some('\u{FB59}'), Some('\u{FB57}')), // peh
    row('\u{067F}', '\u{FB62}', Some('\u{FB64}'), Some('\u{FB65}'), Some('\u{FB63}')), // teheh
    row('\u{0680}', '\u{FB5A}', Some('\u{FB5C}'), Some('\u{FB5D}'), Some('\u{FB5B}')), // beheh
    row('\u{0683}', '\u{FB76}', Some('\u{FB78}'), Some('\u{FB79}'), Some('\u{FB77}')), // nyeh
    row('\u{0684}', '\u{FB72}', Some('\u{FB74}'), Some('\u{FB75}'), Some('\u{FB73}')), // dyeh
    row('\u{0686}', '\u{FB7A}', Some('\u{FB7C}'), Some('\u{FB7D}'), Some('\u{FB7B}')), // tcheh
    row('\u{0687}', '\u{FB7E}', Some('\u{FB80}'), Some('\u{FB81}'), Some('\u{FB7F}')), // tcheheh
    row('\u{0688}', '\u{FB88}', None, None, Some('\u{FB89}')), // ddal
    row('\u{068C}', '\u{FB84}', None, None, Some('\u{FB85}')), // dahal
    row('\u{068D}', '\u{FB82}', None, None, Some('\u{FB83}')), // ddahal
    row('\u{068E}', '\u{FB86}', None, None, Some('\u{FB87}')), // dul
    row('\u{0691}', '\u{FB8C}', None, None, Some('\u{FB8D}')), // rreh
    row('\u{0698}', '\u{FB8A}', None, None, Some('\u{FB8B}')), // jeh
    row('\u{06A4}', '\u{FB6A}', Some('\u{FB6C}'), Some('\u{FB6D}'), Some('\u{FB6B}')), // veh
    row('\u{06A6}', '\u{FB6E}', Some('\u{FB70}'), Some('\u{FB71}'), Some('\u{FB6F}')), // peheh
    row('\u{06A9}', '\u{FB8E}', Some('\u{FB90}'), Some('\u{FB91}'), Some('\u{FB8F}')), // keheh
    row('\u{06AD}', '\u{FBD3}', Some('\u{FBD5}'), Some('\u{FBD6}'), Some('\u{FBD4}')), // ng
    row('\u{06AF}', '\u{FB92}', Some('\u{FB94}'), Some('\u{FB95}'), Some('\u{FB93}')), // gaf
    row('\u{06B1}', '\u{FB9A}', Some('\u{FB9C}'), Some('\u{FB9D}'), Some('\u{FB9B}')), // ngoeh
    row('\u{06B3}', '\u{FB96}', Some('\u{FB98}'), Some('\u{FB99}'), Some('\u{FB97}')), // gueh
    row('\u{06BA}', '\u{FB9E}', None, None, Some('\u{FB9F}')), // noon ghunna
    row('\u{06BB}', '\u{FBA0}', Some('\u{FBA2}'), Some('\u{FBA3}'), Some('\u{FBA1}')), // rnoon
    row('\u{06BE}', '\u{FBAA}', Some('\u{FBAC}'), Some('\u{FBAD}'), Some('\u{FBAB}')), // heh doachashmee
    row('\u{06C0}', '\u{FBA4}', None, None, Some('\u{FBA5}')), // heh with yeh above
    row('\u{06C1}', '\u{FBA6}', Some('\u{FBA8}'), Some('\u{FBA9}'), Some('\u{FBA7}')), // heh goal
    row('\u{06C5}', '\u{FBE0}', None, None, Some('\u{FBE1}')), // kirghiz oe
    row('\u{06C6}', '\u{FBD9}', None, None, Some('\u{FBDA}')), // oe
    row('\u{06C7}', '\u{FBD7}', None, None, Some('\u{FBD8}')), // u
    row('\u{06C8}', '\u{FBDB}', None, None, Some('\u{FBDC}')), // yu
    row('\u{06C9}', '\u{FBE2}', None, None, Some('\u{FBE3}')), // kirghiz yu
    row('\u{06CB}', '\u{FBDE}', None, None, Some('\u{FBDF}')), // ve
    row('\u{06CC}', '\u{FBFC}', Some('\u{FBFE}'), Some('\u{FBFF}'), Some('\u{FBFD}')), // farsi yeh
    row('\u{06D0}', '\u{FBE4}', Some('\u{FBE6}'), Some('\u{FBE7}'), Some('\u{FBE5}')), // e
    row('\u{06D2}', '\u{FBAE}', None, None, Some('\u{FBAF}')), // yeh barree
    row('\u{06D3}', '\u{FBB0}', None, None, Some('\u{FBB1}')), // yeh barree with hamza
    // Precomposed lam-alef ligatures keep their isolated form as the
    // base so a second shaping pass leaves them alone.
    row('\u{FEFB}', '\u{FEFB}', None, None, Some('\u{FEFC}')), // lam-alef
    row('\u{FEF7}', '\u{FEF7}', None, None, Some('\u{FEF8}')), // lam-alef with hamza above
    row('\u{FEF9}', '\u{FEF9}', None, None, Some('\u{FEFA}')), // lam-alef with hamza below
    row('\u{FEF5}', '\u{FEF5}', None, None, Some('\u{FEF6}')), // lam-alef with madda
];

/// Mandatory lam-alef ligatures, keyed by (preceding shaped glyph,
/// current shaped glyph) in scan order. An alef final form after an
/// initial lam yields the isolated ligature; after a medial lam, the
/// final ligature.
const LIGATURES: &[(char, char, char)] = &[
    ('\u{FE82}', '\u{FEDF}', '\u{FEF5}'), // madda alef + initial lam
    ('\u{FE84}', '\u{FEDF}', '\u{FEF7}'), // hamza-above alef + initial lam
    ('\u{FE88}', '\u{FEDF}', '\u{FEF9}'), // hamza-below alef + initial lam
    ('\u{FE8E}', '\u{FEDF}', '\u{FEFB}'), // alef + initial lam
    ('\u{FE82}', '\u{FEE0}', '\u{FEF6}'), // madda alef + medial lam
    ('\u{FE84}', '\u{FEE0}', '\u{FEF8}'), // hamza-above alef + medial lam
    ('\u{FE88}', '\u{FEE0}', '\u{FEFA}'), // hamza-below alef + medial lam
    ('\u{FE8E}', '\u{FEE0}', '\u{FEFC}'), // alef + medial lam
];

static FORM_INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
static LIGATURE_INDEX: OnceLock<HashMap<(char, char), char>> = OnceLock::new();

fn form_index() -> &'static HashMap<char, usize> {
    FORM_INDEX.get_or_init(|| {
        let mut index = HashMap::new();
        for (i, shapes) in SHAPES.iter().enumerate() {
            let forms = [
                Some(shapes.base),
                Some(shapes.isol),
                shapes.init,
                shapes.medi,
                shapes.fina,
            ];
            for form in forms.into_iter().flatten() {
                // First record containing the glyph wins.
                index.entry(form).or_insert(i);
            }
        }
        index
    })
}

/// Find the shape record containing `c` in any of its five columns.
pub fn record_for(c: char) -> Option<&'static LetterShapes> {
    form_index().get(&c).map(|&i| &SHAPES[i])
}

/// Map a base letter or any of its presentation forms back to the
/// base letter. `None` for characters outside the table.
pub fn base_for(c: char) -> Option<char> {
    record_for(c).map(|shapes| shapes.base)
}

/// Look up the mandatory ligature replacing the adjacent pair
/// (`prev`, `curr`) of shaped glyphs, if one is registered.
pub fn ligature_for(prev: char, curr: char) -> Option<char> {
    LIGATURE_INDEX
        .get_or_init(|| {
            LIGATURES
                .iter()
                .map(|&(prev, curr, lig)| ((prev, curr), lig))
                .collect()
        })
        .get(&(prev, curr))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_resolves_to_its_own_record() {
        for shapes in SHAPES {
            for form in [shapes.isol, shapes.base]
                .into_iter()
                .chain(shapes.init)
                .chain(shapes.medi)
                .chain(shapes.fina)
            {
                let found = record_for(form).unwrap();
                assert_eq!(found, shapes, "form {form:?} resolved to the wrong record");
            }
        }
    }

    #[test]
    fn base_lookup_from_presentation_forms() {
        // Initial beh back to beh.
        assert_eq!(base_for('\u{FE91}'), Some('\u{0628}'));
        // Final yeh back to yeh.
        assert_eq!(base_for('\u{FEF2}'), Some('\u{064A}'));
        // Base letters map to themselves.
        assert_eq!(base_for('\u{0644}'), Some('\u{0644}'));
        // Unknown characters have no record.
        assert_eq!(base_for('x'), None);
        assert_eq!(base_for(' '), None);
    }

    #[test]
    fn ligature_ruleset_is_exact() {
        // Alef final after initial lam collapses.
        assert_eq!(
            ligature_for('\u{FE8E}', '\u{FEDF}'),
            Some('\u{FEFB}')
        );
        // Medial lam gives the final ligature form.
        assert_eq!(
            ligature_for('\u{FE8E}', '\u{FEE0}'),
            Some('\u{FEFC}')
        );
        // Reversed pair order does not fire.
        assert_eq!(ligature_for('\u{FEDF}', '\u{FE8E}'), None);
        // Unshaped base letters never fire.
        assert_eq!(ligature_for('\u{0627}', '\u{0644}'), None);
    }

    #[test]
    fn resolve_falls_back_to_paired_alternate() {
        let alef = record_for('\u{0627}').unwrap();
        // Alef has no medial form; it degrades to final.
        assert_eq!(alef.resolve(ShapePosition::Medial), Some('\u{FE8E}'));
        // And no initial form; that degrades to isolated.
        assert_eq!(alef.resolve(ShapePosition::Initial), Some('\u{FE8D}'));

        let beh = record_for('\u{0628}').unwrap();
        assert_eq!(beh.resolve(ShapePosition::Medial), Some('\u{FE92}'));
    }
}
