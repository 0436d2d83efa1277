//! Arabic contextual shaping: presentation-form selection, mandatory
//! ligatures and harakat stripping.

pub mod harakat;
pub mod ligature;
pub mod shaper;
pub mod tables;

pub use harakat::strip_harakat;
pub use ligature::ligate;
pub use shaper::shape;
pub use tables::{LetterShapes, ShapePosition, base_for, ligature_for, record_for};

/// Run the full reshape pass over already bidi-reordered text:
/// contextual shaping, then mandatory ligation, then harakat removal.
pub fn reshape(text: &str) -> String {
    strip_harakat(&ligate(&shape(text)))
}
