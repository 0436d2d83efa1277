//! qalam-text: Arabic bidirectional text shaping engine.
//!
//! Takes logical-order Unicode text and produces the visual glyph
//! sequence a presentation-form-only text widget can display:
//! contextual letterforms, mandatory lam-alef ligatures, harakat
//! removal and bidi reordering. The inverse mapping recovers logical
//! text for copy/editing, and a live-input controller keeps a
//! text-entry field coherent while its buffer is reshaped between
//! keystrokes.
//!
//! The Unicode Bidirectional Algorithm itself is delegated to
//! `unicode-bidi`; everything else in the pipeline is a pure, total
//! function over arbitrary Unicode input.

pub mod bidi;
pub mod input;
pub mod render;
pub mod shaping;
pub mod unicode;

pub use bidi::{BaseDirection, reorder, reorder_with};
pub use input::{
    BufferField, Clipboard, ClipboardError, Direction, FieldId, InputSession, Key, KeyEvent,
    MemoryClipboard, SessionMap, SystemClipboard, TextField,
};
pub use render::{derender, derender_path, derender_text, render, render_path, render_text};
pub use shaping::{ligate, reshape, shape, strip_harakat};
pub use unicode::{CharClass, classify};
