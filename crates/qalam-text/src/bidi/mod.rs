//! Bidirectional reordering built on `unicode-bidi`.
//!
//! The Unicode Bidirectional Algorithm (UAX-9) is delegated entirely
//! to the `unicode-bidi` crate; this module only adapts it to
//! whole-string logical-to-visual conversion.

pub mod reorder;

pub use reorder::{BaseDirection, reorder, reorder_with};
