//! Facade crate for the qalam Arabic text engine.
//!
//! Everything lives in `qalam-text`; this crate re-exports its public
//! surface so embedders can depend on a single package name.

pub use qalam_text::*;
