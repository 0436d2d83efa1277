//! Character classification over fixed Unicode ranges.

pub mod classify;

pub use classify::{CharClass, classify, is_arabic, is_digit, is_harakat, is_neutral};
