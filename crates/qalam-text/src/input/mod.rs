//! Live-input support: per-field session state, the host field
//! adapter boundary and clipboard interception.

pub mod clipboard;
pub mod controller;
pub mod field;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use controller::{Direction, FieldId, InputSession, SessionMap};
pub use field::{BufferField, Key, KeyEvent, TextField};
