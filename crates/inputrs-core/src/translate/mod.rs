// Inputrs Translation Layer
// Per-category translators from raw native events to normalized events

pub mod focus;
pub mod keyboard;
pub mod mouse;
pub mod scroll;

pub use focus::FocusTranslator;
pub use keyboard::{KeyTranslator, CAPS_LOCK_LATIN_LAYOUTS};
pub use mouse::MouseTranslator;
pub use scroll::{DeltaAccumulator, ScrollTranslator};
