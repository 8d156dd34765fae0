// Inputrs Core Library
// Translates raw native input notifications into the normalized event model

pub mod context;
pub mod event;
pub mod keycode;
pub mod mapping;
pub mod modifiers;
pub mod notifier;
pub mod raw;
pub mod responder;
pub mod settings;
pub mod translate;

// Shared fixtures for the unit tests
#[cfg(test)]
mod testsupport;

pub use context::ToolkitContext;
pub use event::{
    FocusEvent, KeyEvent, KeyKind, MouseButton, MouseEvent, MouseKind, ScrollType, WheelEvent,
    WindowId,
};
pub use keycode::{KeyCode, KeyLocation};
pub use mapping::{CodeMapper, KeyInfo, KeyInfoQuery, ModifierKeyInfo};
pub use modifiers::Modifiers;
pub use notifier::EventNotifier;
pub use raw::{EventSource, RawKeyEvent, RawMouseEvent, RawScrollEvent, ScrollPhase};
pub use responder::{Responder, ResponderState};
pub use settings::{Settings, SettingsError};
pub use translate::{DeltaAccumulator, FocusTranslator, KeyTranslator, MouseTranslator, ScrollTranslator};
