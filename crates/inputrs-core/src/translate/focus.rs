// Inputrs Focus Translation
// Window activation pass-through

use crate::event::{FocusEvent, WindowId};

/// Normalizes window activation changes. No state, no suppression.
#[derive(Debug, Default)]
pub struct FocusTranslator;

impl FocusTranslator {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, gained: bool, opposite: Option<WindowId>) -> FocusEvent {
        FocusEvent { gained, opposite }
    }
}
