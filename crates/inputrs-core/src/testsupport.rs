// Shared fixtures for the unit tests: a scripted code mapper, a recording
// notifier, and a plain-struct toolkit context.

use std::cell::Cell;
use std::collections::HashMap;

use crate::context::ToolkitContext;
use crate::event::{
    FocusEvent, KeyEvent, KeyKind, MouseButton, MouseEvent, MouseKind, WheelEvent,
};
use crate::keycode::{KeyCode, KeyLocation};
use crate::mapping::{CodeMapper, KeyInfo, KeyInfoQuery, ModifierKeyInfo};
use crate::modifiers::Modifiers;
use crate::notifier::EventNotifier;
use crate::raw::EventSource;

// Native event-kind codes the stub understands.
pub const KIND_MOVED: u32 = 1;
pub const KIND_PRESSED: u32 = 2;
pub const KIND_RELEASED: u32 = 3;
pub const KIND_DRAGGED: u32 = 4;
pub const KIND_ENTERED: u32 = 5;
pub const KIND_EXITED: u32 = 6;
pub const KIND_KEY_DOWN: u32 = 10;
pub const KIND_KEY_UP: u32 = 11;
pub const KIND_FLAGS_CHANGED: u32 = 12;

/// Scripted stand-in for the platform lookup tables.
///
/// Native modifier flags are interpreted as already-normalized bits so tests
/// can pass `Modifiers::...bits()` straight through. Key lookups fall back
/// to an identity answer unless a test scripts an entry.
pub struct StubMapper {
    pub key_infos: HashMap<u16, KeyInfo>,
    pub modifier_infos: HashMap<u16, ModifierKeyInfo>,
    pub modifier_change_kinds: Vec<u32>,
    /// Characters `char_for` refuses to normalize
    pub undefined_chars: Vec<char>,
    /// Last `space_typed` flag seen by `char_for`
    pub last_space_typed: Cell<Option<bool>>,
}

impl StubMapper {
    pub fn new() -> Self {
        Self {
            key_infos: HashMap::new(),
            modifier_infos: HashMap::new(),
            modifier_change_kinds: Vec::new(),
            undefined_chars: Vec::new(),
            last_space_typed: Cell::new(None),
        }
    }
}

impl CodeMapper for StubMapper {
    fn mouse_kind(&self, native_kind: u32, _source: EventSource) -> MouseKind {
        match native_kind {
            KIND_PRESSED => MouseKind::Pressed,
            KIND_RELEASED => MouseKind::Released,
            KIND_DRAGGED => MouseKind::Dragged,
            KIND_ENTERED => MouseKind::Entered,
            KIND_EXITED => MouseKind::Exited,
            _ => MouseKind::Moved,
        }
    }

    fn key_kind(&self, native_kind: u32, _source: EventSource) -> KeyKind {
        if native_kind == KIND_KEY_UP {
            KeyKind::Released
        } else {
            KeyKind::Pressed
        }
    }

    fn is_modifier_change(&self, native_kind: u32, _source: EventSource) -> bool {
        self.modifier_change_kinds.contains(&native_kind)
    }

    fn button(&self, native_button: i32) -> MouseButton {
        if native_button < 0 {
            MouseButton::None
        } else {
            MouseButton::Button(native_button as u8 + 1)
        }
    }

    fn button_mask(&self, button: MouseButton) -> Modifiers {
        match button {
            MouseButton::Button(1) => Modifiers::BUTTON1,
            MouseButton::Button(2) => Modifiers::BUTTON2,
            MouseButton::Button(3) => Modifiers::BUTTON3,
            MouseButton::Button(4) => Modifiers::BUTTON4,
            MouseButton::Button(5) => Modifiers::BUTTON5,
            _ => Modifiers::empty(),
        }
    }

    fn modifiers(&self, native_modifiers: u64) -> Modifiers {
        Modifiers::from_bits_truncate(native_modifiers as u32)
    }

    fn is_popup_trigger(&self, modifiers: Modifiers) -> bool {
        modifiers.contains(Modifiers::BUTTON3)
            || modifiers.contains(Modifiers::CONTROL | Modifiers::BUTTON1)
    }

    fn char_for(&self, raw: char, _native_modifiers: u64, space_typed: bool) -> Option<char> {
        self.last_space_typed.set(Some(space_typed));
        if self.undefined_chars.contains(&raw) {
            None
        } else {
            Some(raw)
        }
    }

    fn key_info(&self, query: KeyInfoQuery) -> KeyInfo {
        self.key_infos
            .get(&query.native_key_code)
            .copied()
            .unwrap_or(KeyInfo {
                key_code: KeyCode(query.native_key_code),
                location: KeyLocation::Standard,
                posts_typed: true,
                dead_char: None,
            })
    }

    fn modifier_key_info(&self, _native_modifiers: u64, native_key_code: u16) -> ModifierKeyInfo {
        self.modifier_infos
            .get(&native_key_code)
            .copied()
            .unwrap_or(ModifierKeyInfo {
                key_code: KeyCode(native_key_code),
                location: KeyLocation::Unknown,
                kind: KeyKind::Pressed,
            })
    }
}

/// Everything the notifier saw, in delivery order.
#[derive(Debug, Clone)]
pub enum Notified {
    Mouse(MouseEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
    Focus(FocusEvent),
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: Vec<Notified>,
}

impl EventNotifier for RecordingNotifier {
    fn notify_mouse(&mut self, event: MouseEvent) {
        self.events.push(Notified::Mouse(event));
    }

    fn notify_wheel(&mut self, event: WheelEvent) {
        self.events.push(Notified::Wheel(event));
    }

    fn notify_key(&mut self, event: KeyEvent) {
        self.events.push(Notified::Key(event));
    }

    fn notify_focus(&mut self, event: FocusEvent) {
        self.events.push(Notified::Focus(event));
    }
}

/// Plain-struct toolkit context with permissive defaults.
#[derive(Debug, Clone)]
pub struct TestContext {
    pub extra_buttons_enabled: bool,
    pub button_count: i32,
    pub national_layouts: bool,
    pub caps_lock_on: bool,
    pub keyboard_layout_id: String,
}

impl Default for TestContext {
    fn default() -> Self {
        Self {
            extra_buttons_enabled: true,
            button_count: 5,
            national_layouts: false,
            caps_lock_on: false,
            keyboard_layout_id: String::new(),
        }
    }
}

impl ToolkitContext for TestContext {
    fn extra_buttons_enabled(&self) -> bool {
        self.extra_buttons_enabled
    }

    fn button_count(&self) -> i32 {
        self.button_count
    }

    fn national_layouts(&self) -> bool {
        self.national_layouts
    }

    fn caps_lock_on(&self) -> bool {
        self.caps_lock_on
    }

    fn keyboard_layout_id(&self) -> &str {
        &self.keyboard_layout_id
    }
}
