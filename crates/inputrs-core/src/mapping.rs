// Inputrs Code Mapping Boundary
// Native-code lookup tables consumed as an opaque collaborator

use crate::event::{KeyKind, MouseButton, MouseKind};
use crate::keycode::{KeyCode, KeyLocation};
use crate::modifiers::Modifiers;
use crate::raw::EventSource;

/// Inputs for the compound key lookup.
///
/// Collected into one struct because the answer depends on all of them at
/// once: dead-key resolution consults the unmodified character, national
/// layout handling consults the hardware code, and so on.
#[derive(Debug, Clone, Copy)]
pub struct KeyInfoQuery {
    /// First character the key produces with no modifiers, if any
    pub char_ignoring_modifiers: Option<char>,
    /// The press committed no text of its own (dead key)
    pub dead: bool,
    /// Native modifier flag bits at press time
    pub native_modifiers: u64,
    /// Hardware key code
    pub native_key_code: u16,
    /// Prefer national-layout key codes over the US-layout defaults
    pub national_layouts: bool,
}

/// Answer to a compound key lookup.
#[derive(Debug, Clone, Copy)]
pub struct KeyInfo {
    pub key_code: KeyCode,
    pub location: KeyLocation,
    /// Whether this key normally posts a Typed event when pressed
    pub posts_typed: bool,
    /// Resolved character for a dead press; `None` when the combination is
    /// dead without producing a standalone character
    pub dead_char: Option<char>,
}

/// Answer to a modifier-change lookup.
#[derive(Debug, Clone, Copy)]
pub struct ModifierKeyInfo {
    pub key_code: KeyCode,
    pub location: KeyLocation,
    /// Pressed or Released, inferred from the flag transition
    pub kind: KeyKind,
}

/// The low-level lookup tables, supplied by the platform layer.
///
/// Every method is a pure, total function over its native code domain; the
/// translator never caches results across calls. Implementations carry no
/// state of their own.
pub trait CodeMapper {
    /// Map a native pointer event kind to the normalized kind.
    fn mouse_kind(&self, native_kind: u32, source: EventSource) -> MouseKind;

    /// Map a native key event kind to Pressed or Released.
    fn key_kind(&self, native_kind: u32, source: EventSource) -> KeyKind;

    /// Whether a native event kind is a pure modifier-state change.
    fn is_modifier_change(&self, native_kind: u32, source: EventSource) -> bool;

    /// Map a native button number to the normalized button.
    fn button(&self, native_button: i32) -> MouseButton;

    /// Down-mask a normalized button contributes to the modifier set.
    fn button_mask(&self, button: MouseButton) -> Modifiers;

    /// Map native modifier flag bits to the normalized mask.
    fn modifiers(&self, native_modifiers: u64) -> Modifiers;

    /// Whether the final modifier state requests a context menu.
    fn is_popup_trigger(&self, modifiers: Modifiers) -> bool;

    /// Normalize a raw character, or report that none can be delivered.
    ///
    /// `space_typed` marks presses whose committed text was entirely
    /// whitespace.
    fn char_for(&self, raw: char, native_modifiers: u64, space_typed: bool) -> Option<char>;

    /// Compound lookup for a regular (non-modifier) key press or release.
    fn key_info(&self, query: KeyInfoQuery) -> KeyInfo;

    /// Lookup for a modifier-change notification.
    fn modifier_key_info(&self, native_modifiers: u64, native_key_code: u16) -> ModifierKeyInfo;
}
