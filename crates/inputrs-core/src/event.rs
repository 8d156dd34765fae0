// Inputrs Normalized Event Model
// Platform-independent events delivered to the notifier collaborator

use std::fmt;

use crate::keycode::{KeyCode, KeyLocation};
use crate::modifiers::Modifiers;

/// Opaque handle identifying a native window.
///
/// Only used to report the "opposite" window of a focus transfer; the core
/// never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WindowId(pub u64);

/// Normalized pointer event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseKind {
    Moved,
    Pressed,
    Released,
    Dragged,
    Entered,
    Exited,
}

impl MouseKind {
    /// Kinds that report a button and click count.
    ///
    /// Move, enter and exit notifications carry no button: the platform
    /// reports whatever button state happens to be latched, which is
    /// meaningless for hover traffic.
    pub fn carries_button(self) -> bool {
        !matches!(
            self,
            MouseKind::Moved | MouseKind::Entered | MouseKind::Exited
        )
    }
}

/// Normalized pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button involved (moves, enters, exits)
    #[default]
    None,
    /// 1-based normalized button number
    Button(u8),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::None => write!(f, "none"),
            MouseButton::Button(n) => write!(f, "button{}", n),
        }
    }
}

/// Normalized key event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Pressed,
    Released,
    /// Synthesized character delivery; never reported by the native layer
    Typed,
}

/// Wheel scrolling granularity. The translator always emits unit scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollType {
    #[default]
    Unit,
}

/// Normalized pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseKind,
    /// Milliseconds since the epoch, captured at translation time
    pub when: u64,
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
    pub abs_x: i32,
    pub abs_y: i32,
    pub modifiers: Modifiers,
    pub click_count: i32,
    /// True when the final modifier state requests a context menu
    pub popup_trigger: bool,
}

/// Normalized wheel event. One event per axis per translate call at most.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    pub when: u64,
    pub x: i32,
    pub y: i32,
    pub abs_x: i32,
    pub abs_y: i32,
    pub modifiers: Modifiers,
    pub scroll_type: ScrollType,
    /// Units advanced per notch; fixed at 1
    pub scroll_amount: i32,
    /// Whole notches, sign-inverted from the native convention
    pub notches: i32,
    /// Precise delta, sign-inverted from the native convention
    pub fractional_delta: f64,
}

/// Normalized key event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub when: u64,
    pub modifiers: Modifiers,
    pub key_code: KeyCode,
    /// Character delivered with the event; `None` when no printable
    /// character could be determined
    pub character: Option<char>,
    pub location: KeyLocation,
}

/// Window activation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub gained: bool,
    /// Window on the other side of the transfer, if known
    pub opposite: Option<WindowId>,
}
