// Inputrs Raw Event Layer
// Transient carriers for platform-native input notifications

use std::fmt;

/// Embedding context an event was captured in.
///
/// Native event-kind constants differ between events delivered straight from
/// the platform run loop and events relayed through a plugin host, so the
/// code-mapping collaborator needs to know which table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// Events from the platform's own delivery thread.
    Native,
    /// Events relayed by a plugin host callback.
    Plugin,
}

/// Phase of a continuous scroll gesture.
///
/// `Unsupported` marks input from a discrete wheel with no gesture phases.
/// The momentum variants describe trackpad inertial scrolling after the
/// fingers have lifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ScrollPhase {
    Unsupported = 0,
    Began = 1,
    Changed = 2,
    MomentumBegan = 3,
    MomentumChanged = 4,
    Ended = 5,
}

impl ScrollPhase {
    /// Create ScrollPhase from i32 value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(ScrollPhase::Unsupported),
            1 => Some(ScrollPhase::Began),
            2 => Some(ScrollPhase::Changed),
            3 => Some(ScrollPhase::MomentumBegan),
            4 => Some(ScrollPhase::MomentumChanged),
            5 => Some(ScrollPhase::Ended),
            _ => None,
        }
    }

    /// Convert ScrollPhase to its i32 representation
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// True for any phase reported by a gesture-capable device
    pub fn is_gesture(self) -> bool {
        self != ScrollPhase::Unsupported
    }
}

impl fmt::Display for ScrollPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScrollPhase::Unsupported => "unsupported",
            ScrollPhase::Began => "began",
            ScrollPhase::Changed => "changed",
            ScrollPhase::MomentumBegan => "momentum-began",
            ScrollPhase::MomentumChanged => "momentum-changed",
            ScrollPhase::Ended => "ended",
        };
        write!(f, "{}", name)
    }
}

/// Raw pointer notification as delivered by the native layer.
///
/// Not retained past the translate call that consumes it.
#[derive(Debug, Clone)]
pub struct RawMouseEvent {
    /// Opaque native event-kind code
    pub native_kind: u32,
    /// Native modifier flag bits
    pub native_modifiers: u64,
    /// Native button number (0-based; 0 is the primary button)
    pub button_number: i32,
    /// Click count reported by the platform
    pub click_count: i32,
    /// Window-local coordinates
    pub x: i32,
    pub y: i32,
    /// Screen coordinates
    pub abs_x: i32,
    pub abs_y: i32,
}

/// Raw scroll notification.
#[derive(Debug, Clone)]
pub struct RawScrollEvent {
    pub x: i32,
    pub y: i32,
    pub abs_x: i32,
    pub abs_y: i32,
    pub native_modifiers: u64,
    /// Fractional horizontal delta in native scroll sign convention
    pub delta_x: f64,
    /// Fractional vertical delta in native scroll sign convention
    pub delta_y: f64,
    pub phase: ScrollPhase,
}

/// Raw keyboard notification.
///
/// The two character fields distinguish "absent" from "empty": an empty
/// (non-absent) `committed_chars` marks a dead-key press that committed no
/// text of its own.
#[derive(Debug, Clone)]
pub struct RawKeyEvent {
    /// Opaque native event-kind code
    pub native_kind: u32,
    /// Native modifier flag bits
    pub native_modifiers: u64,
    /// Text the press committed, after input-method processing
    pub committed_chars: Option<String>,
    /// Characters the key would produce with no modifiers applied
    pub chars_ignoring_modifiers: Option<String>,
    /// Hardware key code
    pub native_key_code: u16,
    /// Caller wants Typed events synthesized for printable presses
    pub needs_synthetic_typed: bool,
    /// Caller wants a synthetic Released after each synthesized Typed
    pub needs_synthetic_released: bool,
}

impl RawKeyEvent {
    /// True when the press is a dead key: committed text is present but empty.
    pub fn is_dead(&self) -> bool {
        matches!(self.committed_chars.as_deref(), Some(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_phase_round_trip() {
        for value in 0..=5 {
            let phase = ScrollPhase::from_i32(value).unwrap();
            assert_eq!(phase.to_i32(), value);
        }
        assert_eq!(ScrollPhase::from_i32(6), None);
        assert_eq!(ScrollPhase::from_i32(-1), None);
    }

    #[test]
    fn test_scroll_phase_is_gesture() {
        assert!(!ScrollPhase::Unsupported.is_gesture());
        assert!(ScrollPhase::Began.is_gesture());
        assert!(ScrollPhase::MomentumChanged.is_gesture());
    }

    #[test]
    fn test_dead_key_detection() {
        let mut raw = RawKeyEvent {
            native_kind: 0,
            native_modifiers: 0,
            committed_chars: Some(String::new()),
            chars_ignoring_modifiers: Some("e".to_string()),
            native_key_code: 14,
            needs_synthetic_typed: true,
            needs_synthetic_released: false,
        };
        assert!(raw.is_dead());

        raw.committed_chars = Some("e".to_string());
        assert!(!raw.is_dead());

        raw.committed_chars = None;
        assert!(!raw.is_dead());
    }
}
