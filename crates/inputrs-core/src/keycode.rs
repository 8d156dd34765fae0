// Inputrs Key Code Type
// Normalized key code newtype and key location

use std::fmt;

/// Normalized key code.
///
/// Newtype wrapper around u16 for type safety. The code-mapping collaborator
/// owns the full native-to-normalized table; the core itself only needs to
/// recognize the handful of codes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// No key code could be determined.
    pub const UNDEFINED: KeyCode = KeyCode(0);
    /// Enter / Return.
    pub const ENTER: KeyCode = KeyCode(0x0A);
    /// Caps Lock.
    pub const CAPS_LOCK: KeyCode = KeyCode(0x14);
    /// Space bar.
    pub const SPACE: KeyCode = KeyCode(0x20);

    /// Get the raw numeric code value
    pub fn code(self) -> u16 {
        self.0
    }

    /// True for the undefined sentinel
    pub fn is_undefined(self) -> bool {
        self == KeyCode::UNDEFINED
    }
}

impl From<u16> for KeyCode {
    fn from(code: u16) -> Self {
        KeyCode(code)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Physical location of the key that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyLocation {
    #[default]
    Unknown,
    Standard,
    Left,
    Right,
    Numpad,
}

impl fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyLocation::Unknown => "unknown",
            KeyLocation::Standard => "standard",
            KeyLocation::Left => "left",
            KeyLocation::Right => "right",
            KeyLocation::Numpad => "numpad",
        };
        write!(f, "{}", name)
    }
}
