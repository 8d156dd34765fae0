// Inputrs Toolkit Context Boundary
// Configuration and live toolkit state consulted by the gating rules

/// Toolkit-level state the translators consult.
///
/// Supplied by the embedding system; `crate::settings::Settings` is the
/// file-backed default implementation. Lock state and layout identifier are
/// live values that may change between calls on the delivery thread.
pub trait ToolkitContext {
    /// Whether buttons beyond the standard three are forwarded at all.
    fn extra_buttons_enabled(&self) -> bool;

    /// Number of buttons the platform reports as present.
    fn button_count(&self) -> i32;

    /// Prefer national-layout key codes over US-layout defaults.
    fn national_layouts(&self) -> bool;

    /// Current Caps Lock latch state.
    fn caps_lock_on(&self) -> bool;

    /// Identifier of the active keyboard layout / input method.
    fn keyboard_layout_id(&self) -> &str;
}
