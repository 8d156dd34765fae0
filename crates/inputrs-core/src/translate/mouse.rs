// Inputrs Mouse Translation
// Pointer normalization: button gating, drag dedup, modifier arbitration

use crate::context::ToolkitContext;
use crate::event::{MouseButton, MouseEvent, MouseKind};
use crate::mapping::CodeMapper;
use crate::raw::{EventSource, RawMouseEvent};
use crate::responder::ResponderState;

/// Normalizes raw pointer notifications.
#[derive(Debug, Default)]
pub struct MouseTranslator;

impl MouseTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate one raw pointer notification, or suppress it.
    ///
    /// Suppression is silent and side-effect free: events for unavailable
    /// buttons and drags that moved nowhere produce nothing and leave the
    /// session state untouched.
    pub fn translate<M: CodeMapper, C: ToolkitContext>(
        &self,
        raw: &RawMouseEvent,
        source: EventSource,
        state: &mut ResponderState,
        mapper: &M,
        context: &C,
        when: u64,
    ) -> Option<MouseEvent> {
        if (raw.button_number > 2 && !context.extra_buttons_enabled())
            || raw.button_number > context.button_count() - 1
        {
            log::trace!("dropping pointer event for unavailable button {}", raw.button_number);
            return None;
        }

        let kind = mapper.mouse_kind(raw.native_kind, source);

        let dragged = kind == MouseKind::Dragged;
        if dragged
            && state.last_drag_abs_x == raw.abs_x
            && state.last_drag_rel_x == raw.x
            && state.last_drag_abs_y == raw.abs_y
            && state.last_drag_rel_y == raw.y
        {
            // Platforms repeat the drag callback without any motion.
            return None;
        }

        if dragged || kind == MouseKind::Pressed {
            state.last_drag_abs_x = raw.abs_x;
            state.last_drag_abs_y = raw.abs_y;
            state.last_drag_rel_x = raw.x;
            state.last_drag_rel_y = raw.y;
        }

        let mut button = MouseButton::None;
        let mut click_count = 0;

        if kind.carries_button() {
            button = mapper.button(raw.button_number);
            click_count = raw.click_count;
        }

        let mut modifiers = mapper.modifiers(raw.native_modifiers);
        if kind == MouseKind::Pressed && button != MouseButton::None {
            // Tap-derived trackpad presses can arrive with no button bit in
            // the native flags; latch the button's own mask explicitly.
            modifiers |= mapper.button_mask(button);
        }

        let popup_trigger = mapper.is_popup_trigger(modifiers);

        Some(MouseEvent {
            kind,
            when,
            button,
            x: raw.x,
            y: raw.y,
            abs_x: raw.abs_x,
            abs_y: raw.abs_y,
            modifiers,
            click_count,
            popup_trigger,
        })
    }
}
