// Inputrs Responder
// Orchestrates the translators and owns the cross-call session state

use std::time::{SystemTime, UNIX_EPOCH};

use crate::context::ToolkitContext;
use crate::event::WindowId;
use crate::keycode::KeyCode;
use crate::mapping::CodeMapper;
use crate::modifiers::Modifiers;
use crate::notifier::EventNotifier;
use crate::raw::{EventSource, RawKeyEvent, RawMouseEvent, RawScrollEvent};
use crate::translate::{FocusTranslator, KeyTranslator, MouseTranslator, ScrollTranslator};

/// Session state retained between translate calls.
///
/// One instance per native window/connection, owned by its [`Responder`] and
/// mutated only on the serialized delivery thread. Updated only after a
/// translation decision is final; rejected events leave it untouched.
#[derive(Debug, Clone)]
pub struct ResponderState {
    /// Key code of the most recent Pressed event
    pub last_pressed_key_code: KeyCode,
    /// Position of the last drag or press, for drag dedup
    pub last_drag_abs_x: i32,
    pub last_drag_abs_y: i32,
    pub last_drag_rel_x: i32,
    pub last_drag_rel_y: i32,
    /// Whether a trackpad momentum phase is in progress
    pub momentum_active: bool,
    /// Pointer position and modifiers snapshotted at momentum start
    pub momentum_x: i32,
    pub momentum_y: i32,
    pub momentum_modifiers: Modifiers,
}

impl Default for ResponderState {
    fn default() -> Self {
        Self {
            last_pressed_key_code: KeyCode::UNDEFINED,
            last_drag_abs_x: 0,
            last_drag_abs_y: 0,
            last_drag_rel_x: 0,
            last_drag_rel_y: 0,
            momentum_active: false,
            momentum_x: 0,
            momentum_y: 0,
            momentum_modifiers: Modifiers::empty(),
        }
    }
}

/// Translates native input notifications into normalized events.
///
/// One entry point per native event category; normalized events are
/// delivered through the notifier in call order. All calls for one
/// responder must come from the same native-event-delivery thread; the
/// responder holds no locks and never blocks.
pub struct Responder<N, M, C> {
    notifier: N,
    mapper: M,
    context: C,
    source: EventSource,
    state: ResponderState,
    mouse: MouseTranslator,
    scroll: ScrollTranslator,
    keys: KeyTranslator,
    focus: FocusTranslator,
}

impl<N, M, C> Responder<N, M, C>
where
    N: EventNotifier,
    M: CodeMapper,
    C: ToolkitContext,
{
    /// Create a responder for events from the platform's own delivery loop.
    pub fn new(notifier: N, mapper: M, context: C) -> Self {
        Self::with_source(notifier, mapper, context, EventSource::Native)
    }

    /// Create a responder for the given embedding context.
    pub fn with_source(notifier: N, mapper: M, context: C, source: EventSource) -> Self {
        Self {
            notifier,
            mapper,
            context,
            source,
            state: ResponderState::default(),
            mouse: MouseTranslator::new(),
            scroll: ScrollTranslator::new(),
            keys: KeyTranslator::new(),
            focus: FocusTranslator::new(),
        }
    }

    /// Handle a raw pointer notification.
    pub fn mouse_event(&mut self, raw: RawMouseEvent) {
        let when = now_millis();
        if let Some(event) = self.mouse.translate(
            &raw,
            self.source,
            &mut self.state,
            &self.mapper,
            &self.context,
            when,
        ) {
            self.notifier.notify_mouse(event);
        }
    }

    /// Handle a raw scroll notification.
    pub fn scroll_event(&mut self, raw: RawScrollEvent) {
        let when = now_millis();
        let events = self
            .scroll
            .translate(&raw, &mut self.state, &self.mapper, when);
        for event in events {
            self.notifier.notify_wheel(event);
        }
    }

    /// Handle a raw keyboard notification.
    pub fn key_event(&mut self, raw: RawKeyEvent) {
        let when = now_millis();
        let events = self.keys.translate(
            &raw,
            self.source,
            &mut self.state,
            &self.mapper,
            &self.context,
            when,
        );
        for event in events {
            self.notifier.notify_key(event);
        }
    }

    /// Handle text committed by the input method.
    pub fn commit_text(&mut self, text: &str) {
        let when = now_millis();
        let events = self.keys.commit_text(text, &self.state, when);
        for event in events {
            self.notifier.notify_key(event);
        }
    }

    /// Handle a window activation change.
    pub fn focus_event(&mut self, gained: bool, opposite: Option<WindowId>) {
        let event = self.focus.translate(gained, opposite);
        self.notifier.notify_focus(event);
    }

    /// Current session state, for inspection.
    pub fn state(&self) -> &ResponderState {
        &self.state
    }

    /// The notifier this responder delivers to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the toolkit context, for live updates (lock state,
    /// layout changes) from the delivery thread.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

/// Wall-clock timestamp for outgoing events.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyKind;
    use crate::raw::ScrollPhase;
    use crate::testsupport::{
        Notified, RecordingNotifier, StubMapper, TestContext, KIND_DRAGGED, KIND_KEY_DOWN,
        KIND_PRESSED,
    };

    fn responder() -> Responder<RecordingNotifier, StubMapper, TestContext> {
        Responder::new(
            RecordingNotifier::default(),
            StubMapper::new(),
            TestContext::default(),
        )
    }

    fn raw_mouse(native_kind: u32, x: i32, y: i32) -> RawMouseEvent {
        RawMouseEvent {
            native_kind,
            native_modifiers: 0,
            button_number: 0,
            click_count: 1,
            x,
            y,
            abs_x: x + 100,
            abs_y: y + 200,
        }
    }

    fn raw_key(chars: &str) -> RawKeyEvent {
        RawKeyEvent {
            native_kind: KIND_KEY_DOWN,
            native_modifiers: 0,
            committed_chars: Some(chars.to_string()),
            chars_ignoring_modifiers: Some(chars.to_string()),
            native_key_code: 4,
            needs_synthetic_typed: true,
            needs_synthetic_released: false,
        }
    }

    #[test]
    fn test_events_delivered_in_call_order() {
        let mut responder = responder();
        responder.mouse_event(raw_mouse(KIND_PRESSED, 1, 1));
        responder.scroll_event(RawScrollEvent {
            x: 0,
            y: 0,
            abs_x: 0,
            abs_y: 0,
            native_modifiers: 0,
            delta_x: 0.0,
            delta_y: 1.0,
            phase: ScrollPhase::Unsupported,
        });
        responder.focus_event(true, None);

        assert_eq!(responder.notifier().events.len(), 3);
        assert!(matches!(responder.notifier().events[0], Notified::Mouse(_)));
        assert!(matches!(responder.notifier().events[1], Notified::Wheel(_)));
        assert!(matches!(responder.notifier().events[2], Notified::Focus(_)));
    }

    #[test]
    fn test_drag_dedup_across_calls() {
        let mut responder = responder();
        responder.mouse_event(raw_mouse(KIND_DRAGGED, 5, 5));
        responder.mouse_event(raw_mouse(KIND_DRAGGED, 5, 5));
        assert_eq!(responder.notifier().events.len(), 1);
    }

    #[test]
    fn test_key_press_records_last_pressed() {
        let mut responder = responder();
        responder.key_event(raw_key("a"));
        assert_eq!(responder.state().last_pressed_key_code, KeyCode(4));
    }

    #[test]
    fn test_commit_uses_last_pressed_key_code() {
        let mut responder = responder();
        responder.key_event(raw_key("x"));
        let before = responder.notifier().events.len();

        responder.commit_text("hi");
        let keys: Vec<_> = responder.notifier().events[before..]
            .iter()
            .map(|n| match n {
                Notified::Key(k) => k.clone(),
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].kind, KeyKind::Typed);
        assert_eq!(keys[0].character, Some('h'));
        assert_eq!(keys[1].character, Some('i'));
        assert_eq!(keys[2].kind, KeyKind::Released);
        assert_eq!(keys[2].key_code, KeyCode(4));
        assert_eq!(keys[2].character, Some('i'));
    }

    #[test]
    fn test_commit_empty_emits_nothing() {
        let mut responder = responder();
        responder.commit_text("");
        assert!(responder.notifier().events.is_empty());
    }

    #[test]
    fn test_focus_event_unconditional() {
        let mut responder = responder();
        responder.focus_event(false, Some(WindowId(9)));
        match &responder.notifier().events[0] {
            Notified::Focus(f) => {
                assert!(!f.gained);
                assert_eq!(f.opposite, Some(WindowId(9)));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_separate_responders_do_not_share_state() {
        let mut first = responder();
        let mut second = responder();

        first.mouse_event(raw_mouse(KIND_DRAGGED, 5, 5));
        // The same position through a different responder is not a duplicate.
        second.mouse_event(raw_mouse(KIND_DRAGGED, 5, 5));
        assert_eq!(first.notifier().events.len(), 1);
        assert_eq!(second.notifier().events.len(), 1);
    }
}
