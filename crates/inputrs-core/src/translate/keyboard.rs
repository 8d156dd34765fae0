// Inputrs Keyboard Translation
// Key normalization: dead keys, layout quirks, Typed/Released synthesis

use smallvec::SmallVec;

use crate::context::ToolkitContext;
use crate::event::{KeyEvent, KeyKind};
use crate::keycode::{KeyCode, KeyLocation};
use crate::mapping::{CodeMapper, KeyInfoQuery};
use crate::modifiers::Modifiers;
use crate::raw::{EventSource, RawKeyEvent};
use crate::responder::ResponderState;

/// Layouts whose Caps Lock means "switch to Latin input".
///
/// Under these CJK phonetic input methods the committed characters reflect
/// the shifted form while the user expects plain Latin letters, so the
/// unmodified character must be delivered instead. Other phonetic layouts
/// (Zhuyin, for one) report their script in `chars_ignoring_modifiers` and
/// would break if included here.
pub const CAPS_LOCK_LATIN_LAYOUTS: &[&str] = &[
    "com.apple.inputmethod.SCIM.ITABC",
    "com.apple.inputmethod.SCIM.Pinyin",
    "com.apple.inputmethod.SCIM.Shuangpin",
    "com.apple.inputmethod.TCIM.ITABC",
    "com.apple.inputmethod.TCIM.Pinyin",
    "com.apple.inputmethod.TCIM.Shuangpin",
];

/// Normalizes raw keyboard notifications.
#[derive(Debug, Default)]
pub struct KeyTranslator;

impl KeyTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate one raw key notification.
    ///
    /// Always produces the primary Pressed/Released event. A Typed event
    /// (and, for callers that ask for it, a trailing Released) is
    /// synthesized when the press delivered a printable character.
    pub fn translate<M: CodeMapper, C: ToolkitContext>(
        &self,
        raw: &RawKeyEvent,
        source: EventSource,
        state: &mut ResponderState,
        mapper: &M,
        context: &C,
        when: u64,
    ) -> SmallVec<[KeyEvent; 3]> {
        let mut events = SmallVec::new();

        let kind;
        let key_code;
        let location;
        let mut posts_typed = false;
        let mut space_typed = false;
        let mut test_char: Option<char> = None;
        let dead = raw.is_dead();

        if mapper.is_modifier_change(raw.native_kind, source) {
            let info = mapper.modifier_key_info(raw.native_modifiers, raw.native_key_code);
            key_code = info.key_code;
            location = info.location;
            kind = info.kind;
        } else {
            if let Some(chars) = raw.committed_chars.as_deref() {
                if !chars.is_empty() {
                    // Dead-key composition can commit more than one character
                    // ("`s" for dead-grave + S); only the final composed
                    // character is reported for the keypress.
                    test_char = chars.chars().last();

                    if chars.trim().is_empty() {
                        space_typed = true;
                    }
                }
            }

            let char_ignoring_modifiers = raw
                .chars_ignoring_modifiers
                .as_deref()
                .and_then(|s| s.chars().next());

            let info = mapper.key_info(KeyInfoQuery {
                char_ignoring_modifiers,
                dead,
                native_modifiers: raw.native_modifiers,
                native_key_code: raw.native_key_code,
                national_layouts: context.national_layouts(),
            });

            posts_typed = info.posts_typed;
            if !posts_typed {
                test_char = None;
            }

            if dead {
                // A dead press with no standalone character is still
                // delivered: Option+E on the ABC layout produces a dead
                // accent while E alone is not dead, and dropping the event
                // here would lose the key press entirely.
                test_char = info.dead_char;
            }

            if test_char.is_some()
                && context.caps_lock_on()
                && CAPS_LOCK_LATIN_LAYOUTS.contains(&context.keyboard_layout_id())
            {
                test_char = char_ignoring_modifiers;
            }

            key_code = info.key_code;
            location = info.location;
            kind = mapper.key_kind(raw.native_kind, source);
        }

        let character =
            test_char.and_then(|c| mapper.char_for(c, raw.native_modifiers, space_typed));
        if character.is_none() {
            // Never synthesize a Typed event without a character to type.
            posts_typed = false;
        }

        let modifiers = mapper.modifiers(raw.native_modifiers);

        if kind == KeyKind::Pressed {
            state.last_pressed_key_code = key_code;
        }
        events.push(KeyEvent {
            kind,
            when,
            modifiers,
            key_code,
            character,
            location,
        });

        // The caller may be routing committed text itself.
        posts_typed &= raw.needs_synthetic_typed;

        // Typed synthesis reacts to the press, never the release, and
        // clipboard-style Meta shortcuts must not type anything.
        if kind == KeyKind::Pressed && posts_typed && !modifiers.contains(Modifiers::META) {
            if raw.needs_synthetic_released
                && (key_code == KeyCode::ENTER || key_code == KeyCode::SPACE)
            {
                // Enter and Space end input-method processing; their
                // Typed/Released pair comes from the commit path instead.
                return events;
            }
            events.push(KeyEvent {
                kind: KeyKind::Typed,
                when,
                modifiers,
                key_code: KeyCode::UNDEFINED,
                character,
                location: KeyLocation::Unknown,
            });
            if raw.needs_synthetic_released {
                events.push(KeyEvent {
                    kind: KeyKind::Released,
                    when,
                    modifiers,
                    key_code,
                    character,
                    location: KeyLocation::Unknown,
                });
            }
        }

        events
    }

    /// Translate an input-method commit into Typed events plus the final
    /// Released for the key press that finished the composition.
    ///
    /// An empty commit produces nothing.
    pub fn commit_text(
        &self,
        text: &str,
        state: &ResponderState,
        when: u64,
    ) -> SmallVec<[KeyEvent; 4]> {
        let mut events = SmallVec::new();
        if text.is_empty() {
            return events;
        }

        let mut last = None;
        for c in text.chars() {
            last = Some(c);
            events.push(KeyEvent {
                kind: KeyKind::Typed,
                when,
                modifiers: Modifiers::empty(),
                key_code: KeyCode::UNDEFINED,
                character: Some(c),
                location: KeyLocation::Unknown,
            });
        }
        events.push(KeyEvent {
            kind: KeyKind::Released,
            when,
            modifiers: Modifiers::empty(),
            key_code: state.last_pressed_key_code,
            character: last,
            location: KeyLocation::Unknown,
        });

        events
    }
}
