// Inputrs Trace CLI
// Replays raw-event scenarios through the translator and prints the
// normalized stream, for inspecting translation behavior off-device

use std::path::PathBuf;

use clap::Parser;

use inputrs_core::{
    CodeMapper, EventNotifier, EventSource, FocusEvent, KeyCode, KeyEvent, KeyInfo, KeyInfoQuery,
    KeyKind, KeyLocation, Modifiers, ModifierKeyInfo, MouseButton, MouseEvent, MouseKind,
    RawKeyEvent, RawMouseEvent, RawScrollEvent, Responder, ScrollPhase, Settings, WheelEvent,
};

/// Replay raw input scenarios through the event translator
#[derive(Parser, Debug)]
#[command(name = "inputrs-trace")]
#[command(about = "Replay raw input scenarios through the event translator", long_about = None)]
struct Args {
    /// TOML scenario file; a built-in demo runs when omitted
    #[arg(short, long, value_name = "SCENARIO")]
    scenario: Option<PathBuf>,

    /// Settings file overriding the default lookup path
    #[arg(short = 'c', long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Errors that can occur while loading a scenario
#[derive(Debug, thiserror::Error)]
enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

// Native event-kind codes of the demo tables.
const DEMO_MOVED: u32 = 1;
const DEMO_PRESSED: u32 = 2;
const DEMO_RELEASED: u32 = 3;
const DEMO_DRAGGED: u32 = 4;
const DEMO_KEY_DOWN: u32 = 10;
const DEMO_KEY_UP: u32 = 11;
const DEMO_FLAGS_CHANGED: u32 = 12;

/// Demo lookup tables. Stands in for the platform layer; real embeddings
/// supply their own tables.
struct DemoMapper;

impl CodeMapper for DemoMapper {
    fn mouse_kind(&self, native_kind: u32, _source: EventSource) -> MouseKind {
        match native_kind {
            DEMO_PRESSED => MouseKind::Pressed,
            DEMO_RELEASED => MouseKind::Released,
            DEMO_DRAGGED => MouseKind::Dragged,
            5 => MouseKind::Entered,
            6 => MouseKind::Exited,
            _ => MouseKind::Moved,
        }
    }

    fn key_kind(&self, native_kind: u32, _source: EventSource) -> KeyKind {
        if native_kind == DEMO_KEY_UP {
            KeyKind::Released
        } else {
            KeyKind::Pressed
        }
    }

    fn is_modifier_change(&self, native_kind: u32, _source: EventSource) -> bool {
        native_kind == DEMO_FLAGS_CHANGED
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

    fn char_for(&self, raw: char, _native_modifiers: u64, _space_typed: bool) -> Option<char> {
        if raw.is_control() && raw != '\r' && raw != '\n' && raw != '\t' {
            None
        } else {
            Some(raw)
        }
    }

    fn key_info(&self, query: KeyInfoQuery) -> KeyInfo {
        KeyInfo {
            key_code: KeyCode(query.native_key_code),
            location: KeyLocation::Standard,
            posts_typed: true,
            dead_char: None,
        }
    }

    fn modifier_key_info(&self, _native_modifiers: u64, native_key_code: u16) -> ModifierKeyInfo {
        ModifierKeyInfo {
            key_code: KeyCode(native_key_code),
            location: KeyLocation::Left,
            kind: KeyKind::Pressed,
        }
    }
}

/// Prints every normalized event on stdout.
struct PrintNotifier {
    count: usize,
}

impl EventNotifier for PrintNotifier {
    fn notify_mouse(&mut self, event: MouseEvent) {
        self.count += 1;
        println!(
            "mouse  {:?} {} at ({}, {}) abs ({}, {}) clicks={} mods={:?} popup={}",
            event.kind,
            event.button,
            event.x,
            event.y,
            event.abs_x,
            event.abs_y,
            event.click_count,
            event.modifiers,
            event.popup_trigger
        );
    }

    fn notify_wheel(&mut self, event: WheelEvent) {
        self.count += 1;
        println!(
            "wheel  {} notches ({:.3} precise) at ({}, {}) mods={:?}",
            event.notches, event.fractional_delta, event.x, event.y, event.modifiers
        );
    }

    fn notify_key(&mut self, event: KeyEvent) {
        self.count += 1;
        println!(
            "key    {:?} code={} char={:?} location={} mods={:?}",
            event.kind, event.key_code, event.character, event.location, event.modifiers
        );
    }

    fn notify_focus(&mut self, event: FocusEvent) {
        self.count += 1;
        println!(
            "focus  gained={} opposite={:?}",
            event.gained, event.opposite
        );
    }
}

/// One scenario entry, tagged by event category.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ScenarioEvent {
    Mouse {
        kind: String,
        #[serde(default)]
        button: i32,
        #[serde(default)]
        clicks: i32,
        x: i32,
        y: i32,
        #[serde(default)]
        modifiers: u64,
    },
    Scroll {
        phase: String,
        #[serde(default)]
        delta_x: f64,
        #[serde(default)]
        delta_y: f64,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        modifiers: u64,
    },
    Key {
        kind: String,
        #[serde(default)]
        chars: Option<String>,
        #[serde(default)]
        chars_ignoring: Option<String>,
        #[serde(default)]
        code: u16,
        #[serde(default)]
        modifiers: u64,
    },
    Commit {
        text: String,
    },
    Focus {
        gained: bool,
    },
}

#[derive(Debug, serde::Deserialize)]
struct Scenario {
    #[serde(default)]
    events: Vec<ScenarioEvent>,
}

impl Scenario {
    fn from_file(path: &PathBuf) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScenarioError::TomlParse(e.to_string()))
    }

    /// Short demo: click-drag, a flick with momentum, and some typing.
    fn demo() -> Self {
        let events = vec![
            ScenarioEvent::Mouse {
                kind: "pressed".into(),
                button: 0,
                clicks: 1,
                x: 40,
                y: 40,
                modifiers: 0,
            },
            ScenarioEvent::Mouse {
                kind: "dragged".into(),
                button: 0,
                clicks: 0,
                x: 40,
                y: 40,
                modifiers: 0,
            },
            ScenarioEvent::Mouse {
                kind: "dragged".into(),
                button: 0,
                clicks: 0,
                x: 48,
                y: 44,
                modifiers: 0,
            },
            ScenarioEvent::Mouse {
                kind: "released".into(),
                button: 0,
                clicks: 1,
                x: 48,
                y: 44,
                modifiers: 0,
            },
            ScenarioEvent::Scroll {
                phase: "began".into(),
                delta_x: 0.0,
                delta_y: 0.4,
                x: 48,
                y: 44,
                modifiers: 0,
            },
            ScenarioEvent::Scroll {
                phase: "changed".into(),
                delta_x: 0.0,
                delta_y: 0.8,
                x: 48,
                y: 45,
                modifiers: 0,
            },
            ScenarioEvent::Scroll {
                phase: "ended".into(),
                delta_x: 0.0,
                delta_y: 0.4,
                x: 48,
                y: 46,
                modifiers: 0,
            },
            ScenarioEvent::Key {
                kind: "down".into(),
                chars: Some("h".into()),
                chars_ignoring: Some("h".into()),
                code: 4,
                modifiers: 0,
            },
            ScenarioEvent::Key {
                kind: "up".into(),
                chars: Some("h".into()),
                chars_ignoring: Some("h".into()),
                code: 4,
                modifiers: 0,
            },
            ScenarioEvent::Commit { text: "嗨".into() },
            ScenarioEvent::Focus { gained: false },
        ];
        Self { events }
    }
}

fn mouse_kind_code(kind: &str) -> u32 {
    match kind {
        "pressed" => DEMO_PRESSED,
        "released" => DEMO_RELEASED,
        "dragged" => DEMO_DRAGGED,
        "entered" => 5,
        "exited" => 6,
        _ => DEMO_MOVED,
    }
}

fn key_kind_code(kind: &str) -> u32 {
    match kind {
        "up" => DEMO_KEY_UP,
        "flags" => DEMO_FLAGS_CHANGED,
        _ => DEMO_KEY_DOWN,
    }
}

fn scroll_phase(name: &str) -> ScrollPhase {
    match name {
        "began" => ScrollPhase::Began,
        "changed" => ScrollPhase::Changed,
        "momentum-began" => ScrollPhase::MomentumBegan,
        "momentum-changed" => ScrollPhase::MomentumChanged,
        "ended" => ScrollPhase::Ended,
        _ => ScrollPhase::Unsupported,
    }
}

fn run(scenario: Scenario, settings: Settings) -> usize {
    let notifier = PrintNotifier { count: 0 };
    let mut responder = Responder::new(notifier, DemoMapper, settings);

    for entry in scenario.events {
        match entry {
            ScenarioEvent::Mouse {
                kind,
                button,
                clicks,
                x,
                y,
                modifiers,
            } => responder.mouse_event(RawMouseEvent {
                native_kind: mouse_kind_code(&kind),
                native_modifiers: modifiers,
                button_number: button,
                click_count: clicks,
                x,
                y,
                abs_x: x,
                abs_y: y,
            }),
            ScenarioEvent::Scroll {
                phase,
                delta_x,
                delta_y,
                x,
                y,
                modifiers,
            } => responder.scroll_event(RawScrollEvent {
                x,
                y,
                abs_x: x,
                abs_y: y,
                native_modifiers: modifiers,
                delta_x,
                delta_y,
                phase: scroll_phase(&phase),
            }),
            ScenarioEvent::Key {
                kind,
                chars,
                chars_ignoring,
                code,
                modifiers,
            } => responder.key_event(RawKeyEvent {
                native_kind: key_kind_code(&kind),
                native_modifiers: modifiers,
                committed_chars: chars,
                chars_ignoring_modifiers: chars_ignoring,
                native_key_code: code,
                needs_synthetic_typed: true,
                needs_synthetic_released: false,
            }),
            ScenarioEvent::Commit { text } => responder.commit_text(&text),
            ScenarioEvent::Focus { gained } => responder.focus_event(gained, None),
        }
    }

    responder.notifier().count
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();

    let settings = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load_default()?,
    };

    let scenario = match &args.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => {
            log::info!("no scenario given, running built-in demo");
            Scenario::demo()
        }
    };

    let delivered = run(scenario, settings);
    println!("{} normalized event(s) delivered", delivered);
    Ok(())
}
