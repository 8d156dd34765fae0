// Inputrs Scroll Translation
// Scroll-phase state machine and fractional delta accumulation

use smallvec::SmallVec;

use crate::event::{ScrollType, WheelEvent};
use crate::mapping::CodeMapper;
use crate::modifiers::Modifiers;
use crate::raw::{RawScrollEvent, ScrollPhase};
use crate::responder::ResponderState;

/// Converts a stream of fractional deltas into integer notch counts.
///
/// Trackpads report long runs of sub-unit deltas; rounding each one in
/// isolation would either drop motion or overshoot. The accumulator carries
/// the rounding remainder forward across calls so the emitted notches always
/// track the true running total.
#[derive(Debug, Clone, Default)]
pub struct DeltaAccumulator {
    residual: f64,
    accumulating: bool,
}

impl DeltaAccumulator {
    /// Create an idle accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Round one delta under the given phase, updating the carried residual.
    ///
    /// Discrete wheels (`Unsupported` phase) bypass accumulation entirely: a
    /// non-zero delta always yields at least one signed notch. Gesture input
    /// accumulates from `Began` (residual cleared) or `MomentumBegan`
    /// (residual kept) until `Ended`.
    pub fn rounded_delta(&mut self, delta: f64, phase: ScrollPhase) -> i32 {
        let mut rounded = delta.round() as i32;

        if phase == ScrollPhase::Unsupported {
            if rounded == 0 && delta != 0.0 {
                rounded = if delta > 0.0 { 1 } else { -1 };
            }
        } else {
            if phase == ScrollPhase::Began {
                self.residual = 0.0;
                self.accumulating = true;
            } else if phase == ScrollPhase::MomentumBegan {
                self.accumulating = true;
            }

            if self.accumulating {
                self.residual += delta;
                rounded = self.residual.round() as i32;
                self.residual -= f64::from(rounded);

                if phase == ScrollPhase::Ended {
                    self.accumulating = false;
                }
            }
        }

        rounded
    }
}

/// Normalizes scroll notifications into wheel events.
///
/// Owns one accumulator per axis; the momentum position/modifier cache lives
/// in [`ResponderState`] because it is shared session state.
#[derive(Debug, Default)]
pub struct ScrollTranslator {
    accumulator_x: DeltaAccumulator,
    accumulator_y: DeltaAccumulator,
}

impl ScrollTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one raw scroll notification into zero, one or two wheel
    /// events (vertical and/or horizontal).
    pub fn translate<M: CodeMapper>(
        &mut self,
        raw: &RawScrollEvent,
        state: &mut ResponderState,
        mapper: &M,
        when: u64,
    ) -> SmallVec<[WheelEvent; 2]> {
        let mut x = raw.x;
        let mut y = raw.y;
        let mut modifiers = mapper.modifiers(raw.native_modifiers);

        if raw.phase.is_gesture() {
            match raw.phase {
                ScrollPhase::Began => {
                    state.momentum_active = false;
                }
                ScrollPhase::MomentumBegan => {
                    state.momentum_active = true;
                    state.momentum_x = x;
                    state.momentum_y = y;
                    state.momentum_modifiers = modifiers;
                }
                _ => {
                    // Momentum ticks report the coordinates the gesture had
                    // when the fingers lifted; the cache preserves the real
                    // position at momentum start.
                    if state.momentum_active {
                        x = state.momentum_x;
                        y = state.momentum_y;
                        modifiers = state.momentum_modifiers;
                    }
                }
            }
        }

        let shift = modifiers.contains(Modifiers::SHIFT);

        let rounded_x = self.accumulator_x.rounded_delta(raw.delta_x, raw.phase);
        let rounded_y = self.accumulator_y.rounded_delta(raw.delta_y, raw.phase);

        let mut events = SmallVec::new();

        // Vertical scroll.
        if !shift && (raw.delta_y != 0.0 || rounded_y != 0) {
            events.push(wheel_event(raw, x, y, modifiers, rounded_y, raw.delta_y, when));
        }

        // Horizontal scroll, or shift+vertical scroll swapped onto the
        // horizontal axis. The swap reuses the vertical accumulator's notch
        // so shift does not change scroll granularity mid-gesture.
        let delta = if shift && raw.delta_y != 0.0 {
            raw.delta_y
        } else {
            raw.delta_x
        };
        let rounded = if shift && rounded_y != 0 {
            rounded_y
        } else {
            rounded_x
        };
        if delta != 0.0 || rounded != 0 {
            let modifiers = modifiers | Modifiers::SHIFT;
            events.push(wheel_event(raw, x, y, modifiers, rounded, delta, when));
        }

        events
    }
}

/// Build one wheel event, inverting the native scroll sign for the
/// normalized convention.
fn wheel_event(
    raw: &RawScrollEvent,
    x: i32,
    y: i32,
    modifiers: Modifiers,
    rounded: i32,
    delta: f64,
    when: u64,
) -> WheelEvent {
    WheelEvent {
        when,
        x,
        y,
        abs_x: raw.abs_x,
        abs_y: raw.abs_y,
        modifiers,
        scroll_type: ScrollType::Unit,
        scroll_amount: 1,
        notches: -rounded,
        fractional_delta: -delta,
    }
}
