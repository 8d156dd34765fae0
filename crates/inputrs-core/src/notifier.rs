// Inputrs Notifier Boundary
// Downstream event pipeline consumed as a collaborator

use crate::event::{FocusEvent, KeyEvent, MouseEvent, WheelEvent};

/// Sink for normalized events.
///
/// The translator calls exactly one method per emitted event, in the order
/// the triggering raw events arrived. Implementations are expected to hand
/// events to the UI dispatch pipeline; they must not call back into the
/// responder that invoked them.
pub trait EventNotifier {
    fn notify_mouse(&mut self, event: MouseEvent);
    fn notify_wheel(&mut self, event: WheelEvent);
    fn notify_key(&mut self, event: KeyEvent);
    fn notify_focus(&mut self, event: FocusEvent);
}
