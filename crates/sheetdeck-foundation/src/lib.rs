//! Input model and gesture recognition for SheetDeck.
//!
//! The pager consumes a raw pointer-event stream and has to decide, per
//! stream, whether the gesture is a horizontal page drag (claimed) or
//! belongs to the content of the frontmost panel (passed through). The
//! pieces of that decision live here: the event vocabulary, the touch-slop
//! constants, instantaneous velocity estimation, and the axis-lock
//! recognizer itself.

pub mod gesture_constants;
pub mod pointer;
pub mod recognizer;
pub mod velocity;

pub use pointer::{PointerEvent, PointerEventKind, PointerPhase};
pub use recognizer::GestureRecognizer;
pub use velocity::VelocityTracker;

pub mod prelude {
    pub use super::pointer::{PointerEvent, PointerEventKind, PointerPhase};
    pub use super::recognizer::GestureRecognizer;
    pub use super::velocity::VelocityTracker;
}
