//! Runtime services for SheetDeck.
//!
//! The only service the pager needs from its host is a frame clock: a way to
//! ask "call me back on the next frame with the frame time". The host (event
//! loop, test harness, demo binary) pumps the clock with
//! [`FrameClock::drain_frame_callbacks`]; everything stays on one thread.

mod frame_clock;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
