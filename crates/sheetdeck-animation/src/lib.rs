//! Time-based animation primitives for SheetDeck.
//!
//! Only the declarative half of an animation lives here: what curve, how
//! long. The driver that turns frame times into progress values sits next to
//! the state it mutates (see the pager's transition animator).

mod animation;

pub use animation::{AnimationSpec, Easing, Lerp};
