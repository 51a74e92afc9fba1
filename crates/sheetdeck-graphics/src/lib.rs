//! Pure geometry and color primitives shared by the SheetDeck crates.
//!
//! Nothing in here talks to a windowing system or a renderer; these are the
//! plain data types the pager state machine and its render adapter exchange.

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
