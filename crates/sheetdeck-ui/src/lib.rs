//! The SheetDeck pager widget.
//!
//! A stack of full-size panels with exactly one frontmost; a horizontal drag
//! crossfades/scales between adjacent panels, tracking the finger, and an
//! eased settle animation finishes the transition on release.
//!
//! The decision logic is split out as pure functions over an explicit
//! [`PagerState`] (displacement mapping in [`pager::drag`], the
//! velocity/position commit rule in [`pager::commit`]), while
//! [`SheetPager`] owns the event dispatch, the gesture claim, and the
//! frame-clock-driven settle animation.

pub mod pager;
pub mod render;
pub mod style;

mod sheet_pager;

pub use pager::commit::{decide, FLING_COMMIT_VELOCITY};
pub use pager::state::{PagerMode, PagerState};
pub use render::{
    back_panel_scale, front_panel_offset, resolve_shade_color, RenderScene, TransitionFrame,
};
pub use sheet_pager::{SheetPager, SETTLE_SPEC};
pub use style::SheetStyle;
