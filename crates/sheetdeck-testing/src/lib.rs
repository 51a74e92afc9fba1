//! Robot-style testing harness for SheetDeck.
//!
//! A [`SwipeRobot`] owns a pager, a manually pumped frame clock, and a
//! monotonically advancing timeline, and turns high-level intentions
//! ("slow swipe left", "fling right") into the raw pointer streams the
//! pager consumes. Integration tests drive the robot instead of
//! hand-assembling event sequences.
//!
//! ```
//! use sheetdeck_testing::SwipeRobot;
//!
//! let mut robot = SwipeRobot::new(3, 400.0);
//! robot.swipe_left_slow(0.7);
//! robot.settle();
//! assert_eq!(robot.pager().current_index(), 1);
//! ```

mod robot;

pub use robot::SwipeRobot;
