use sheetdeck_graphics::Point;

/// Horizontal-drag recognizer with axis lock and a sticky claim.
///
/// Decides whether a pointer stream belongs to the pager. The stream is
/// claimed on the first `Move` whose displacement from the press position is
/// horizontal-dominant and past the touch slop:
///
/// ```text
/// |dx| > touch_slop  &&  |dx| * 0.5 > |dy|
/// ```
///
/// Once claimed, the recognizer stays claimed until [`reset`]: a gesture
/// that started as a page drag cannot be handed back mid-stream. Whether a
/// claim is *allowed* at all (e.g. not while a settle animation runs) is the
/// caller's decision; the recognizer only does geometry.
///
/// [`reset`]: GestureRecognizer::reset
#[derive(Debug)]
pub struct GestureRecognizer {
    touch_slop: f32,
    initial: Option<Point>,
    claimed: bool,
}

impl GestureRecognizer {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            initial: None,
            claimed: false,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Whether a press has been observed for the current stream.
    pub fn is_tracking(&self) -> bool {
        self.initial.is_some()
    }

    /// Record the press position of a new stream. Implicitly resets any
    /// leftover state from a stream that never saw its End/Cancel.
    pub fn on_down(&mut self, position: Point) {
        self.initial = Some(position);
        self.claimed = false;
    }

    /// Feed a move; returns true exactly once, on the move that claims the
    /// stream. Later moves of a claimed stream return false (already
    /// claimed), as do moves that fail the axis-lock test.
    pub fn on_move(&mut self, position: Point) -> bool {
        if self.claimed {
            return false;
        }
        let Some(initial) = self.initial else {
            return false;
        };
        let dx = (position.x - initial.x).abs();
        let dy = (position.y - initial.y).abs();
        if dx > self.touch_slop && dx * 0.5 > dy {
            self.claimed = true;
            log::trace!("gesture claimed: dx={dx:.1} dy={dy:.1} slop={}", self.touch_slop);
            return true;
        }
        false
    }

    /// Horizontal displacement of `position` from the press position, or
    /// `None` if no press has been observed.
    pub fn displacement(&self, position: Point) -> Option<f32> {
        self.initial.map(|initial| position.x - initial.x)
    }

    /// Forget the current stream entirely.
    pub fn reset(&mut self) {
        self.initial = None;
        self.claimed = false;
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
