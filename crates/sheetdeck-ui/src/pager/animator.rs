use sheetdeck_animation::{AnimationSpec, Lerp};
use sheetdeck_core::FrameCallbackRegistration;

use super::state::PagerState;

/// Tween bookkeeping for the settle animation.
///
/// This is the timing half of the transition animator: it turns frame times
/// into progress values and says when the tween is done. The scheduling half
/// (arming frame callbacks, mutating the pager, repainting) lives in
/// `SheetPager`, which drives this through [`tick`].
///
/// [`tick`]: TransitionAnimator::tick
#[derive(Default)]
pub struct TransitionAnimator {
    active: Option<ActiveAnimation>,
}

struct ActiveAnimation {
    from: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_millis: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

/// One frame of a running settle animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorTick {
    pub progress: f32,
    pub target: f32,
    pub finished: bool,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|active| active.target)
    }

    /// Start a tween from `from` to `target`. Any previous animation is
    /// discarded along with its pending frame callback.
    pub fn begin(&mut self, from: f32, target: f32, spec: AnimationSpec) {
        log::trace!("settle animation: {from:.3} -> {target} over {}ms", spec.duration_millis);
        self.active = Some(ActiveAnimation {
            from,
            target,
            spec,
            start_time_millis: None,
            registration: None,
        });
    }

    /// Keep the next-frame callback alive; dropping the previous handle
    /// cancels it, so re-arming per tick never leaks callbacks.
    pub fn hold_registration(&mut self, registration: FrameCallbackRegistration) {
        if let Some(active) = self.active.as_mut() {
            active.registration = Some(registration);
        }
    }

    /// Advance to `time_millis`. The first tick anchors the start time, so
    /// the tween runs a full duration from its first frame. Returns `None`
    /// when no animation is running. A finished tick clears the animation.
    pub fn tick(&mut self, time_millis: u64) -> Option<AnimatorTick> {
        let active = self.active.as_mut()?;
        active.registration = None;
        let start = *active.start_time_millis.get_or_insert(time_millis);
        let elapsed = time_millis.saturating_sub(start);

        let fraction = active.spec.fraction_at(elapsed);
        let finished = active.spec.is_finished_at(elapsed);
        let tick = AnimatorTick {
            progress: if finished {
                active.target
            } else {
                active.from.lerp(&active.target, fraction)
            },
            target: active.target,
            finished,
        };
        if finished {
            self.active = None;
        }
        Some(tick)
    }

    /// Abort a running animation, returning its committed target so the
    /// caller can still route through the end transition. The pending frame
    /// callback is cancelled by dropping its registration.
    pub fn interrupt(&mut self) -> Option<f32> {
        self.active.take().map(|active| active.target)
    }
}

/// The end transition of a settle: adopt the winning panel as current and
/// return to idle. Target 0 keeps the back panel, anything else promotes
/// the front panel.
pub fn finalize_settle(state: &mut PagerState, target: f32) {
    state.current_index = if target < 0.5 {
        state.back_index
    } else {
        state.front_index
    };
    log::trace!("settled on panel {}", state.current_index);
    state.reset_transition();
}

#[cfg(test)]
#[path = "../tests/animator_tests.rs"]
mod tests;
