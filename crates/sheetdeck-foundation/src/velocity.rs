use smallvec::SmallVec;

use crate::pointer::{PointerEvent, PointerEventKind};

/// Samples older than this (relative to the newest sample) are ignored when
/// estimating velocity. An old sample from the start of a long drag says
/// nothing about how fast the finger was moving at release.
const HORIZON_MILLIS: u64 = 100;

/// Upper bound on retained samples; older ones are evicted.
const MAX_SAMPLES: usize = 20;

#[derive(Clone, Copy, Debug)]
struct Sample {
    x: f32,
    timestamp_millis: u64,
}

/// Estimates instantaneous horizontal velocity from recent pointer samples.
///
/// Feed it every event of the active gesture with [`add_movement`] and ask
/// for [`x_velocity`] at release time. A fresh `Down` discards the previous
/// gesture's samples; nothing is retained across gestures.
///
/// [`add_movement`]: VelocityTracker::add_movement
/// [`x_velocity`]: VelocityTracker::x_velocity
#[derive(Default, Debug)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; MAX_SAMPLES]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movement(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.samples.clear();
                self.push(event);
            }
            PointerEventKind::Move | PointerEventKind::Up => self.push(event),
            PointerEventKind::Cancel => {}
        }
    }

    fn push(&mut self, event: &PointerEvent) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample {
            x: event.position.x,
            timestamp_millis: event.timestamp_millis,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Horizontal velocity in pixels per second, clamped to
    /// `±max_velocity`.
    ///
    /// Returns 0.0 when fewer than two samples fall inside the horizon; a
    /// synthesized release without prior moves must read as "no fling".
    pub fn x_velocity(&self, max_velocity: f32) -> f32 {
        let Some(newest) = self.samples.last() else {
            return 0.0;
        };
        let cutoff = newest.timestamp_millis.saturating_sub(HORIZON_MILLIS);
        let window: SmallVec<[&Sample; MAX_SAMPLES]> = self
            .samples
            .iter()
            .filter(|sample| sample.timestamp_millis >= cutoff)
            .collect();

        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return 0.0;
        };
        let elapsed_millis = last.timestamp_millis.saturating_sub(first.timestamp_millis);
        if elapsed_millis == 0 {
            return 0.0;
        }

        let velocity = (last.x - first.x) / elapsed_millis as f32 * 1_000.0;
        velocity.clamp(-max_velocity, max_velocity)
    }
}

#[cfg(test)]
#[path = "tests/velocity_tests.rs"]
mod tests;
