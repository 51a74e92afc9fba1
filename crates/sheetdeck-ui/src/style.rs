use sheetdeck_foundation::gesture_constants::{MAX_FLING_VELOCITY, TOUCH_SLOP};
use sheetdeck_graphics::Color;

/// Immutable per-instance configuration for a [`SheetPager`].
///
/// Resolved once at construction; the pager never mutates it.
///
/// [`SheetPager`]: crate::SheetPager
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    /// Distance a pointer must travel before a drag can claim the stream.
    pub touch_slop: f32,
    /// Clamp applied to velocity estimates before the commit decision.
    pub max_fling_velocity: f32,
    /// Shade drawn over the receding back panel; its alpha is scaled by the
    /// transition progress.
    pub shade_color: Color,
    /// Scale of the back panel at full progress, in (0, 1].
    pub min_scale: f32,
}

impl SheetStyle {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    pub fn with_shade_color(mut self, shade_color: Color) -> Self {
        self.shade_color = shade_color;
        self
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            max_fling_velocity: MAX_FLING_VELOCITY,
            shade_color: Color::TRANSPARENT,
            min_scale: 0.5,
        }
    }
}
