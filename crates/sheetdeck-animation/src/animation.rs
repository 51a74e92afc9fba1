//! Easing curves and animation specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic decelerate: fast at the start, velocity approaching zero at
    /// the end. `f(t) = 1 - (1 - t)^2`.
    Decelerate,
    /// Cubic ease-out.
    EaseOut,
    /// Fast out, slow in (material design standard curve).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::Decelerate => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse
            }
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier easing solved by bisection on the x component.
///
/// Bezier x is monotonic in `t` for the control points we use (x1, x2 within
/// [0, 1]), so bisection converges; 20 iterations give well under 1e-5 of
/// error, plenty for animation fractions.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        // Cubic bezier with endpoints fixed at 0 and 1.
        let inverse = 1.0 - t;
        3.0 * inverse * inverse * t * p1 + 3.0 * inverse * t * t * p2 + t * t * t
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut t = fraction;
    for _ in 0..20 {
        if sample(x1, x2, t) > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }
    sample(y1, y2, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub const fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub const fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Eased fraction for `elapsed_millis` into the animation, clamped to
    /// the final value once the duration is exceeded. A zero duration snaps
    /// straight to 1.
    pub fn fraction_at(&self, elapsed_millis: u64) -> f32 {
        if self.duration_millis == 0 {
            return 1.0;
        }
        let linear = (elapsed_millis as f32 / self.duration_millis as f32).clamp(0.0, 1.0);
        self.easing.transform(linear)
    }

    /// Whether the animation has run its full duration at `elapsed_millis`.
    pub fn is_finished_at(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.duration_millis
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
