//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens these
//! would be scaled by the device's DPI factor; the defaults here match
//! common platform conventions for baseline density.

/// Touch slop in logical pixels.
///
/// A pointer has to travel more than this distance from its press position
/// before the pager even considers claiming the stream. Large enough to
/// ignore finger jitter, small enough to feel responsive; Android uses ~8dp
/// for `ViewConfiguration.TOUCH_SLOP`.
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Velocity estimates are clamped to this before the commit decision, so a
/// wildly noisy sample burst cannot report an absurd speed. Matches
/// Android's default maximum fling velocity at baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
