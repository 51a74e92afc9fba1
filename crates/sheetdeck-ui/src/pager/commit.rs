/// Velocity above which a release commits regardless of position, in pixels
/// per second.
pub const FLING_COMMIT_VELOCITY: f32 = 2_000.0;

/// Decide where a released transition settles: 1.0 accepts the front panel,
/// 0.0 reverts to the back panel.
///
/// Strict priority order:
/// 1. velocity above `FLING_COMMIT_VELOCITY` accepts,
/// 2. velocity below the negative threshold reverts,
/// 3. otherwise position decides: progress under 0.5 reverts, else accepts.
///
/// The comparisons are strict, so a velocity of exactly ±2000 falls through
/// to the position rule. Pure and deterministic; evaluated once per gesture.
pub fn decide(velocity_x: f32, progress: f32) -> f32 {
    if velocity_x > FLING_COMMIT_VELOCITY {
        1.0
    } else if velocity_x < -FLING_COMMIT_VELOCITY {
        0.0
    } else if progress < 0.5 {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../tests/commit_tests.rs"]
mod tests;
