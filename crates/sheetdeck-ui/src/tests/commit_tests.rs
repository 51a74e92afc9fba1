use super::*;

#[test]
fn fast_rightward_fling_accepts_regardless_of_position() {
    assert_eq!(decide(2_500.0, 0.05), 1.0);
    assert_eq!(decide(2_000.1, 0.0), 1.0);
}

#[test]
fn fast_leftward_fling_reverts_regardless_of_position() {
    assert_eq!(decide(-2_500.0, 0.95), 0.0);
    assert_eq!(decide(-2_000.1, 1.0), 0.0);
}

#[test]
fn slow_release_falls_back_to_position() {
    assert_eq!(decide(0.0, 0.3), 0.0);
    assert_eq!(decide(0.0, 0.7), 1.0);
    assert_eq!(decide(1_500.0, 0.49), 0.0);
    assert_eq!(decide(-1_500.0, 0.51), 1.0);
}

#[test]
fn half_progress_accepts() {
    assert_eq!(decide(0.0, 0.5), 1.0);
}

#[test]
fn threshold_velocity_is_exclusive() {
    // Exactly +/-2000 is not a fling; the position rule decides.
    assert_eq!(decide(FLING_COMMIT_VELOCITY, 0.2), 0.0);
    assert_eq!(decide(FLING_COMMIT_VELOCITY, 0.8), 1.0);
    assert_eq!(decide(-FLING_COMMIT_VELOCITY, 0.8), 1.0);
    assert_eq!(decide(-FLING_COMMIT_VELOCITY, 0.2), 0.0);
}

#[test]
fn decision_is_deterministic() {
    for _ in 0..100 {
        assert_eq!(decide(2_400.0, 0.1), 1.0);
        assert_eq!(decide(-30.0, 0.62), 1.0);
        assert_eq!(decide(1_999.9, 0.49), 0.0);
    }
}
