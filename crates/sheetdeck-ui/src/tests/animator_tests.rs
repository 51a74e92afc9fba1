use super::*;
use crate::pager::state::PagerMode;
use sheetdeck_animation::Easing;

fn linear_spec() -> AnimationSpec {
    AnimationSpec::linear(500)
}

#[test]
fn first_tick_anchors_start_time() {
    let mut animator = TransitionAnimator::new();
    animator.begin(0.2, 1.0, linear_spec());

    // Whatever wall time the first frame reports becomes t=0.
    let tick = animator.tick(10_000).unwrap();
    assert_eq!(tick.progress, 0.2);
    assert!(!tick.finished);

    let tick = animator.tick(10_250).unwrap();
    assert!((tick.progress - 0.6).abs() < 1e-6, "got {}", tick.progress);
}

#[test]
fn tick_past_duration_lands_exactly_on_target() {
    let mut animator = TransitionAnimator::new();
    animator.begin(0.85, 0.0, linear_spec());
    animator.tick(0).unwrap();
    let tick = animator.tick(750).unwrap();
    assert!(tick.finished);
    assert_eq!(tick.progress, 0.0);
    assert!(!animator.is_running());
    assert_eq!(animator.tick(800), None);
}

#[test]
fn decelerate_spec_front_loads_motion() {
    let mut animator = TransitionAnimator::new();
    animator.begin(0.0, 1.0, AnimationSpec::tween(500, Easing::Decelerate));
    animator.tick(0).unwrap();
    let halfway = animator.tick(250).unwrap();
    assert!(halfway.progress > 0.5, "decelerate should cover more than half early, got {}", halfway.progress);
}

#[test]
fn interrupt_reports_committed_target_and_stops() {
    let mut animator = TransitionAnimator::new();
    animator.begin(0.4, 1.0, linear_spec());
    animator.tick(0).unwrap();
    assert_eq!(animator.interrupt(), Some(1.0));
    assert!(!animator.is_running());
    assert_eq!(animator.interrupt(), None);
}

#[test]
fn begin_replaces_running_animation() {
    let mut animator = TransitionAnimator::new();
    animator.begin(0.0, 1.0, linear_spec());
    animator.tick(0).unwrap();
    animator.begin(0.9, 0.0, linear_spec());
    let tick = animator.tick(1_000).unwrap();
    assert_eq!(tick.progress, 0.9, "new tween must re-anchor its start time");
    assert_eq!(tick.target, 0.0);
}

#[test]
fn finalize_with_target_zero_keeps_back_panel() {
    let mut state = PagerState::new();
    state.current_index = 1;
    state.front_index = 0;
    state.back_index = 1;
    state.progress = 0.3;
    state.mode = PagerMode::Animating;

    finalize_settle(&mut state, 0.0);
    assert_eq!(state.current_index, 1);
    assert_eq!(state.mode, PagerMode::Idle);
    assert_eq!(state.progress, 0.0);
}

#[test]
fn finalize_with_target_one_promotes_front_panel() {
    let mut state = PagerState::new();
    state.current_index = 1;
    state.front_index = 0;
    state.back_index = 1;
    state.progress = 0.8;
    state.mode = PagerMode::Animating;

    finalize_settle(&mut state, 1.0);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.mode, PagerMode::Idle);
}
