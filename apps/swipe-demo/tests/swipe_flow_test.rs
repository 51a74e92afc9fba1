//! End-to-end paging flows driven through the SwipeRobot harness.

use sheetdeck_foundation::PointerEventKind;
use sheetdeck_testing::SwipeRobot;
use sheetdeck_ui::{PagerMode, RenderScene};

const WIDTH: f32 = 400.0;

#[test]
fn page_through_the_whole_deck_and_back() {
    let mut robot = SwipeRobot::new(3, WIDTH);

    robot.swipe_left_slow(0.7);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 1);

    robot.swipe_left_slow(0.7);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 2);

    // At the end of the deck a further left swipe has nowhere to go.
    robot.swipe_left_slow(0.7);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 2);

    robot.swipe_right_slow(0.7);
    robot.settle();
    robot.swipe_right_slow(0.7);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 0);
}

#[test]
fn short_swipe_snaps_back() {
    let mut robot = SwipeRobot::new(3, WIDTH);
    robot.swipe_left_slow(0.3);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 0);
}

#[test]
fn fling_beats_position() {
    let mut robot = SwipeRobot::new(3, WIDTH);
    robot.swipe_left_slow(0.7);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 1);

    // Tiny travel but 2500 px/s: reveals the previous panel regardless.
    robot.fling_right(0.1);
    robot.settle();
    assert_eq!(robot.pager().current_index(), 0);
}

#[test]
fn repaints_trace_the_whole_transition() {
    let mut robot = SwipeRobot::new(3, WIDTH);
    robot.swipe_left_slow(0.6);
    robot.settle();

    let scenes = robot.scenes();
    assert!(
        scenes
            .iter()
            .filter(|scene| matches!(scene, RenderScene::Transition { .. }))
            .count()
            > 5,
        "drag and settle ticks each snapshot a transition"
    );
    assert_eq!(
        scenes.last(),
        Some(&RenderScene::Idle { current: 1 }),
        "final repaint shows the settled panel"
    );

    // Progress only moves toward the committed target during the settle.
    let mut transition_progress: Vec<f32> = Vec::new();
    for scene in &scenes {
        if let RenderScene::Transition { progress, .. } = scene {
            transition_progress.push(*progress);
        }
    }
    let released_at = 1.0 - 0.6;
    let tail: Vec<f32> = transition_progress
        .iter()
        .copied()
        .filter(|p| *p <= released_at + 1e-3)
        .collect();
    for pair in tail.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-3, "settle must not reverse direction");
    }
}

#[test]
fn cancelled_drag_leaves_no_trace() {
    let mut robot = SwipeRobot::new(3, WIDTH);
    robot.drag_slow(WIDTH * 0.9, WIDTH * 0.4);
    assert_eq!(robot.pager().mode(), PagerMode::Dragging);

    robot.cancel(WIDTH * 0.4);
    assert_eq!(robot.pager().mode(), PagerMode::Idle);
    assert_eq!(robot.pager().current_index(), 0);
    assert_eq!(
        robot.scenes().last(),
        Some(&RenderScene::Idle { current: 0 }),
        "abort repaints the settled panel"
    );
}

#[test]
fn panel_content_sees_unclaimed_stream_then_cancel() {
    let mut robot = SwipeRobot::new(3, WIDTH);
    robot.press(WIDTH * 0.5);
    robot.move_to(WIDTH * 0.5 + 4.0, 16); // inside the slop
    robot.move_to(WIDTH * 0.5 - 100.0, 16); // claims
    robot.release(WIDTH * 0.5 - 100.0);
    robot.settle();

    let forwarded = robot.forwarded_events();
    assert_eq!(
        forwarded,
        vec![
            (0, PointerEventKind::Down),
            (0, PointerEventKind::Move),
            (0, PointerEventKind::Cancel),
        ]
    );
}
