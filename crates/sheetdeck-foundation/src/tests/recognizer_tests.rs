use super::*;

const SLOP: f32 = 8.0;

#[test]
fn horizontal_dominant_move_past_slop_claims() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(100.0, 100.0));
    assert!(recognizer.on_move(Point::new(120.0, 103.0)));
    assert!(recognizer.is_claimed());
}

#[test]
fn small_move_inside_slop_does_not_claim() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(100.0, 100.0));
    assert!(!recognizer.on_move(Point::new(105.0, 100.0)));
    assert!(!recognizer.is_claimed());
}

#[test]
fn vertical_dominant_move_does_not_claim() {
    // dx past the slop but dy too large for the axis lock: |dx| * 0.5 <= |dy|.
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(100.0, 100.0));
    assert!(!recognizer.on_move(Point::new(120.0, 115.0)));
}

#[test]
fn claim_is_sticky_for_the_rest_of_the_stream() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(100.0, 100.0));
    assert!(recognizer.on_move(Point::new(150.0, 100.0)));
    // A later vertical wiggle cannot un-claim; on_move reports the claim edge
    // only once.
    assert!(!recognizer.on_move(Point::new(150.0, 180.0)));
    assert!(recognizer.is_claimed());
}

#[test]
fn move_without_down_is_ignored() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    assert!(!recognizer.on_move(Point::new(500.0, 0.0)));
    assert_eq!(recognizer.displacement(Point::new(500.0, 0.0)), None);
}

#[test]
fn displacement_is_relative_to_press() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(40.0, 10.0));
    assert_eq!(recognizer.displacement(Point::new(100.0, 50.0)), Some(60.0));
    assert_eq!(recognizer.displacement(Point::new(10.0, 50.0)), Some(-30.0));
}

#[test]
fn reset_clears_claim_and_tracking() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(0.0, 0.0));
    recognizer.on_move(Point::new(50.0, 0.0));
    recognizer.reset();
    assert!(!recognizer.is_claimed());
    assert!(!recognizer.is_tracking());
}

#[test]
fn new_down_resets_stale_claim() {
    let mut recognizer = GestureRecognizer::new(SLOP);
    recognizer.on_down(Point::new(0.0, 0.0));
    recognizer.on_move(Point::new(50.0, 0.0));
    recognizer.on_down(Point::new(200.0, 0.0));
    assert!(!recognizer.is_claimed());
    assert_eq!(recognizer.displacement(Point::new(210.0, 0.0)), Some(10.0));
}
