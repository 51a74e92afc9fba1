use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn decelerate_hits_endpoints() {
    assert_eq!(Easing::Decelerate.transform(0.0), 0.0);
    assert_eq!(Easing::Decelerate.transform(1.0), 1.0);
}

#[test]
fn decelerate_is_fast_early_slow_late() {
    // First half covers more ground than the second half.
    let midpoint = Easing::Decelerate.transform(0.5);
    assert!(midpoint > 0.5, "got {midpoint}");
    // And it is monotonically increasing.
    let mut previous = 0.0;
    for step in 1..=10 {
        let value = Easing::Decelerate.transform(step as f32 / 10.0);
        assert!(value >= previous);
        previous = value;
    }
}

#[test]
fn bezier_easings_stay_in_bounds() {
    for easing in [Easing::EaseOut, Easing::FastOutSlowIn] {
        for step in 0..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!((-0.001..=1.001).contains(&value), "{easing:?} produced {value}");
        }
        assert_eq!(easing.transform(0.0), 0.0);
        assert_eq!(easing.transform(1.0), 1.0);
    }
}

#[test]
fn lerp_interpolates_and_extrapolates_endpoints() {
    assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
    assert_eq!(2.0f32.lerp(&2.0, 0.75), 2.0);
    assert_eq!(1.0f64.lerp(&3.0, 1.0), 3.0);
}

#[test]
fn spec_fraction_clamps_past_duration() {
    let spec = AnimationSpec::linear(500);
    assert_eq!(spec.fraction_at(0), 0.0);
    assert_eq!(spec.fraction_at(250), 0.5);
    assert_eq!(spec.fraction_at(500), 1.0);
    assert_eq!(spec.fraction_at(900), 1.0);
    assert!(spec.is_finished_at(500));
    assert!(!spec.is_finished_at(499));
}

#[test]
fn zero_duration_spec_snaps_to_end() {
    let spec = AnimationSpec::tween(0, Easing::Decelerate);
    assert_eq!(spec.fraction_at(0), 1.0);
    assert!(spec.is_finished_at(0));
}
