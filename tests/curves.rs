//! Tests for the combined curve set

use rvc_curves::curve::{position, CurveSet, NUM_SAMPLES, RVC_MAX};

#[test]
fn sample_count() {
    let curves = CurveSet::compute();
    assert_eq!(curves.len(), 134);
    assert_eq!(curves.len(), NUM_SAMPLES);
    assert!(!curves.is_empty());
}

#[test]
fn sorted_by_position() {
    let curves = CurveSet::compute();

    for pair in curves.samples().windows(2) {
        assert!(pair[0].position < pair[1].position);
    }

    assert_eq!(curves.samples()[0].rvc, RVC_MAX);
    assert_eq!(curves.samples()[NUM_SAMPLES - 1].rvc, 0);
}

#[test]
fn one_sample_per_input() {
    let curves = CurveSet::compute();
    let mut seen = [false; NUM_SAMPLES];

    for sample in curves.samples() {
        assert!(!seen[sample.rvc as usize], "duplicate RVC {}", sample.rvc);
        seen[sample.rvc as usize] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn positions_decrease_with_input() {
    for rvc in 0..RVC_MAX {
        assert!(position(rvc) > position(rvc + 1));
    }
}

#[test]
fn endpoints() {
    let curves = CurveSet::compute();

    let cw = curves.sample(0).unwrap();
    assert_eq!(cw.position, 1.0);
    assert_eq!(cw.traditional_db, 0);
    assert_eq!(cw.default_db, 0);

    let ccw = curves.sample(RVC_MAX).unwrap();
    assert_eq!(ccw.position, 0.0);
    assert_eq!(ccw.traditional_db, -12);
    assert_eq!(ccw.default_db, -64);

    assert!(curves.sample(RVC_MAX + 1).is_none());
}

#[test]
fn knee_and_mute() {
    let curves = CurveSet::compute();

    assert_eq!(curves.knee_rvc(), 110);
    assert!((curves.knee_position() - (1.0 - 110.0 / 133.0)).abs() < 1e-6);
    assert_eq!(curves.mute_rvc(), 123);
    assert_eq!(curves.sample(123).unwrap().default_db, -64);
    assert_eq!(curves.sample(122).unwrap().default_db, -45);
}

#[test]
fn point_series() {
    let curves = CurveSet::compute();

    let traditional: Vec<_> = curves.traditional().collect();
    let default_mode: Vec<_> = curves.default_mode().collect();
    assert_eq!(traditional.len(), NUM_SAMPLES);
    assert_eq!(default_mode.len(), NUM_SAMPLES);
    assert_eq!(traditional[0], (0.0, -12.0));
    assert_eq!(default_mode[0], (0.0, -64.0));
    assert_eq!(*default_mode.last().unwrap(), (1.0, 0.0));
}

#[test]
fn shared_set() {
    let shared = CurveSet::shared();
    assert!(core::ptr::eq(shared, CurveSet::shared()));
    assert_eq!(shared.samples(), CurveSet::compute().samples());
}

#[test]
fn custom_shape() {
    use rvc_curves::curve::default_mode::TaperShape;

    // No mute within the pot travel
    let shape = TaperShape::new(192, 14, 48, 255, 6).unwrap();
    let curves = CurveSet::with_shape(&shape);

    assert_eq!(curves.len(), NUM_SAMPLES);
    assert_eq!(curves.mute_rvc(), RVC_MAX);
    assert_eq!(curves.sample(RVC_MAX).unwrap().default_db, -48);
    assert!(curves
        .samples()
        .iter()
        .all(|s| (-48..=0).contains(&s.default_db)));
}
