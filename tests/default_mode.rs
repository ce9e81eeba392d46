//! Tests for the default curve with mute

use rvc_curves::curve::default_mode::*;
use rvc_curves::curve::RVC_MAX;

#[test]
fn linearize_values() {
    assert_eq!(linearize(0), 0);
    assert_eq!(linearize(5), 5);
    assert_eq!(linearize(50), 62);
    assert_eq!(linearize(109), 190);
    assert_eq!(linearize(110), 193);
    assert_eq!(linearize(123), 237);
    assert_eq!(linearize(133), 255);
}

#[test]
fn linearize_caps_and_guards() {
    assert_eq!(linearize(254), 255);
    // Denominator is zero here.
    assert_eq!(linearize(255), 255);
}

#[test]
fn linearize_matches_multiplication() {
    for rvc in 0..=RVC_MAX {
        let expected = (rvc as u32 * 255 / (255 - rvc as u32)).min(255);
        assert_eq!(linearize(rvc) as u32, expected, "RVC {rvc}");
    }
}

#[test]
fn firmware_shape() {
    let shape = TaperShape::default();
    assert_eq!(shape.knee(), 192);
    assert_eq!(shape.knee_db(), 14);
    assert_eq!(shape.end_db(), 48);
    assert_eq!(shape.end_guard(), 236);
    assert_eq!(shape.start_guard(), 6);
    assert_eq!(TaperShape::new(192, 14, 48, 236, 6), Some(shape));
}

#[test]
fn rejects_out_of_order_shapes() {
    // End attenuation below the knee attenuation
    assert_eq!(TaperShape::new(192, 14, 10, 236, 6), None);
    // Knee on the end guard band
    assert_eq!(TaperShape::new(236, 14, 48, 236, 6), None);
    // Knee past the end guard band
    assert_eq!(TaperShape::new(240, 14, 48, 236, 6), None);
    // Knee at zero
    assert_eq!(TaperShape::new(0, 14, 48, 236, 0), None);
    // Start guard band past the knee
    assert_eq!(TaperShape::new(192, 14, 48, 236, 200), None);
    // End attenuation beyond mute
    assert_eq!(TaperShape::new(192, 14, 200, 236, 6), None);
}

#[test]
fn edge_shapes_stay_in_range() {
    let shapes = [
        TaperShape::new(1, 0, 0, 2, 0),
        TaperShape::new(192, 48, 48, 193, 192),
        TaperShape::new(254, 64, 64, 255, 0),
        TaperShape::new(1, 0, MUTE_DB, 255, 1),
    ];

    for shape in shapes {
        let shape = shape.unwrap();
        for linear in 0..=u8::MAX {
            let res = shape.attenuation(linear);
            assert!(res <= MUTE_DB, "{shape:?} at {linear}: {res}");
        }
        for rvc in 0..=RVC_MAX {
            assert!((-64..=0).contains(&shape.attenuation_db(rvc)));
        }
    }
}

#[test]
fn piecewise_segments() {
    let shape = TaperShape::default();

    // Start guard band
    assert_eq!(shape.attenuation(0), 0);
    assert_eq!(shape.attenuation(5), 0);

    // Gentle slope
    assert_eq!(shape.attenuation(6), 0);
    assert_eq!(shape.attenuation(62), 4);
    assert_eq!(shape.attenuation(164), 11);
    assert_eq!(shape.attenuation(192), 13);

    // Steep slope
    assert_eq!(shape.attenuation(193), 14);
    assert_eq!(shape.attenuation(226), 40);
    assert_eq!(shape.attenuation(236), 48);

    // Mute
    assert_eq!(shape.attenuation(237), MUTE_DB);
    assert_eq!(shape.attenuation(255), MUTE_DB);
}

#[test]
fn monotonic_over_travel() {
    let shape = TaperShape::default();
    let mut last = 0;

    for rvc in 0..=RVC_MAX {
        let res = shape.attenuation_for_rvc(rvc);
        assert!(res >= last, "RVC {rvc}: {res} < {last}");
        assert!(res <= MUTE_DB);
        last = res;
    }

    assert_eq!(last, MUTE_DB);
}

#[test]
fn endpoints() {
    let shape = TaperShape::default();
    assert_eq!(shape.attenuation_db(0), 0);
    assert_eq!(shape.attenuation_db(RVC_MAX), -64);
}

#[test]
fn knee_and_mute_inputs() {
    let shape = TaperShape::default();
    assert_eq!(shape.knee_rvc(), Some(110));
    assert_eq!(shape.mute_rvc(), Some(123));
    assert_eq!(shape.attenuation_for_rvc(122), 45);
}
