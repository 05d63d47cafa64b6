// RGB <-> HSV conversion used by the panel renderer's hue/value nudge.

use drum_core::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};

#[test]
fn primaries_map_to_their_hues() {
    assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv { h: 0, s: 100, v: 100 });
    assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)), Hsv { h: 120, s: 100, v: 100 });
    assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)), Hsv { h: 240, s: 100, v: 100 });
}

#[test]
fn primaries_convert_back() {
    assert_eq!(hsv_to_rgb(Hsv { h: 0, s: 100, v: 100 }), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(Hsv { h: 120, s: 100, v: 100 }), Rgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(Hsv { h: 240, s: 100, v: 100 }), Rgb::new(0, 0, 255));
}

#[test]
fn black_and_greys_have_no_saturation() {
    assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv { h: 0, s: 0, v: 0 });
    let grey = rgb_to_hsv(Rgb::new(128, 128, 128));
    assert_eq!(grey.s, 0);
    assert_eq!(grey.h, 0);
    let back = hsv_to_rgb(grey);
    assert_eq!(back.r, back.g);
    assert_eq!(back.g, back.b);
}

#[test]
fn warm_orange_components() {
    // max 200 -> v 78, delta 150 -> s 75, hue 60 * 50 / 150 = 20
    assert_eq!(rgb_to_hsv(Rgb::new(200, 100, 50)), Hsv { h: 20, s: 75, v: 78 });
}

#[test]
fn over_bright_colours_keep_their_excess() {
    // Values above 100% are carried through rather than clipped.
    let hsv = rgb_to_hsv(Rgb::new(510, 0, 0));
    assert_eq!(hsv.v, 200);
    assert_eq!(hsv_to_rgb(hsv), Rgb::new(510, 0, 0));
}

#[test]
fn hue_wraps_at_360() {
    let a = hsv_to_rgb(Hsv { h: 0, s: 80, v: 60 });
    let b = hsv_to_rgb(Hsv { h: 360, s: 80, v: 60 });
    assert_eq!(a, b);
}

#[test]
fn every_sextant_round_trips_closely() {
    // Property: converting there and back stays within a few units per channel
    // for saturated in-gamut colours across the hue circle.
    for h in (0..360).step_by(15) {
        let rgb = hsv_to_rgb(Hsv { h, s: 100, v: 100 });
        let back = hsv_to_rgb(rgb_to_hsv(rgb));
        for (x, y) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
            assert!((x - y).abs() <= 6, "hue {h}: {rgb:?} -> {back:?}");
        }
    }
}

#[test]
fn clamped_limits_channels_to_display_range() {
    assert_eq!(Rgb::new(300, -4, 128).clamped(), [255, 0, 128]);
}

#[test]
fn scaled_truncates() {
    assert_eq!(Rgb::new(255, 100, 3).scaled(0.7), Rgb::new(178, 70, 2));
    assert_eq!(Rgb::new(200, 100, 50).scaled(2.0), Rgb::new(400, 200, 100));
}
