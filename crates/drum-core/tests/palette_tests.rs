// Palette interpolation: degenerate palettes, end-stop clamping and the
// piecewise-linear ramp between stops.

use drum_core::{Palette, Rgb};

fn ramp() -> Palette {
    Palette::new(vec![
        Rgb::new(0, 250, 10),
        Rgb::new(100, 100, 10),
        Rgb::new(200, 0, 10),
    ])
}

#[test]
fn empty_palette_is_mid_grey() {
    let palette = Palette::new(Vec::new());
    for colour in [-3.0, 0.0, 0.5, 7.0] {
        assert_eq!(palette.interpolate(colour), Rgb::new(128, 128, 128));
    }
}

#[test]
fn single_stop_is_returned_for_any_index() {
    let only = Rgb::new(12, 34, 56);
    let palette = Palette::new(vec![only]);
    for colour in [-5.0, 0.0, 0.5, 1.0, 100.0] {
        assert_eq!(palette.interpolate(colour), only, "index {colour}");
    }
}

#[test]
fn midpoint_blends_neighbouring_stops() {
    let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(100, 200, 50)]);
    assert_eq!(palette.interpolate(0.5), Rgb::new(50, 100, 25));
}

#[test]
fn channels_are_truncated_not_rounded() {
    let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(10, 10, 10)]);
    // 2.5 truncates to 2, 7.5 to 7
    assert_eq!(palette.interpolate(0.25), Rgb::new(2, 2, 2));
    assert_eq!(palette.interpolate(0.75), Rgb::new(7, 7, 7));
}

#[test]
fn indices_outside_the_palette_stick_to_end_stops() {
    let palette = ramp();
    assert_eq!(palette.interpolate(-1.0), palette.stops()[0]);
    assert_eq!(palette.interpolate(0.0), palette.stops()[0]);
    assert_eq!(palette.interpolate(2.0), palette.stops()[2]);
    assert_eq!(palette.interpolate(7.3), palette.stops()[2]);
}

#[test]
fn exact_stop_indices_return_the_stop() {
    let palette = ramp();
    assert_eq!(palette.interpolate(1.0), palette.stops()[1]);
}

#[test]
fn ramp_is_monotone_and_continuous_per_channel() {
    // Property: red only rises, green only falls, and no step of 0.01 in the
    // index moves either channel by more than a few units.
    let palette = ramp();
    let mut prev = palette.interpolate(0.0);
    for i in 1..=200 {
        let colour = i as f32 / 100.0;
        let c = palette.interpolate(colour);
        assert!(c.r >= prev.r, "red fell at index {colour}: {prev:?} -> {c:?}");
        assert!(c.g <= prev.g, "green rose at index {colour}: {prev:?} -> {c:?}");
        assert!(
            (c.r - prev.r).abs() <= 3 && (c.g - prev.g).abs() <= 3,
            "jump at index {colour}: {prev:?} -> {c:?}"
        );
        prev = c;
    }
}

#[test]
fn nan_index_does_not_panic() {
    let palette = ramp();
    let _ = palette.interpolate(f32::NAN);
}
