//! Tests for the render pipeline.

use pill_render::{render, Rgb, RenderError, RenderRequest};

const PAPER: Rgb = Rgb::new(0xFD, 0xF6, 0xE3);
const BLACK: Rgb = Rgb::new(0, 0, 0);

#[test]
fn test_output_has_target_dimensions() {
    let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
    let request = RenderRequest {
        target_width: 200,
        target_height: 100,
        colors: &colors,
        background: BLACK,
        supersample: 2,
    };

    let image = render(&request).unwrap();
    assert_eq!(image.width(), 200);
    assert_eq!(image.height(), 100);
}

#[test]
fn test_supersample_one_skips_resampling() {
    // Without downsampling there is no blending: every pixel must be
    // exactly the background or exactly a bar color.
    let colors = [Rgb::new(255, 0, 0)];
    let request = RenderRequest {
        target_width: 400,
        target_height: 200,
        colors: &colors,
        background: BLACK,
        supersample: 1,
    };

    let image = render(&request).unwrap();
    assert_eq!(image.width(), 400);
    assert_eq!(image.height(), 200);

    for pixel in image.pixels() {
        let c = Rgb::new(pixel.0[0], pixel.0[1], pixel.0[2]);
        assert!(c == BLACK || c == Rgb::new(255, 0, 0), "unexpected blended pixel {:?}", c);
    }
}

#[test]
fn test_single_pill_reference_placement() {
    // 800x400 at supersample 1, one black bar on paper background:
    // the bar spans x [365, 435], y [60, 340] with 35px pill caps.
    let colors = [BLACK];
    let request = RenderRequest {
        target_width: 800,
        target_height: 400,
        colors: &colors,
        background: PAPER,
        supersample: 1,
    };

    let image = render(&request).unwrap();
    let at = |x: u32, y: u32| {
        let p = image.get_pixel(x, y);
        Rgb::new(p.0[0], p.0[1], p.0[2])
    };

    // Mid-body row: full width of the bar
    assert_eq!(at(400, 200), BLACK);
    assert_eq!(at(365, 200), BLACK);
    assert_eq!(at(434, 200), BLACK);
    assert_eq!(at(364, 200), PAPER);
    assert_eq!(at(435, 200), PAPER);

    // Top cap: narrow at the apex, empty at the corners
    assert_eq!(at(400, 60), BLACK);
    assert_eq!(at(367, 60), PAPER);
    assert_eq!(at(432, 60), PAPER);
    assert_eq!(at(400, 59), PAPER);

    // Bottom cap mirrors the top
    assert_eq!(at(400, 339), BLACK);
    assert_eq!(at(400, 340), PAPER);
    assert_eq!(at(367, 339), PAPER);
}

#[test]
fn test_rendering_is_deterministic() {
    let colors = [
        Rgb::new(0xF4, 0x2E, 0x1D),
        Rgb::new(0xE8, 0x6C, 0x5E),
        Rgb::new(0x97, 0x52, 0x4C),
    ];
    let request = RenderRequest {
        target_width: 320,
        target_height: 160,
        colors: &colors,
        background: BLACK,
        supersample: 2,
    };

    let first = render(&request).unwrap();
    let second = render(&request).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_bars_appear_in_palette_order() {
    // Two bars, left red then right green, at supersample 1.
    let red = Rgb::new(255, 0, 0);
    let green = Rgb::new(0, 255, 0);
    let colors = [red, green];
    let request = RenderRequest {
        target_width: 800,
        target_height: 400,
        colors: &colors,
        background: BLACK,
        supersample: 1,
    };

    let image = render(&request).unwrap();
    // start_x = (800 - 112) / 2 = 344; bar centers at 379 and 421.
    let left = image.get_pixel(379, 200);
    let right = image.get_pixel(421, 200);
    assert_eq!(Rgb::new(left.0[0], left.0[1], left.0[2]), red);
    assert_eq!(Rgb::new(right.0[0], right.0[1], right.0[2]), green);
}

#[test]
fn test_oversized_canvas_fails_recoverably() {
    // 2e9 x 2e9 x 3 bytes overflows any allocator; must come back as an
    // error, not a panic or abort.
    let colors = [BLACK];
    let request = RenderRequest {
        target_width: 2_000_000_000,
        target_height: 2_000_000_000,
        colors: &colors,
        background: PAPER,
        supersample: 1,
    };

    match render(&request) {
        Err(RenderError::OutOfMemory { .. }) => {}
        other => panic!("expected OutOfMemory, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_supersample_overflow_fails_recoverably() {
    // width * supersample exceeds u32; must come back as the same
    // per-image error as any other oversized render, not wrap or panic.
    let colors = [BLACK];
    let request = RenderRequest {
        target_width: 3_000_000_000,
        target_height: 2,
        colors: &colors,
        background: PAPER,
        supersample: 2,
    };

    match render(&request) {
        Err(RenderError::OutOfMemory { width, .. }) => assert_eq!(width, 6_000_000_000),
        other => panic!("expected OutOfMemory, got {:?}", other.map(|_| ())),
    }
}
