//! Tests for the layout engine.
//!
//! Bar geometry is defined against an 800x400 reference canvas; these tests
//! pin the scale rule, the pill radius invariant, and group centering.

use pill_render::layout::{compute_layout, BASE_BAR_HEIGHT, BASE_BAR_WIDTH, BASE_SPACING};

#[test]
fn test_scale_is_min_of_axis_ratios() {
    // Reference-sized canvas: scale 1
    let g = compute_layout(800, 400, 8, 1);
    assert_eq!(g.scale, 1.0);

    // Wide canvas: height-limited
    let g = compute_layout(1600, 400, 8, 1);
    assert_eq!(g.scale, 1.0);

    // Tall canvas: width-limited
    let g = compute_layout(800, 800, 8, 1);
    assert_eq!(g.scale, 1.0);

    // 4K UHD: width ratio 4.8, height ratio 5.4 -> 4.8
    let g = compute_layout(3840, 2160, 8, 1);
    assert_eq!(g.scale, 4.8);
}

#[test]
fn test_supersample_scales_render_dimensions() {
    let g1 = compute_layout(800, 400, 8, 1);
    let g2 = compute_layout(800, 400, 8, 2);

    assert_eq!(g2.render_width, 1600);
    assert_eq!(g2.render_height, 800);
    assert_eq!(g2.scale, 2.0 * g1.scale);
    assert_eq!(g2.bar_width, 2.0 * g1.bar_width);
    assert_eq!(g2.bar_height, 2.0 * g1.bar_height);
    assert_eq!(g2.spacing, 2.0 * g1.spacing);
}

#[test]
fn test_bar_dimensions_linear_in_scale() {
    for &(w, h) in &[(800u32, 400u32), (1920, 1080), (10080, 4320), (400, 1000)] {
        let g = compute_layout(w, h, 8, 1);
        assert_eq!(g.bar_width, BASE_BAR_WIDTH * g.scale);
        assert_eq!(g.bar_height, BASE_BAR_HEIGHT * g.scale);
        assert_eq!(g.spacing, BASE_SPACING * g.scale);
    }
}

#[test]
fn test_corner_radius_is_half_bar_width() {
    for &(w, h, ss) in &[(800u32, 400u32, 1u32), (1920, 1080, 2), (10080, 4320, 2), (333, 777, 3)] {
        let g = compute_layout(w, h, 8, ss);
        assert_eq!(g.corner_radius, g.bar_width / 2.0);
    }
}

#[test]
fn test_eight_bar_group_fits_with_positive_margins() {
    // On the reference canvas: 42*7 + 70 = 364 wide, well inside 800
    let g = compute_layout(800, 400, 8, 1);
    let total = g.spacing * 7.0 + g.bar_width;
    assert!(total < 800.0);
    assert!(g.start_x > 0.0);
    assert!(g.bar_x(7) + g.bar_width < g.render_width as f64);

    // The margin relation holds at any resolution since everything scales
    // with the same factor.
    let g = compute_layout(10080, 4320, 8, 2);
    assert!(g.start_x > 0.0);
    assert!(g.bar_x(7) + g.bar_width < g.render_width as f64);
    assert!(g.start_y > 0.0);
}

#[test]
fn test_group_is_centered() {
    let g = compute_layout(800, 400, 8, 1);
    let right_margin = g.render_width as f64 - (g.bar_x(7) + g.bar_width);
    assert!((g.start_x - right_margin).abs() < 1e-9);

    let bottom_margin = g.render_height as f64 - (g.start_y + g.bar_height);
    assert!((g.start_y - bottom_margin).abs() < 1e-9);
}

#[test]
fn test_single_bar_collapses_spacing() {
    // Reference canvas, one color: bar spans x [365, 435], y [60, 340]
    let g = compute_layout(800, 400, 1, 1);
    assert_eq!(g.scale, 1.0);
    assert_eq!(g.start_x, 365.0);
    assert_eq!(g.start_x + g.bar_width, 435.0);
    assert_eq!(g.start_y, 60.0);
    assert_eq!(g.start_y + g.bar_height, 340.0);
}

#[test]
fn test_bar_positions_step_by_spacing() {
    let g = compute_layout(800, 400, 8, 1);
    for i in 0..8 {
        assert_eq!(g.bar_x(i), g.start_x + i as f64 * 42.0);
    }
}
