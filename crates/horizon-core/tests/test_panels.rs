mod common;

use std::time::Instant;

use horizon_core::align::HorizonParams;
use horizon_core::error::HorizonError;
use horizon_core::panels::{
    last_panel_height, panel_height, process, process_with, split_panels, stitch_panels, trim_amounts, TrimAmounts,
};
use image::Rgb;

use common::{solid_frame, stack, striped_frame, tilted_panel};

const LEVELS: [u8; 6] = [20, 60, 100, 140, 180, 220];

// ---------------------------------------------------------------------------
// Splitting
// ---------------------------------------------------------------------------

#[test]
fn test_panel_height_divides_evenly() {
    assert_eq!(panel_height(600, 6), Some(100));
    assert_eq!(panel_height(605, 6), Some(100));
    assert_eq!(panel_height(6, 6), Some(1));
}

#[test]
fn test_last_panel_height_carries_remainder() {
    assert_eq!(last_panel_height(600, 6), Some(100));
    assert_eq!(last_panel_height(605, 6), Some(105));
    assert_eq!(last_panel_height(7, 1), Some(7));
    assert_eq!(last_panel_height(5, 6), None);
}

#[test]
fn test_panel_height_too_short() {
    assert_eq!(panel_height(5, 6), None);
    assert_eq!(panel_height(100, 0), None);
}

#[test]
fn test_split_produces_equal_strips() {
    let frame = striped_frame(40, 10, &LEVELS);
    let panels = split_panels(&frame, 6);
    assert_eq!(panels.len(), 6);
    for (panel, level) in panels.iter().zip(LEVELS) {
        assert_eq!(panel.dimensions(), (40, 10));
        assert!(panel.pixels().all(|p| *p == Rgb([level, level, level])));
    }
}

fn frame_with_red_remainder(remainder: u32) -> image::RgbImage {
    stack(&[
        striped_frame(40, 10, &LEVELS),
        solid_frame(40, remainder, [255, 0, 0]),
    ])
}

#[test]
fn test_split_last_strip_keeps_remainder_rows() {
    let frame = frame_with_red_remainder(3);
    assert_eq!(frame.height(), 63);

    let strips = split_panels(&frame, 6);
    assert_eq!(strips.len(), 6);
    for strip in &strips[..5] {
        assert_eq!(strip.height(), 10);
    }
    let last = strips.last().unwrap();
    assert_eq!(last.height(), 13);
    assert_eq!(*last.get_pixel(0, 9), Rgb([220, 220, 220]));
    for y in 10..13 {
        assert_eq!(*last.get_pixel(0, y), Rgb([255, 0, 0]));
    }
}

// ---------------------------------------------------------------------------
// Stitching and trimming
// ---------------------------------------------------------------------------

#[test]
fn test_trim_amounts_use_first_and_last_growth() {
    let panels = vec![
        solid_frame(8, 12, [1, 1, 1]),
        solid_frame(8, 30, [2, 2, 2]),
        solid_frame(8, 14, [3, 3, 3]),
    ];
    assert_eq!(trim_amounts(&panels, 10, 10), TrimAmounts { top: 2, bottom: 4 });
}

#[test]
fn test_trim_amounts_never_negative() {
    let panels = vec![solid_frame(8, 7, [1, 1, 1]), solid_frame(8, 9, [2, 2, 2])];
    assert_eq!(trim_amounts(&panels, 10, 10), TrimAmounts::default());
}

#[test]
fn test_trim_amounts_do_not_count_remainder_as_growth() {
    let panels = vec![solid_frame(8, 10, [1, 1, 1]), solid_frame(8, 15, [2, 2, 2])];
    assert_eq!(trim_amounts(&panels, 10, 13), TrimAmounts { top: 0, bottom: 2 });
    assert_eq!(trim_amounts(&panels, 10, 15), TrimAmounts::default());
}

#[test]
fn test_stitch_trims_top_and_bottom_only() {
    let panels = vec![
        solid_frame(8, 12, [10, 10, 10]),
        solid_frame(8, 10, [20, 20, 20]),
        solid_frame(8, 15, [30, 30, 30]),
        solid_frame(8, 14, [40, 40, 40]),
    ];
    let stitched = stitch_panels(&panels, 8, 10, 10);
    // 51 rows pasted, 2 trimmed from the top and 4 from the bottom.
    assert_eq!(stitched.dimensions(), (8, 45));
    assert_eq!(*stitched.get_pixel(0, 0), Rgb([10, 10, 10]));
    assert_eq!(*stitched.get_pixel(0, 10), Rgb([20, 20, 20]));
    assert_eq!(*stitched.get_pixel(0, 20), Rgb([30, 30, 30]));
    assert_eq!(*stitched.get_pixel(0, 44), Rgb([40, 40, 40]));
}

#[test]
fn test_stitch_clips_wide_panels_and_pads_narrow_ones() {
    let panels = vec![solid_frame(12, 10, [9, 9, 9]), solid_frame(4, 10, [5, 5, 5])];
    let stitched = stitch_panels(&panels, 8, 10, 10);
    assert_eq!(stitched.dimensions(), (8, 20));
    assert_eq!(*stitched.get_pixel(7, 0), Rgb([9, 9, 9]));
    assert_eq!(*stitched.get_pixel(3, 10), Rgb([5, 5, 5]));
    assert_eq!(*stitched.get_pixel(7, 10), Rgb([0, 0, 0]));
}

#[test]
fn test_stitch_single_grown_panel_keeps_untrimmed_canvas() {
    let panels = vec![solid_frame(8, 30, [7, 7, 7])];
    let stitched = stitch_panels(&panels, 8, 10, 10);
    assert_eq!(stitched.height(), 30);
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

#[test]
fn test_process_short_frame_is_unchanged() {
    let frame = striped_frame(30, 1, &[10, 200, 90, 40, 250]);
    assert_eq!(frame.height(), 5);
    assert_eq!(process(&frame, 6), frame);
}

#[test]
fn test_process_level_frame_keeps_size() {
    let frame = striped_frame(120, 10, &LEVELS);
    let corrected = process(&frame, 6);
    assert_eq!(corrected.width(), frame.width());
    assert_eq!(corrected.height(), frame.height());
    assert_eq!(corrected, frame);
}

#[test]
fn test_process_level_horizons_keep_size() {
    let panel = common::split_frame(300, 80, 40, [0, 0, 0], [255, 255, 255]);
    let frame = stack(&vec![panel; 6]);
    let corrected = process(&frame, 6);
    assert_eq!(corrected.dimensions(), (300, 480));
}

#[test]
fn test_process_keeps_remainder_rows() {
    let frame = frame_with_red_remainder(5);
    assert_eq!(frame.dimensions(), (40, 65));

    let corrected = process(&frame, 6);
    assert_eq!(corrected.dimensions(), (40, 65));
    let red_rows = (0..corrected.height())
        .filter(|&y| *corrected.get_pixel(20, y) == Rgb([255, 0, 0]))
        .count();
    assert_eq!(red_rows, 5);
    assert_eq!(corrected, frame);
}

#[test]
fn test_process_custom_panel_count() {
    let frame = striped_frame(50, 20, &[10, 120, 230]);
    let corrected = process(&frame, 3);
    assert_eq!(corrected, frame);
}

#[test]
fn test_process_tilted_panels() {
    let panel = tilted_panel(400, 100, 2.0);
    let frame = stack(&vec![panel; 6]);
    assert_eq!(frame.height(), 600);

    let params = HorizonParams {
        vote_threshold: 100,
        ..Default::default()
    };
    let corrected = process_with(&frame, 6, &params, None).unwrap();
    assert_eq!(corrected.width(), 400);
    // First and last panel growth is trimmed; interior growth is kept.
    assert!(corrected.height() >= 600, "height {}", corrected.height());
    assert!(corrected.height() < 720, "height {}", corrected.height());
}

#[test]
fn test_process_expired_deadline() {
    let frame = striped_frame(60, 10, &LEVELS);
    let result = process_with(&frame, 6, &HorizonParams::default(), Some(Instant::now()));
    assert!(matches!(result, Err(HorizonError::DeadlineExceeded { .. })));
}

#[test]
fn test_process_short_frame_ignores_deadline() {
    let frame = striped_frame(60, 1, &[1, 2, 3]);
    let result = process_with(&frame, 6, &HorizonParams::default(), Some(Instant::now()));
    assert_eq!(result.unwrap(), frame);
}
