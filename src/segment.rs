//! Seven-segment numeral rendering
//!
//! Two independent rasterizers share one encoding table: the vector
//! variant ([`draw_number`]) draws multi-digit fields through a [`Canvas`]
//! for the full-refresh scenes, and the packed variant
//! ([`draw_ones_digit`]) writes a single digit straight into a
//! [`PackedFrame`](crate::packed::PackedFrame) for the partial-refresh
//! path, which has no canvas at all.
//!
//! Segments are drawn as stacks of parallel horizontal or vertical strips
//! whose width tapers at both ends, producing the classic angled segment
//! caps without a polygon fill. Geometry scales linearly with the size
//! factor; for `scale` and `digit_count` the field occupies exactly
//! `digit_count * (10 * scale + 2) - 2 * scale` by `20 * scale + 4`
//! pixels, and callers must reserve that bounding box.

use crate::canvas::Canvas;
use crate::color::Color;
#[cfg(any(test, feature = "alloc"))]
use crate::packed::PackedFrame;

/// Segment encoding table: digit value to lit-segment bitmask
///
/// Bit `j` lights segment `j`: 0 top, 1 top-right, 2 bottom-right,
/// 3 bottom, 4 bottom-left, 5 top-left, 6 middle. Entry 10 is blank,
/// entry 11 the minus sign (middle segment only).
pub static SEGMENTS: [u8; 12] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x00, 0x40,
];

/// Table index of the blank glyph
const GLYPH_BLANK: usize = 10;
/// Table index of the minus glyph
const GLYPH_MINUS: usize = 11;

/// Horizontal distance between the origins of adjacent digit cells
pub const fn digit_stride(scale: u32) -> u32 {
    10 * scale + 2
}

/// Width of a field of `digits` digit cells
pub const fn field_width(scale: u32, digits: u32) -> u32 {
    digits * digit_stride(scale) - 2 * scale
}

/// Height of a digit field
pub const fn field_height(scale: u32) -> u32 {
    20 * scale + 4
}

/// Bounding-box width of a single digit glyph
pub const fn digit_width(scale: u32) -> u32 {
    8 * scale + 2
}

/// Per-segment placement within a digit cell
///
/// Offsets are relative to the cell origin, derived from the size factor
/// the same way for both rasterizer variants.
fn segment_table(s: i32) -> [(i32, i32, bool); 7] {
    let x1 = s + 1;
    let x2 = 6 * s + 1;
    let y_top = s + 1;
    let y_mid = 9 * s + 1;
    let y_low = 10 * s + 2;
    let y_bot = 18 * s + 2;
    [
        (x1, 0, true),      // 0: top
        (x2, y_top, false), // 1: top right
        (x2, y_low, false), // 2: bottom right
        (x1, y_bot, true),  // 3: bottom
        (0, y_low, false),  // 4: bottom left
        (0, y_top, false),  // 5: top left
        (x1, y_mid, true),  // 6: middle
    ]
}

/// Render a multi-digit seven-segment number through a canvas
///
/// Digit positions fill right-to-left, most significant digit leftmost.
/// `scale` is clamped to 1..=10 and `digit_count`'s magnitude likewise.
/// A negative `digit_count` requests leading-blank suppression: unused
/// leading positions render nothing instead of "0", and when `value` is
/// negative a minus sign occupies the leftmost position. With a positive
/// `digit_count` unused positions render leading zeros and no sign is
/// ever drawn.
///
/// Lit segments are drawn in `fg`, unlit ones in `bg`, so redrawing a
/// number over its previous value needs no explicit clear.
#[allow(clippy::too_many_arguments)]
pub fn draw_number<C: Canvas>(
    canvas: &mut C,
    value: i32,
    x: i32,
    y: i32,
    scale: u32,
    fg: Color,
    bg: Color,
    digit_count: i32,
) {
    let scale = scale.clamp(1, 10);
    let count = digit_count.unsigned_abs().clamp(1, 10) as i32;
    let suppress = digit_count < 0;
    let negative = value < 0;
    let stride = digit_stride(scale) as i32;
    let mut remaining = value.unsigned_abs();

    // Position 0 is the ones digit, in the rightmost cell.
    for pos in 0..count {
        let glyph = if pos == 0 || remaining > 0 {
            (remaining % 10) as usize
        } else if !suppress {
            0
        } else if negative && pos == count - 1 {
            GLYPH_MINUS
        } else {
            GLYPH_BLANK
        };
        let cell_x = x + (count - 1 - pos) * stride;
        draw_glyph(canvas, glyph, cell_x, y, scale as i32, fg, bg);
        remaining /= 10;
    }
}

/// Render one glyph from the encoding table at a cell origin
fn draw_glyph<C: Canvas>(canvas: &mut C, glyph: usize, x: i32, y: i32, s: i32, fg: Color, bg: Color) {
    let mask = SEGMENTS[glyph];
    for (j, (dx, dy, horizontal)) in segment_table(s).iter().enumerate() {
        let color = if mask & (1 << j) != 0 { fg } else { bg };
        if *horizontal {
            h_segment(s, |row, sx, w| canvas.draw_hline(x + dx + sx, y + dy + row, w, color));
        } else {
            v_segment(s, |col, sy, h| canvas.draw_vline(x + dx + col, y + dy + sy, h, color));
        }
    }
}

/// Strip stack of a horizontal segment: `emit(row, x_offset, width)`
///
/// Rows 0..s widen from the 4s-pixel core, rows s..2s narrow back,
/// forming the tapered caps.
fn h_segment(s: i32, mut emit: impl FnMut(i32, i32, u32)) {
    let mut w = 4 * s;
    let mut a = s;
    for row in 0..s {
        emit(row, a, w as u32);
        a -= 1;
        w += 2;
    }
    for row in s..2 * s {
        emit(row, a, w as u32);
        a += 1;
        w -= 2;
    }
}

/// Strip stack of a vertical segment: `emit(col, y_offset, height)`
fn v_segment(s: i32, mut emit: impl FnMut(i32, i32, u32)) {
    let mut h = 7 * s;
    let mut a = s;
    for col in 0..s {
        emit(col, a, h as u32);
        a -= 1;
        h += 2;
    }
    for col in s..2 * s {
        emit(col, a, h as u32);
        a += 1;
        h -= 2;
    }
}

/// Render the ones digit of `value` into a packed frame
///
/// This intentionally rasterizes `value % 10` only: the sole caller is the
/// minute partial-refresh path, which updates the last digit of a
/// two-digit minute field and nothing else. The frame background is
/// expected white (as [`PackedFrame::try_new_white`] leaves it), so only
/// lit segments are written.
#[cfg(any(test, feature = "alloc"))]
pub fn draw_ones_digit(frame: &mut PackedFrame, value: u32, scale: u32) {
    let s = scale.clamp(1, 10) as i32;
    let mask = SEGMENTS[(value % 10) as usize];
    for (j, (dx, dy, horizontal)) in segment_table(s).iter().enumerate() {
        if mask & (1 << j) == 0 {
            continue;
        }
        if *horizontal {
            h_segment(s, |row, sx, w| frame.hline(dx + sx, dy + row, w, Color::Black));
        } else {
            v_segment(s, |col, sy, h| frame.vline(dx + col, dy + sy, h, Color::Black));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::ColorMode;
    use crate::config::Dimensions;
    use crate::testing::MockCanvas;

    const SCALE: i32 = 2;

    /// A probe point comfortably inside each segment at the test scale
    fn segment_probe(seg: usize) -> (i32, i32) {
        let s = SCALE;
        match seg {
            0 => (4 * s + 1, s),              // top, widest row midpoint
            1 => (7 * s + 1, 5 * s + 1),      // top right
            2 => (7 * s + 1, 14 * s + 2),     // bottom right
            3 => (4 * s + 1, 19 * s + 2),     // bottom
            4 => (s, 14 * s + 2),             // bottom left
            5 => (s, 5 * s + 1),              // top left
            _ => (4 * s + 1, 10 * s + 1),     // middle
        }
    }

    fn canvas() -> MockCanvas {
        let mut canvas = MockCanvas::new();
        canvas.begin(
            Dimensions { rows: 80, cols: 160 },
            80,
            ColorMode::Mono,
        );
        canvas.first_band();
        canvas.clear(Color::White);
        canvas
    }

    fn lit_segments(canvas: &MockCanvas, cell_x: i32, cell_y: i32) -> u8 {
        let mut mask = 0;
        for seg in 0..7 {
            let (px, py) = segment_probe(seg);
            if canvas.pixel((cell_x + px) as u32, (cell_y + py) as u32) == Color::Black {
                mask |= 1 << seg;
            }
        }
        mask
    }

    #[test]
    fn test_encoding_table_values() {
        assert_eq!(
            SEGMENTS,
            [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x00, 0x40]
        );
    }

    #[test]
    fn test_rendered_segments_match_table() {
        for digit in 0..10 {
            let mut canvas = canvas();
            draw_number(&mut canvas, digit, 2, 2, SCALE as u32, Color::Black, Color::White, 1);
            assert_eq!(
                lit_segments(&canvas, 2, 2),
                SEGMENTS[digit as usize],
                "digit {digit}"
            );
        }
    }

    #[test]
    fn test_zero_lights_all_but_middle() {
        let mut canvas = canvas();
        draw_number(&mut canvas, 0, 2, 2, SCALE as u32, Color::Black, Color::White, 1);
        assert_eq!(lit_segments(&canvas, 2, 2), 0x3F);
    }

    #[test]
    fn test_blank_suppression_leaves_leading_cell_empty() {
        let mut canvas = canvas();
        draw_number(&mut canvas, 5, 2, 2, SCALE as u32, Color::Black, Color::White, -2);
        let stride = digit_stride(SCALE as u32) as i32;
        assert_eq!(lit_segments(&canvas, 2, 2), 0x00, "leading cell");
        assert_eq!(lit_segments(&canvas, 2 + stride, 2), SEGMENTS[5], "ones cell");
    }

    #[test]
    fn test_positive_digit_count_pads_with_zeros() {
        let mut canvas = canvas();
        draw_number(&mut canvas, 5, 2, 2, SCALE as u32, Color::Black, Color::White, 2);
        let stride = digit_stride(SCALE as u32) as i32;
        assert_eq!(lit_segments(&canvas, 2, 2), SEGMENTS[0], "leading zero");
        assert_eq!(lit_segments(&canvas, 2 + stride, 2), SEGMENTS[5]);
    }

    #[test]
    fn test_minus_sign_in_leftmost_cell() {
        let mut canvas = canvas();
        draw_number(&mut canvas, -7, 2, 2, SCALE as u32, Color::Black, Color::White, -3);
        let stride = digit_stride(SCALE as u32) as i32;
        assert_eq!(lit_segments(&canvas, 2, 2), 0x40, "minus cell");
        assert_eq!(lit_segments(&canvas, 2 + stride, 2), 0x00, "blank cell");
        assert_eq!(lit_segments(&canvas, 2 + 2 * stride, 2), SEGMENTS[7]);
    }

    #[test]
    fn test_two_digit_value_renders_both_digits() {
        let mut canvas = canvas();
        draw_number(&mut canvas, 47, 2, 2, SCALE as u32, Color::Black, Color::White, 2);
        let stride = digit_stride(SCALE as u32) as i32;
        assert_eq!(lit_segments(&canvas, 2, 2), SEGMENTS[4]);
        assert_eq!(lit_segments(&canvas, 2 + stride, 2), SEGMENTS[7]);
    }

    #[test]
    fn test_scale_is_clamped() {
        // Scale 0 must clamp to 1 and still render; just ensure some ink
        let mut canvas = canvas();
        draw_number(&mut canvas, 8, 2, 2, 0, Color::Black, Color::White, 1);
        let mut any = false;
        for y in 0..30 {
            for x in 0..15 {
                any |= canvas.pixel(x, y) == Color::Black;
            }
        }
        assert!(any);
    }

    #[test]
    fn test_field_geometry_formulas() {
        assert_eq!(digit_stride(4), 42);
        assert_eq!(field_width(4, 2), 76);
        assert_eq!(field_height(4), 84);
        assert_eq!(digit_width(4), 34);
    }

    #[test]
    fn test_packed_variant_renders_ones_digit_only() {
        let mut frame = PackedFrame::try_new_white(digit_width(SCALE as u32), field_height(SCALE as u32))
            .unwrap();
        draw_ones_digit(&mut frame, 47, SCALE as u32);
        let mut mask = 0;
        for seg in 0..7 {
            let (px, py) = segment_probe(seg);
            if frame.pixel(px as u32, py as u32) == Color::Black {
                mask |= 1 << seg;
            }
        }
        // Only the "7" glyph, regardless of the tens digit
        assert_eq!(mask, SEGMENTS[7]);
    }

    #[test]
    fn test_packed_variant_value_mod_ten() {
        for value in [3u32, 13, 23, 103] {
            let mut frame =
                PackedFrame::try_new_white(digit_width(SCALE as u32), field_height(SCALE as u32))
                    .unwrap();
            draw_ones_digit(&mut frame, value, SCALE as u32);
            let (px, py) = segment_probe(6);
            // "3" lights the middle segment
            assert_eq!(frame.pixel(px as u32, py as u32), Color::Black, "value {value}");
        }
    }
}
