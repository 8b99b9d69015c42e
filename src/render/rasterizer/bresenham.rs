//! Solid line rasterizer using Bresenham's algorithm.

use super::LineRasterizer;
use crate::color::Color;
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Integer error-accumulation line rasterizer.
///
/// Endpoints are rounded to pixel centers before stepping, and every
/// touched pixel is written at full coverage. Works in all octants by
/// keeping a signed unit step per axis.
pub struct SolidRasterizer;

impl SolidRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolidRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for SolidRasterizer {
    fn draw_line(&self, p0: Vec2, p1: Vec2, buffer: &mut FrameBuffer, color: Color) {
        // Round to integer pixel coordinates up front; the error term does
        // the sub-pixel reasoning from there.
        let mut x = (p0.x + 0.5) as i32;
        let mut y = (p0.y + 0.5) as i32;
        let x1 = (p1.x + 0.5) as i32;
        let y1 = (p1.y + 0.5) as i32;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };

        // The error term tracks the signed distance between the ideal line
        // and the pixel grid. dx and dy have opposite signs, so err starts
        // balanced between the two axes.
        let mut err = dx + dy;

        loop {
            buffer.write_pixel(x, y, color, 1.0);

            if x == x1 && y == y1 {
                break;
            }

            // Compare doubled error against each axis threshold; both
            // branches may fire, producing a diagonal step.
            let e2 = 2 * err;
            if e2 >= dy {
                // Guard against overshoot on horizontal / degenerate lines.
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> FrameBuffer {
        FrameBuffer::new(16, 16).unwrap()
    }

    fn lit_pixels(fb: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.pixel(x, y) != Some(Color::BLACK) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn horizontal_line_covers_exactly_its_span() {
        let mut fb = buffer();
        fb.clear(Color::BLACK);
        SolidRasterizer::new().draw_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            &mut fb,
            Color::WHITE,
        );
        assert_eq!(
            lit_pixels(&fb),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn zero_length_segment_sets_one_pixel() {
        let mut fb = buffer();
        fb.clear(Color::BLACK);
        SolidRasterizer::new().draw_line(
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 3.0),
            &mut fb,
            Color::WHITE,
        );
        assert_eq!(lit_pixels(&fb), vec![(3, 3)]);
    }

    #[test]
    fn diagonal_line_steps_once_per_column() {
        let mut fb = buffer();
        fb.clear(Color::BLACK);
        SolidRasterizer::new().draw_line(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 4.0),
            &mut fb,
            Color::WHITE,
        );
        assert_eq!(
            lit_pixels(&fb),
            vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
        );
    }

    #[test]
    fn reversed_segment_lights_both_endpoints_and_same_pixel_count() {
        let mut forward = buffer();
        let mut reverse = buffer();
        forward.clear(Color::BLACK);
        reverse.clear(Color::BLACK);
        let r = SolidRasterizer::new();
        r.draw_line(Vec2::new(1.0, 2.0), Vec2::new(9.0, 5.0), &mut forward, Color::WHITE);
        r.draw_line(Vec2::new(9.0, 5.0), Vec2::new(1.0, 2.0), &mut reverse, Color::WHITE);
        for lit in [lit_pixels(&forward), lit_pixels(&reverse)] {
            assert!(lit.contains(&(1, 2)));
            assert!(lit.contains(&(9, 5)));
            // one pixel per column for a shallow line
            assert_eq!(lit.len(), 9);
        }
    }

    #[test]
    fn steep_line_touches_every_row() {
        let mut fb = buffer();
        fb.clear(Color::BLACK);
        SolidRasterizer::new().draw_line(
            Vec2::new(2.0, 0.0),
            Vec2::new(4.0, 9.0),
            &mut fb,
            Color::WHITE,
        );
        let lit = lit_pixels(&fb);
        for y in 0..=9 {
            assert!(lit.iter().any(|&(_, py)| py == y), "row {y} not covered");
        }
    }

    #[test]
    fn offscreen_segment_leaves_buffer_untouched() {
        let mut fb = buffer();
        fb.clear(Color::BLACK);
        SolidRasterizer::new().draw_line(
            Vec2::new(-20.0, -3.0),
            Vec2::new(-4.0, -12.0),
            &mut fb,
            Color::WHITE,
        );
        assert!(lit_pixels(&fb).is_empty());
    }
}
