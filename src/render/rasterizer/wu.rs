//! Anti-aliased line rasterizer using Xiaolin Wu's algorithm.

use super::LineRasterizer;
use crate::color::Color;
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Integer part of x, truncated toward zero.
#[inline]
fn ipart(x: f32) -> i32 {
    x as i32
}

#[inline]
fn round(x: f32) -> f32 {
    ipart(x + 0.5) as f32
}

/// Fractional part of x.
#[inline]
fn fpart(x: f32) -> f32 {
    x - ipart(x) as f32
}

/// One minus the fractional part of x.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Coverage-weighted line rasterizer.
///
/// Steps along the shallower axis and splits each step's intensity across
/// the two pixels straddling the ideal line, proportionally to how close
/// the line passes to each. Endpoint columns get an additional gap weight
/// for the sub-pixel overhang of the segment ends.
pub struct WuRasterizer;

impl WuRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for WuRasterizer {
    fn draw_line(&self, p0: Vec2, p1: Vec2, buffer: &mut FrameBuffer, color: Color) {
        let (mut x0, mut y0) = (p0.x, p0.y);
        let (mut x1, mut y1) = (p1.x, p1.y);

        // Swap axis roles for steep lines so the main loop always steps
        // along the longer screen extent.
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        // Always iterate left to right.
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        // dx == 0 only for degenerate segments after the steep swap; any
        // gradient works there since the loop body never runs.
        let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

        // First endpoint: snap to its pixel column, weight the two
        // straddling pixels by the fractional y there and the x gap.
        let xend = round(x0);
        let yend = y0 + gradient * (xend - x0);
        let xgap = rfpart(x0 + 0.5);
        let xpxl1 = xend as i32;
        let ypxl1 = ipart(yend);
        if steep {
            buffer.write_pixel(ypxl1, xpxl1, color, rfpart(yend) * xgap);
            buffer.write_pixel(ypxl1 + 1, xpxl1, color, fpart(yend) * xgap);
        } else {
            buffer.write_pixel(xpxl1, ypxl1, color, rfpart(yend) * xgap);
            buffer.write_pixel(xpxl1, ypxl1 + 1, color, fpart(yend) * xgap);
        }

        // First y-intersection for the main loop.
        let mut intery = yend + gradient;

        // Second endpoint, same treatment.
        let xend = round(x1);
        let yend = y1 + gradient * (xend - x1);
        let xgap = fpart(x1 + 0.5);
        let xpxl2 = xend as i32;
        let ypxl2 = ipart(yend);
        if steep {
            buffer.write_pixel(ypxl2, xpxl2, color, rfpart(yend) * xgap);
            buffer.write_pixel(ypxl2 + 1, xpxl2, color, fpart(yend) * xgap);
        } else {
            buffer.write_pixel(xpxl2, ypxl2, color, rfpart(yend) * xgap);
            buffer.write_pixel(xpxl2, ypxl2 + 1, color, fpart(yend) * xgap);
        }

        // Main loop: track the running y-intersection and split coverage
        // between the pixels above and below it.
        for x in (xpxl1 + 1)..xpxl2 {
            if steep {
                buffer.write_pixel(ipart(intery), x, color, rfpart(intery));
                buffer.write_pixel(ipart(intery) + 1, x, color, fpart(intery));
            } else {
                buffer.write_pixel(x, ipart(intery), color, rfpart(intery));
                buffer.write_pixel(x, ipart(intery) + 1, color, fpart(intery));
            }
            intery += gradient;
        }
    }
}
