//! Owned RGBA8 frame buffer with bounds-checked pixel access.
//!
//! The buffer is row-major, top-to-bottom, 4 bytes per pixel in R,G,B,A
//! order with no padding between rows. Backing storage is reserved in whole
//! 64 KiB pages, matching the allocation granularity of the linear-memory
//! hosts this renderer targets.

use thiserror::Error;

use crate::color::Color;

/// Allocation granularity of the backing memory (64 KiB).
pub const PAGE_SIZE: usize = 1 << 16;

/// Pages reserved beyond the pixel bytes when growing backing memory.
const PAGE_MARGIN: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// An owned pixel buffer of `width * height` RGBA8 pixels.
///
/// Dimensions are fixed at creation. Out-of-bounds writes are silently
/// dropped rather than reported, which keeps the rasterizer hot path free
/// of error plumbing; the rasterizers rely on this to avoid clipping.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a buffer for the given dimensions.
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is
    /// zero. Storage capacity is rounded up to whole pages via
    /// [`FrameBuffer::pages_required`].
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let bytes = width as usize * height as usize * 4;
        let mut pixels = Vec::with_capacity(Self::pages_required(width, height) * PAGE_SIZE);
        pixels.resize(bytes, 0);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Whole 64 KiB pages needed to back a buffer of the given dimensions,
    /// including a two-page safety margin. Exposed so an embedding host can
    /// grow its memory before handing the buffer out.
    pub fn pages_required(width: u32, height: u32) -> usize {
        (width as usize * height as usize * 4).div_ceil(PAGE_SIZE) + PAGE_MARGIN
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coarse clear: set every byte of the buffer to `value`.
    pub fn clear_bytes(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    /// Fine clear: set every pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Write one pixel, weighted by `coverage`.
    ///
    /// Coordinates outside `[0, width) x [0, height)` are silently dropped.
    /// Full coverage (1.0) stores the color channels unmodified. Partial
    /// coverage stores `channel * (1 - coverage)` for all four channels.
    /// That inverted weighting is not conventional alpha-over, but it is
    /// the formula the renderer's output is defined by; see the tests.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize * 4;
        if coverage >= 1.0 {
            self.pixels[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        } else {
            let weight = 1.0 - coverage;
            self.pixels[idx] = (color.r as f32 * weight) as u8;
            self.pixels[idx + 1] = (color.g as f32 * weight) as u8;
            self.pixels[idx + 2] = (color.b as f32 * weight) as u8;
            self.pixels[idx + 3] = (color.a as f32 * weight) as u8;
        }
    }

    /// Read the color at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        let idx = (y as u32 * self.width + x as u32) as usize * 4;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }

    /// The raw RGBA8 bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
