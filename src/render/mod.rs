//! Frame buffer and rasterization internals.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{BufferError, FrameBuffer, PAGE_SIZE};
pub use rasterizer::{
    LineRasterizer, RasterizerDispatcher, RasterizerType, SolidRasterizer, WuRasterizer,
};
