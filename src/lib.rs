//! A CPU-based software line renderer.
//!
//! This crate projects world-space line segments through a look-at camera
//! onto an RGBA8 pixel buffer, entirely on the CPU. There is no window or
//! display layer: the embedding host calls [`Engine::draw`] once per tick
//! and reads the buffer afterwards.
//!
//! # Quick Start
//!
//! ```
//! use plotline::Engine;
//!
//! let mut engine = Engine::new(640, 480).expect("valid dimensions");
//! engine.draw(0.016);
//! let rgba = engine.frame_buffer();
//! assert_eq!(rgba.len(), 640 * 480 * 4);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod color;
pub mod engine;
pub mod math;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use color::Color;
pub use engine::{Engine, RasterizerType};
pub use render::framebuffer::BufferError;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use plotline::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, RasterizerType};

    // Camera
    pub use crate::camera::Camera;

    // Color
    pub use crate::color::Color;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        FrameBuffer, LineRasterizer, RasterizerDispatcher, SolidRasterizer, WuRasterizer,
    };
}
