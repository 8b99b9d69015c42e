//! Frame driver.
//!
//! The [`Engine`] owns the frame buffer, the camera, and the rasterizer,
//! and renders one fixed scene per [`Engine::draw`] call: a striped
//! ground-plane sample and a horizon line, viewed by a camera orbiting the
//! origin as a function of the frame time.

use tracing::{debug, trace};

use crate::camera::Camera;
use crate::color::Color;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::{BufferError, FrameBuffer};
use crate::render::rasterizer::{LineRasterizer, RasterizerDispatcher};

pub use crate::render::rasterizer::RasterizerType;

/// Every byte of the buffer is set to this before each frame (opaque
/// near-white background).
const CLEAR_BYTE: u8 = 255;

const STRIPE_COLOR: Color = Color::new(135, 155, 255, 255);
const HORIZON_COLOR: Color = Color::new(255, 155, 155, 255);

/// Stripe sweep across x, one vertical segment per step.
const STRIPE_SWEEP_START: f32 = -0.2;
const STRIPE_SWEEP_END: f32 = 0.2;
const STRIPE_STEP: f32 = 0.02;
const STRIPE_HALF_LENGTH: f32 = 0.15;

const HORIZON_Y: f32 = -0.11;
const HORIZON_START_X: f32 = -0.25;
const HORIZON_END_X: f32 = 0.22;

/// The rendering session state: frame buffer, view matrix, rasterizer.
///
/// One engine per session; each engine exclusively owns its buffer, so
/// frames never alias between instances. `draw` cannot fail once
/// construction has succeeded.
pub struct Engine {
    buffer: FrameBuffer,
    camera: Camera,
    rasterizer: RasterizerDispatcher,
}

impl Engine {
    /// Allocates the frame buffer and sets up an identity camera.
    ///
    /// Fails with [`BufferError::InvalidDimensions`] when either dimension
    /// is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let buffer = FrameBuffer::new(width, height)?;
        debug!(
            width,
            height,
            pages = FrameBuffer::pages_required(width, height),
            "framebuffer allocated"
        );
        Ok(Self {
            buffer,
            camera: Camera::new(),
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
        })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// The rendered frame as raw RGBA8 bytes, for the host to read after
    /// a `draw` call returns.
    pub fn frame_buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Renders one frame for time `dt`, in place.
    ///
    /// Clears the buffer, orbits the camera around the origin (with a
    /// small fast vertical bob), then projects and rasterizes the scene
    /// with the active rasterizer. Deterministic for a fixed `dt`.
    pub fn draw(&mut self, dt: f32) {
        trace!(dt, "drawing frame");
        self.buffer.clear_bytes(CLEAR_BYTE);

        let eye = Vec3::new(dt.sin(), dt.cos(), 1.0 + (dt * 15.0).sin() * 0.1);
        self.camera
            .update_view(eye, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let mut x = STRIPE_SWEEP_START;
        while x < STRIPE_SWEEP_END {
            self.draw_world_line(
                Vec3::new(x, -STRIPE_HALF_LENGTH, 0.0),
                Vec3::new(x, STRIPE_HALF_LENGTH, 0.0),
                STRIPE_COLOR,
            );
            x += STRIPE_STEP;
        }

        self.draw_world_line(
            Vec3::new(HORIZON_START_X, HORIZON_Y, 0.0),
            Vec3::new(HORIZON_END_X, HORIZON_Y, 0.0),
            HORIZON_COLOR,
        );
    }

    /// Projects a world-space segment and rasterizes it into the buffer.
    fn draw_world_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        let p0 = self.project(from);
        let p1 = self.project(to);
        self.rasterizer.draw_line(p0, p1, &mut self.buffer, color);
    }

    fn project(&self, world: Vec3) -> Vec2 {
        self.camera
            .project(world, self.buffer.width(), self.buffer.height())
    }
}
