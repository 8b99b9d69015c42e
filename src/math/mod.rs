//! Vector and matrix math for the rendering pipeline.
//!
//! Pure value types with no hidden state. Degenerate inputs (normalizing a
//! zero-length vector) propagate NaN rather than panicking; callers are
//! expected to supply well-formed geometry.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
