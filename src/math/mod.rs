mod aabb;
mod color;
mod transform;

pub use aabb::AABB;
pub use color::{hex_to_rgb, scaled};
pub use transform::Transform;
