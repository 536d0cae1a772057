//! View math: vectors, rays and the orbit camera
//!
//! - `math` - Vec3
//! - `ray` - Ray, NDC mapping, the `RayCaster` capability
//! - `camera` - OrbitCamera (implements `RayCaster`)

pub mod camera;
pub mod math;
pub mod ray;

pub use camera::OrbitCamera;
pub use math::Vec3;
pub use ray::{ray_plane_intersection, screen_to_ndc, Ray, RayCaster};
