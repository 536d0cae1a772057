//! Ray casting utilities for tile picking
//!
//! Converts pointer positions on the render surface into normalized device
//! coordinates, and from there into world-space rays through the camera.

use super::math::Vec3;
use crate::ui::Rect;

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,  // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get point at distance t along ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Anything that can turn a normalized device coordinate into a world ray.
///
/// NDC range is [-1, 1] on both axes with +Y pointing up.
pub trait RayCaster {
    fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> Ray;
}

/// Map a screen-space pointer position into NDC relative to `surface`.
///
/// Screen Y grows downward while NDC Y grows upward, hence the flip.
/// Returns None for a degenerate (zero-sized) surface.
pub fn screen_to_ndc(x: f32, y: f32, surface: &Rect) -> Option<(f32, f32)> {
    if surface.w <= 0.0 || surface.h <= 0.0 {
        return None;
    }
    let ndc_x = ((x - surface.x) / surface.w) * 2.0 - 1.0;
    let ndc_y = -(((y - surface.y) / surface.h) * 2.0 - 1.0);
    Some((ndc_x, ndc_y))
}

/// Find the intersection of a ray with a plane.
///
/// Returns the distance along the ray to the intersection point,
/// or None if the ray is parallel to the plane or intersection is behind ray origin.
pub fn ray_plane_intersection(
    ray: &Ray,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() < 0.0001 {
        return None;  // Ray parallel to plane
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;  // Intersection behind ray origin
    }

    Some(t)
}
