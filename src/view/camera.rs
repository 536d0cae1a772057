//! Orbit camera for the garden view
//!
//! The camera circles a fixed target on a sphere described by azimuth,
//! polar angle (measured from straight up) and distance. Limits keep the
//! view above the ground and facing the front of the garden.

use std::f32::consts::{FRAC_PI_2, PI};

use super::math::Vec3;
use super::ray::{Ray, RayCaster};

/// Vertical field of view in degrees
pub const FOV_Y_DEGREES: f32 = 70.0;

/// Orbit limits
pub mod limits {
    use super::{FRAC_PI_2, PI};

    /// Never tilt further than this from straight up (stays above the horizon)
    pub const MAX_POLAR: f32 = PI * 0.45;
    /// Keep a sliver away from the pole so the basis stays defined
    pub const MIN_POLAR: f32 = 0.01;
    pub const MIN_AZIMUTH: f32 = -FRAC_PI_2;
    pub const MAX_AZIMUTH: f32 = FRAC_PI_2;
    pub const MIN_DISTANCE: f32 = 100.0;
    pub const MAX_DISTANCE: f32 = 250.0;
}

/// Perspective camera orbiting a target point
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Surface width / height
    pub aspect: f32,
}

impl OrbitCamera {
    /// Camera placed at (0, 50, 100) looking at the origin
    pub fn new() -> Self {
        Self::looking_from(Vec3::new(0.0, 50.0, 100.0), Vec3::ZERO)
    }

    /// Build an orbit camera from an eye position and a target, then clamp to limits
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.len();
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
        let mut cam = Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar: horizontal.atan2(offset.y),
            distance,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: 1.0,
        };
        cam.clamp();
        cam
    }

    /// World position of the eye
    pub fn position(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target + Vec3::new(
            s * self.azimuth.sin(),
            self.polar.cos(),
            s * self.azimuth.cos(),
        ) * self.distance
    }

    /// Rotate around the target (radians)
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar += d_polar;
        self.clamp();
    }

    /// Move towards (negative) or away from (positive) the target
    pub fn zoom(&mut self, delta: f32) {
        self.distance += delta;
        self.clamp();
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    fn clamp(&mut self) {
        self.azimuth = self.azimuth.clamp(limits::MIN_AZIMUTH, limits::MAX_AZIMUTH);
        self.polar = self.polar.clamp(limits::MIN_POLAR, limits::MAX_POLAR);
        self.distance = self.distance.clamp(limits::MIN_DISTANCE, limits::MAX_DISTANCE);
    }

    /// Orthonormal (right, up, forward) basis of the view
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// macroquad camera matching this orbit
    pub fn to_camera3d(&self) -> macroquad::camera::Camera3D {
        macroquad::camera::Camera3D {
            position: self.position().into(),
            target: self.target.into(),
            up: macroquad::math::Vec3::Y,
            fovy: self.fov_y,
            aspect: Some(self.aspect),
            ..Default::default()
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl RayCaster for OrbitCamera {
    fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let (right, up, forward) = self.basis();
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;
        let direction = forward + right * (ndc_x * half_w) + up * (ndc_y * half_h);
        Ray::new(self.position(), direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_initial_position() {
        let cam = OrbitCamera::new();
        let p = cam.position();
        assert!(approx(p.x, 0.0), "x={}", p.x);
        assert!(approx(p.y, 50.0), "y={}", p.y);
        assert!(approx(p.z, 100.0), "z={}", p.z);
    }

    #[test]
    fn test_limits_are_enforced() {
        let mut cam = OrbitCamera::new();
        cam.orbit(10.0, 10.0);
        assert!(approx(cam.azimuth, limits::MAX_AZIMUTH));
        assert!(approx(cam.polar, limits::MAX_POLAR));

        cam.zoom(1000.0);
        assert!(approx(cam.distance, limits::MAX_DISTANCE));
        cam.zoom(-1000.0);
        assert!(approx(cam.distance, limits::MIN_DISTANCE));
    }

    #[test]
    fn test_center_ray_hits_target() {
        let mut cam = OrbitCamera::new();
        cam.set_aspect(1600.0, 900.0);
        let ray = cam.ray_from_ndc(0.0, 0.0);
        let to_target = (cam.target - ray.origin).normalize();
        assert!(ray.direction.dot(to_target) > 0.999);
    }

    #[test]
    fn test_ndc_y_up_points_above_center() {
        let cam = OrbitCamera::new();
        let center = cam.ray_from_ndc(0.0, 0.0);
        let upper = cam.ray_from_ndc(0.0, 0.5);
        assert!(upper.direction.y > center.direction.y);
    }
}
