//! Math primitives for bodyfit.
//!
//! Re-exports [`glam`] and adds the small set of types the geometry core
//! needs on top of it: bounds, transform helpers and the orbit camera.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod camera;
mod interval;
mod transform;

pub use aabb::Aabb;
pub use camera::{Camera, CameraUniform, OrbitCamera};
pub use interval::Interval;
pub use transform::Mat4Ext;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_bounds_reexported() {
        let b = Aabb::from_points(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.size(), Vec3::new(2.0, 4.0, 6.0));
    }
}
