// Transform utilities for Mat4
//
// Scene nodes keep their mesh in model space and carry a Mat4; these helpers
// bake that matrix into bounds, points and normals when a consumer needs
// world-space data.

use glam::{Mat3, Mat4, Vec3};
use crate::Aabb;

/// Extension trait for Mat4 to bake transforms into geometry.
pub trait Mat4Ext {
    /// Transform an axis-aligned bounding box.
    /// Computes the bounding box of all 8 transformed corners.
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb;

    /// Transform a slice of points (w=1).
    fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3>;

    /// Inverse-transpose of the upper 3x3, for carrying normals.
    fn normal_matrix(&self) -> Mat3;

    /// Transform surface normals and renormalize. Zero normals stay zero.
    fn transform_normals(&self, normals: &[Vec3]) -> Vec<Vec3>;
}

impl Mat4Ext for Mat4 {
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb {
        if aabb.is_empty() {
            return *aabb;
        }

        let transformed: Vec<Vec3> = aabb
            .corners()
            .iter()
            .map(|&corner| self.transform_point3(corner))
            .collect();

        Aabb::from_positions(&transformed)
    }

    fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.iter().map(|&p| self.transform_point3(p)).collect()
    }

    fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(*self).inverse().transpose()
    }

    fn transform_normals(&self, normals: &[Vec3]) -> Vec<Vec3> {
        let normal_matrix = self.normal_matrix();
        normals
            .iter()
            .map(|&n| (normal_matrix * n).normalize_or_zero())
            .collect()
    }
}
