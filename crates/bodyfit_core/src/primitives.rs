//! Parametric primitive meshes for measurement overlays.
//!
//! Every generator is a pure function of its arguments and returns a mesh
//! with computed normals. Rings are built as quad strips (two triangles per
//! cell) wound so that the accumulated normals point away from the surface.
//!
//! | shape | vertices | triangles |
//! |---|---|---|
//! | [`disc`] | `s + 1` | `s` |
//! | [`cylinder`] | `2(s + 1)` | `2s` |
//! | [`cone`] | `2(s + 1)` | `s` |
//! | [`sphere`] | `(v + 1)(u + 1)` | `2uv` |
//! | [`torus`] | `(M + 1)(m + 1)` | `2Mm` |

use std::f32::consts::{PI, TAU};

use bodyfit_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur while generating primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Result type for primitive generation.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;

/// Fewest segments that still close a ring.
const MIN_RING_SEGMENTS: u32 = 3;

/// Below this, an axis is treated as parallel to the reference up vector.
const PARALLEL_EPSILON: f32 = 1e-6;

fn check_segments(name: &'static str, value: u32, min: u32) -> PrimitiveResult<()> {
    if value < min {
        return Err(PrimitiveError::InvalidParameter {
            name,
            reason: format!("need at least {}, got {}", min, value),
        });
    }
    Ok(())
}

fn check_finite(name: &'static str, value: f32) -> PrimitiveResult<()> {
    if !value.is_finite() {
        return Err(PrimitiveError::InvalidParameter {
            name,
            reason: format!("must be finite, got {}", value),
        });
    }
    Ok(())
}

fn check_point(name: &'static str, p: Vec3) -> PrimitiveResult<()> {
    if !p.is_finite() {
        return Err(PrimitiveError::InvalidParameter {
            name,
            reason: format!("must be finite, got {:?}", p),
        });
    }
    Ok(())
}

/// Unit direction of `v`, or an error if it has no length.
fn unit_direction(name: &'static str, v: Vec3) -> PrimitiveResult<Vec3> {
    v.try_normalize().ok_or_else(|| PrimitiveError::InvalidParameter {
        name,
        reason: "zero-length direction".to_string(),
    })
}

/// Orthonormal pair `(n, b)` perpendicular to the unit vector `dir`.
///
/// `n = dir × up` with up = +Y, or +X when `dir` is (anti)parallel to Y.
fn perpendicular_frame(dir: Vec3) -> (Vec3, Vec3) {
    let mut n = dir.cross(Vec3::Y);
    if n.length() < PARALLEL_EPSILON {
        n = dir.cross(Vec3::X);
    }
    let n = n.normalize();
    let b = dir.cross(n);
    (n, b)
}

/// Checks that a mesh of `count` vertices can be addressed with `u32` indices.
fn check_vertex_count(name: &'static str, count: u64) -> PrimitiveResult<usize> {
    u32::try_from(count)
        .map(|count| count as usize)
        .map_err(|_| PrimitiveError::InvalidParameter {
            name,
            reason: format!("{} vertices exceed the u32 index range", count),
        })
}

/// Vertex count of a `rows` x `cols` cell grid with duplicated seams.
fn grid_vertex_count(rows: u32, cols: u32) -> u64 {
    (rows as u64 + 1) * (cols as u64 + 1)
}

/// Angle of step `i` out of `segments` around a full turn.
fn ring_angle(i: u32, segments: u32) -> f32 {
    i as f32 * TAU / segments as f32
}

/// Flat disc in the plane `y`, facing +Y.
///
/// A center vertex plus `segments` rim vertices, fanned all the way round
/// including the wedge between the last and first rim vertex.
pub fn disc(y: f32, radius: f32, segments: u32) -> PrimitiveResult<Mesh> {
    check_segments("disc segments", segments, MIN_RING_SEGMENTS)?;
    check_finite("disc y", y)?;
    check_finite("disc radius", radius)?;
    let vertex_count = check_vertex_count("disc segments", grid_vertex_count(segments, 0))?;

    let mut positions = Vec::with_capacity(vertex_count);
    positions.push(Vec3::new(0.0, y, 0.0));
    for i in 0..segments {
        let a = ring_angle(i, segments);
        positions.push(Vec3::new(radius * a.cos(), y, radius * a.sin()));
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let current = 1 + i;
        let next = 1 + (i + 1) % segments;
        indices.extend_from_slice(&[0, next, current]);
    }

    Ok(Mesh::new(positions, indices, None).with_normals())
}

/// Open tube of `radius` from `p1` to `p2`.
///
/// Vertices alternate bottom/top around the ring; the seam is duplicated so
/// there are `segments + 1` pairs.
pub fn cylinder(p1: Vec3, p2: Vec3, radius: f32, segments: u32) -> PrimitiveResult<Mesh> {
    check_segments("cylinder segments", segments, MIN_RING_SEGMENTS)?;
    check_point("cylinder start", p1)?;
    check_point("cylinder end", p2)?;
    check_finite("cylinder radius", radius)?;
    let dir = unit_direction("cylinder axis", p2 - p1)?;
    let (n, b) = perpendicular_frame(dir);
    let vertex_count = check_vertex_count("cylinder segments", grid_vertex_count(segments, 1))?;

    let mut positions = Vec::with_capacity(vertex_count);
    for i in 0..=segments {
        let a = ring_angle(i, segments);
        let offset = (n * a.cos() + b * a.sin()) * radius;
        positions.push(p1 + offset);
        positions.push(p2 + offset);
    }

    let mut indices = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let (i0, i1, i2, i3) = (i * 2, i * 2 + 1, (i + 1) * 2, (i + 1) * 2 + 1);
        indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
    }

    Ok(Mesh::new(positions, indices, None).with_normals())
}

/// UV sphere: `seg_v + 1` latitude rings (pole to pole) of `seg_u + 1` vertices.
pub fn sphere(center: Vec3, radius: f32, seg_u: u32, seg_v: u32) -> PrimitiveResult<Mesh> {
    check_segments("sphere longitude segments", seg_u, MIN_RING_SEGMENTS)?;
    check_segments("sphere latitude segments", seg_v, 2)?;
    check_point("sphere center", center)?;
    check_finite("sphere radius", radius)?;
    let vertex_count = check_vertex_count("sphere segments", grid_vertex_count(seg_v, seg_u))?;

    let mut positions = Vec::with_capacity(vertex_count);
    for v in 0..=seg_v {
        let phi = v as f32 * PI / seg_v as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for u in 0..=seg_u {
            let theta = ring_angle(u, seg_u);
            positions.push(
                center
                    + Vec3::new(
                        radius * sin_phi * theta.cos(),
                        radius * cos_phi,
                        radius * sin_phi * theta.sin(),
                    ),
            );
        }
    }

    let cols = seg_u + 1;
    let mut indices = Vec::with_capacity(seg_u as usize * seg_v as usize * 6);
    for v in 0..seg_v {
        for u in 0..seg_u {
            let i0 = v * cols + u;
            let i1 = i0 + 1;
            let i2 = i0 + cols;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
        }
    }

    Ok(Mesh::new(positions, indices, None).with_normals())
}

/// Cone with its point at `tip`, opening back along `-direction`.
///
/// Base ring vertices alternate with copies of the tip; each segment is a
/// single fan triangle. The base is left open.
pub fn cone(
    tip: Vec3,
    direction: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
) -> PrimitiveResult<Mesh> {
    check_segments("cone segments", segments, MIN_RING_SEGMENTS)?;
    check_point("cone tip", tip)?;
    check_finite("cone radius", radius)?;
    check_finite("cone height", height)?;
    let dir = unit_direction("cone direction", direction)?;
    let (n, b) = perpendicular_frame(dir);
    let base_center = tip - dir * height;
    let vertex_count = check_vertex_count("cone segments", grid_vertex_count(segments, 1))?;

    let mut positions = Vec::with_capacity(vertex_count);
    for i in 0..=segments {
        let a = ring_angle(i, segments);
        positions.push(base_center + (n * a.cos() + b * a.sin()) * radius);
        positions.push(tip);
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let (base, apex, next_base) = (i * 2, i * 2 + 1, (i + 1) * 2);
        indices.extend_from_slice(&[base, next_base, apex]);
    }

    Ok(Mesh::new(positions, indices, None).with_normals())
}

/// Ring around the Y axis at height `y`.
///
/// `major_segments + 1` steps around the ring, each a tube cross-section of
/// `minor_segments + 1` vertices.
pub fn torus(
    y: f32,
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> PrimitiveResult<Mesh> {
    check_segments("torus major segments", major_segments, MIN_RING_SEGMENTS)?;
    check_segments("torus minor segments", minor_segments, MIN_RING_SEGMENTS)?;
    check_finite("torus y", y)?;
    check_finite("torus major radius", major_radius)?;
    check_finite("torus minor radius", minor_radius)?;
    let vertex_count = check_vertex_count(
        "torus segments",
        grid_vertex_count(major_segments, minor_segments),
    )?;

    let cols = minor_segments + 1;
    let mut positions = Vec::with_capacity(vertex_count);
    for i in 0..=major_segments {
        let (sin_a, cos_a) = ring_angle(i, major_segments).sin_cos();
        for j in 0..=minor_segments {
            let (sin_b, cos_b) = ring_angle(j, minor_segments).sin_cos();
            let reach = major_radius + minor_radius * cos_b;
            positions.push(Vec3::new(reach * cos_a, y + minor_radius * sin_b, reach * sin_a));
        }
    }

    let mut indices = Vec::with_capacity(major_segments as usize * minor_segments as usize * 6);
    for i in 0..major_segments {
        for j in 0..minor_segments {
            let i0 = i * cols + j;
            let i1 = i0 + 1;
            let i2 = (i + 1) * cols + j;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
        }
    }

    Ok(Mesh::new(positions, indices, None).with_normals())
}

/// Cylinder with a sphere on each end.
pub fn capsule(p1: Vec3, p2: Vec3, radius: f32, segments: u32) -> PrimitiveResult<Mesh> {
    let latitude = (segments / 2).max(2);
    check_vertex_count(
        "capsule segments",
        grid_vertex_count(segments, 1) + 2 * grid_vertex_count(latitude, segments),
    )?;

    let mut mesh = cylinder(p1, p2, radius, segments)?;
    mesh.append(&sphere(p1, radius, segments, latitude)?);
    mesh.append(&sphere(p2, radius, segments, latitude)?);
    Ok(mesh)
}

/// Proportions of the double-headed height arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    /// Horizontal placement of the shaft (x, z); y comes from the arrow span
    pub x: f32,
    pub z: f32,
    pub shaft_radius: f32,
    pub shaft_segments: u32,
    pub head_radius: f32,
    pub head_height: f32,
    pub head_segments: u32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            x: 0.0,
            z: -35.0,
            shaft_radius: 0.6,
            shaft_segments: 32,
            head_radius: 3.0,
            head_height: 6.0,
            head_segments: 32,
        }
    }
}

/// Vertical double-headed arrow from `y_bottom` to `y_top`, default style.
pub fn arrow(y_bottom: f32, y_top: f32) -> PrimitiveResult<Mesh> {
    arrow_with(y_bottom, y_top, &ArrowStyle::default())
}

/// Shaft, then the upward head at `y_top`, then the downward head at
/// `y_bottom`, concatenated in that order.
pub fn arrow_with(y_bottom: f32, y_top: f32, style: &ArrowStyle) -> PrimitiveResult<Mesh> {
    check_vertex_count(
        "arrow segments",
        grid_vertex_count(style.shaft_segments, 1) + 2 * grid_vertex_count(style.head_segments, 1),
    )?;

    let bottom = Vec3::new(style.x, y_bottom, style.z);
    let top = Vec3::new(style.x, y_top, style.z);

    let shaft = cylinder(bottom, top, style.shaft_radius, style.shaft_segments)?;
    let up_head = cone(
        top,
        Vec3::Y,
        style.head_radius,
        style.head_height,
        style.head_segments,
    )?;
    let down_head = cone(
        bottom,
        Vec3::NEG_Y,
        style.head_radius,
        style.head_height,
        style.head_segments,
    )?;

    let mut mesh = Mesh::empty();
    mesh.append(&shaft);
    mesh.append(&up_head);
    mesh.append(&down_head);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_at(mesh: &Mesh, index: usize) -> Vec3 {
        mesh.normals.as_ref().unwrap()[index]
    }

    #[test]
    fn test_disc_counts_and_closure() {
        let mesh = disc(0.0, 60.0, 96).unwrap();

        assert_eq!(mesh.vertex_count(), 97);
        assert_eq!(mesh.triangle_count(), 96);
        assert!(mesh.indices_valid());

        // Closing wedge joins the last rim vertex back to the first
        let last = &mesh.indices[mesh.indices.len() - 3..];
        assert_eq!(last, &[0, 1, 96]);
    }

    #[test]
    fn test_disc_faces_up() {
        let mesh = disc(2.5, 10.0, 12).unwrap();
        for n in mesh.normals.as_ref().unwrap() {
            assert!((*n - Vec3::Y).length() < 1e-4);
        }
        for p in &mesh.positions {
            assert_eq!(p.y, 2.5);
        }
    }

    #[test]
    fn test_cylinder_counts_and_radius() {
        let p1 = Vec3::new(0.0, 0.0, -35.0);
        let p2 = Vec3::new(0.0, 175.0, -35.0);
        let mesh = cylinder(p1, p2, 0.6, 32).unwrap();

        assert_eq!(mesh.vertex_count(), 2 * 33);
        assert_eq!(mesh.triangle_count(), 64);
        assert!(mesh.indices_valid());

        for (i, p) in mesh.positions.iter().enumerate() {
            let expected_y = if i % 2 == 0 { 0.0 } else { 175.0 };
            assert!((p.y - expected_y).abs() < 1e-4);
            let r = ((p.x * p.x) + (p.z + 35.0) * (p.z + 35.0)).sqrt();
            assert!((r - 0.6).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_normals_point_outward() {
        // Slanted axis exercises the Y-up frame, vertical axis the X fallback
        for (p1, p2) in [
            (Vec3::ZERO, Vec3::new(10.0, 3.0, -2.0)),
            (Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)),
            (Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO),
        ] {
            let mesh = cylinder(p1, p2, 2.0, 16).unwrap();
            let axis = (p2 - p1).normalize();
            for (i, p) in mesh.positions.iter().enumerate() {
                let along = (*p - p1).dot(axis);
                let radial = (*p - p1 - axis * along).normalize();
                assert!(normal_at(&mesh, i).dot(radial) > 0.9);
            }
        }
    }

    #[test]
    fn test_sphere_counts_and_radius() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let mesh = sphere(center, 5.0, 24, 16).unwrap();

        assert_eq!(mesh.vertex_count(), 17 * 25);
        assert_eq!(mesh.triangle_count(), 2 * 24 * 16);
        assert!(mesh.indices_valid());

        for p in &mesh.positions {
            assert!(((*p - center).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_equator_normals_outward() {
        let mesh = sphere(Vec3::ZERO, 1.0, 16, 8).unwrap();
        // Row 4 of 8 is the equator
        let cols = 17;
        for u in 0..16 {
            let i = 4 * cols + u;
            let outward = mesh.positions[i].normalize();
            assert!(normal_at(&mesh, i).dot(outward) > 0.95);
        }
    }

    #[test]
    fn test_cone_shape() {
        let tip = Vec3::new(0.0, 175.0, -35.0);
        let mesh = cone(tip, Vec3::new(0.0, 2.0, 0.0), 3.0, 6.0, 32).unwrap();

        assert_eq!(mesh.vertex_count(), 66);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.indices_valid());

        for (i, p) in mesh.positions.iter().enumerate() {
            if i % 2 == 1 {
                assert_eq!(*p, tip);
            } else {
                assert!((p.y - 169.0).abs() < 1e-4);
                let r = (p.x * p.x + (p.z + 35.0) * (p.z + 35.0)).sqrt();
                assert!((r - 3.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_cone_normals_point_away_from_axis() {
        for dir in [Vec3::Y, Vec3::NEG_Y, Vec3::new(1.0, 1.0, 0.0)] {
            let tip = Vec3::ZERO;
            let mesh = cone(tip, dir, 3.0, 6.0, 24).unwrap();
            let axis = dir.normalize();
            for i in (0..mesh.vertex_count()).step_by(2) {
                let p = mesh.positions[i];
                let along = p.dot(axis);
                let radial = (p - axis * along).normalize();
                let n = normal_at(&mesh, i);
                assert!(n.dot(radial) > 0.5);
                // Lateral surface leans toward the tip
                assert!(n.dot(axis) > 0.0);
            }
        }
    }

    #[test]
    fn test_torus_counts() {
        let mesh = torus(120.0, 15.9, 0.8, 128, 12).unwrap();

        assert_eq!(mesh.vertex_count(), 129 * 13);
        assert_eq!(mesh.triangle_count(), 2 * 128 * 12);
        assert!(mesh.indices_valid());
    }

    #[test]
    fn test_torus_radius_bounds() {
        let (big_r, small_r) = (10.0, 2.0);
        let mesh = torus(0.0, big_r, small_r, 48, 12).unwrap();

        for p in &mesh.positions {
            let d = (p.x * p.x + p.z * p.z).sqrt();
            assert!(d >= big_r - small_r - 1e-4 && d <= big_r + small_r + 1e-4);
            assert!(p.y >= -small_r - 1e-4 && p.y <= small_r + 1e-4);
        }
    }

    #[test]
    fn test_torus_normals_point_away_from_tube_center() {
        let mesh = torus(5.0, 10.0, 2.0, 48, 16).unwrap();
        for (i, p) in mesh.positions.iter().enumerate() {
            let horizontal = Vec3::new(p.x, 0.0, p.z).normalize();
            let tube_center = horizontal * 10.0 + Vec3::new(0.0, 5.0, 0.0);
            let outward = (*p - tube_center).normalize();
            assert!(normal_at(&mesh, i).dot(outward) > 0.9);
        }
    }

    #[test]
    fn test_arrow_composite_indices() {
        let mesh = arrow(0.0, 175.0).unwrap();
        let part = 2 * 33u32;

        assert_eq!(mesh.vertex_count(), 3 * part as usize);
        assert_eq!(mesh.triangle_count(), 64 + 32 + 32);
        assert!(mesh.indices_valid());
        assert_eq!(mesh.normals.as_ref().map(Vec::len), Some(mesh.vertex_count()));

        // No triangle straddles two sub-meshes
        for [a, b, c] in mesh.triangles() {
            let range = a / part;
            assert_eq!(b / part, range);
            assert_eq!(c / part, range);
        }

        // Shaft triangles first, then the up head, then the down head
        let tri_ranges: Vec<u32> = mesh.triangles().map(|[a, _, _]| a / part).collect();
        assert!(tri_ranges[..64].iter().all(|&r| r == 0));
        assert!(tri_ranges[64..96].iter().all(|&r| r == 1));
        assert!(tri_ranges[96..].iter().all(|&r| r == 2));

        // Heads point away from each other
        assert!((mesh.positions[part as usize + 1].y - 175.0).abs() < 1e-4);
        assert!((mesh.positions[2 * part as usize + 1].y).abs() < 1e-4);
        assert!((mesh.bounds.y.max - 175.0).abs() < 1e-3);
        assert!((mesh.bounds.y.min).abs() < 1e-3);
    }

    #[test]
    fn test_arrow_style_placement() {
        let style = ArrowStyle {
            x: 40.0,
            z: 0.0,
            ..ArrowStyle::default()
        };
        let mesh = arrow_with(10.0, 20.0, &style).unwrap();
        assert!((mesh.center().x - 40.0).abs() < 1e-3);
        assert!(mesh.center().z.abs() < 1e-3);
    }

    #[test]
    fn test_capsule_counts() {
        let mesh = capsule(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 1.0, 16).unwrap();
        let cylinder_vertices = 2 * 17;
        let sphere_vertices = 9 * 17;

        assert_eq!(mesh.vertex_count(), cylinder_vertices + 2 * sphere_vertices);
        assert!(mesh.indices_valid());
        assert!((mesh.bounds.y.max - 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_generators_are_deterministic() {
        let a = torus(100.0, 13.0, 0.8, 64, 12).unwrap();
        let b = torus(100.0, 13.0, 0.8, 64, 12).unwrap();
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_degenerate_segments_rejected() {
        assert!(matches!(
            disc(0.0, 1.0, 0),
            Err(PrimitiveError::InvalidParameter { name: "disc segments", .. })
        ));
        assert!(cylinder(Vec3::ZERO, Vec3::Y, 1.0, 2).is_err());
        assert!(sphere(Vec3::ZERO, 1.0, 8, 1).is_err());
        assert!(cone(Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0).is_err());
        assert!(torus(0.0, 1.0, 0.1, 8, 0).is_err());
        assert!(torus(0.0, 1.0, 0.1, 0, 8).is_err());

        let style = ArrowStyle {
            head_segments: 1,
            ..ArrowStyle::default()
        };
        assert!(arrow_with(0.0, 10.0, &style).is_err());
    }

    #[test]
    fn test_oversized_segments_rejected() {
        let err = torus(0.0, 1.0, 0.1, 70_000, 70_000).unwrap_err();
        assert!(matches!(err, PrimitiveError::InvalidParameter { name: "torus segments", .. }));

        assert!(disc(0.0, 1.0, u32::MAX).is_err());
        assert!(cylinder(Vec3::ZERO, Vec3::Y, 1.0, u32::MAX / 2).is_err());
        assert!(cone(Vec3::ZERO, Vec3::Y, 1.0, 1.0, u32::MAX).is_err());
        assert!(sphere(Vec3::ZERO, 1.0, u32::MAX, 2).is_err());
        assert!(capsule(Vec3::ZERO, Vec3::Y, 1.0, 100_000).is_err());

        // Each part fits on its own, the merged arrow would not
        let style = ArrowStyle {
            shaft_segments: u32::MAX / 2 - 1,
            ..ArrowStyle::default()
        };
        let err = arrow_with(0.0, 10.0, &style).unwrap_err();
        assert!(matches!(err, PrimitiveError::InvalidParameter { name: "arrow segments", .. }));
    }

    #[test]
    fn test_degenerate_geometry_rejected() {
        let err = cylinder(Vec3::ONE, Vec3::ONE, 1.0, 8).unwrap_err();
        assert!(matches!(err, PrimitiveError::InvalidParameter { name: "cylinder axis", .. }));

        assert!(cone(Vec3::ZERO, Vec3::ZERO, 1.0, 1.0, 8).is_err());
        assert!(arrow(50.0, 50.0).is_err());
        assert!(torus(f32::NAN, 1.0, 0.1, 8, 8).is_err());
        assert!(disc(0.0, f32::INFINITY, 8).is_err());
    }
}
