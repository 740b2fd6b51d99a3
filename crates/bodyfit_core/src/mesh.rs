//! Mesh geometry representation for bodyfit.
//!
//! This module provides a GPU-agnostic triangle mesh that the OBJ importer,
//! the morph engine and the primitive generators all produce, plus the
//! interleaved [`Vertex`] layout a renderer uploads.

use bodyfit_math::{Aabb, Mat4, Mat4Ext, Vec3};

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
///
/// Positions are in centimeters. Triangles are wound counter-clockwise when
/// seen from the side their normal points to.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals (optional - parallel to `positions` when present)
    pub normals: Option<Vec<Vec3>>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// If normals are not provided, they will NOT be automatically computed.
    /// Call `compute_normals()` explicitly if you need them.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        let bounds = Aabb::from_positions(&positions);
        Self {
            positions,
            normals,
            indices,
            bounds,
        }
    }

    /// An empty mesh, used as the seed when concatenating sub-meshes.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), None)
    }

    /// Compute smooth vertex normals by accumulating face normals.
    ///
    /// Each triangle adds its unnormalized `(p1 - p0) × (p2 - p0)` to its three
    /// corners, so larger faces weigh more. Vertices with no (or only
    /// degenerate) triangles keep a zero normal.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let edge1 = self.positions[i1] - p0;
            let edge2 = self.positions[i2] - p0;
            let face_normal = edge1.cross(edge2);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Builder-style variant of [`Mesh::compute_normals`].
    pub fn with_normals(mut self) -> Self {
        self.compute_normals();
        self
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Ensure the mesh has normals, computing them if necessary.
    /// Also recomputes if existing normals don't match vertex count.
    pub fn ensure_normals(&mut self) {
        let stale = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if stale {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Same topology, new positions. Normals are recomputed if this mesh had them.
    ///
    /// `positions` must have the same length as `self.positions`.
    pub fn with_positions(&self, positions: Vec<Vec3>) -> Mesh {
        debug_assert_eq!(positions.len(), self.positions.len());
        let mut mesh = Mesh::new(positions, self.indices.clone(), None);
        if self.has_normals() {
            mesh.compute_normals();
        }
        mesh
    }

    /// Append another mesh, offsetting its indices past this mesh's vertices.
    ///
    /// Normals survive only if both meshes carry them.
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.positions.len() as u32;
        let was_empty = self.positions.is_empty();

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            (None, Some(theirs)) if was_empty => Some(theirs.clone()),
            _ => None,
        };

        self.positions.extend_from_slice(&other.positions);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
        self.bounds = Aabb::surrounding(&self.bounds, &other.bounds);
    }

    /// Bake a transform into a copy of this mesh.
    pub fn transformed(&self, matrix: &Mat4) -> Mesh {
        let positions = matrix.transform_points(&self.positions);
        let normals = self
            .normals
            .as_ref()
            .map(|normals| matrix.transform_normals(normals));
        Mesh::new(positions, self.indices.clone(), normals)
    }

    /// Get the mesh center (center of bounding box).
    pub fn center(&self) -> Vec3 {
        self.bounds.centroid()
    }

    /// Vertical extent of the bounding box.
    pub fn size_y(&self) -> f32 {
        self.bounds.size_y()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// True if the index buffer is whole triangles and every index is in range.
    pub fn indices_valid(&self) -> bool {
        let count = self.positions.len();
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| (i as usize) < count)
    }

    /// Interleave positions and normals for upload.
    ///
    /// Missing normals are written as zero.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let n = self
                    .normals
                    .as_ref()
                    .and_then(|normals| normals.get(i).copied())
                    .unwrap_or(Vec3::ZERO);
                Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                }
            })
            .collect()
    }
}

/// GPU vertex layout (position + normal).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}
