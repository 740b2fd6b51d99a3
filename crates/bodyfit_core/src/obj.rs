//! Wavefront OBJ importer.
//!
//! Parsing is done by [`tobj`]; this module only turns its models into a
//! [`Mesh`]. Triangles and quads are accepted, quads are fan-split into
//! `(0,1,2)` and `(0,2,3)`. Face corners are not shared: each corner of each
//! face appends a fresh position, and smooth normals are accumulated over
//! the result. Texture coordinates, normals and materials in the file are
//! ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bodyfit_math::Vec3;
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur during OBJ parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ error: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("Face {face} of '{model}' has {corners} corners, only triangles and quads are supported")]
    UnsupportedFace {
        model: String,
        face: usize,
        corners: usize,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Faces stay as written so quads can be split here, and positions keep
/// their own index stream.
fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: false,
        triangulate: false,
        ..Default::default()
    }
}

/// Load an OBJ file from disk.
///
/// # Example
///
/// ```ignore
/// use bodyfit_core::obj::load_obj;
///
/// let mannequin = load_obj("assets/mannequin.obj")?;
/// println!("{} triangles", mannequin.triangle_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ParseResult<Mesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mesh = load_obj_from_reader(&mut reader)?;

    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Parse OBJ text that is already in memory.
pub fn load_obj_from_string(content: &str) -> ParseResult<Mesh> {
    let mut reader = content.as_bytes();
    load_obj_from_reader(&mut reader)
}

fn load_obj_from_reader<B: std::io::BufRead>(reader: &mut B) -> ParseResult<Mesh> {
    // Material libraries are never opened
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    let mut builder = MeshBuilder::default();
    for model in &models {
        builder.add_model(model)?;
    }
    Ok(builder.finish())
}

/// Accumulates unshared face corners across all models in a file.
#[derive(Default)]
struct MeshBuilder {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn add_model(&mut self, model: &tobj::Model) -> ParseResult<()> {
        let mesh = &model.mesh;
        let position = |index: u32| {
            let i = index as usize * 3;
            Vec3::from_slice(&mesh.positions[i..i + 3])
        };

        // tobj leaves face_arities empty when every face is a triangle
        let triangle_arities;
        let arities: &[u32] = if mesh.face_arities.is_empty() {
            triangle_arities = vec![3; mesh.indices.len() / 3];
            &triangle_arities
        } else {
            &mesh.face_arities
        };

        let mut next = 0;
        for (face, &arity) in arities.iter().enumerate() {
            let arity = arity as usize;
            if arity != 3 && arity != 4 {
                return Err(ParseError::UnsupportedFace {
                    model: model.name.clone(),
                    face,
                    corners: arity,
                });
            }

            let base = self.positions.len() as u32;
            for &index in &mesh.indices[next..next + arity] {
                self.positions.push(position(index));
            }
            next += arity;

            self.indices.extend_from_slice(&[base, base + 1, base + 2]);
            if arity == 4 {
                // Fan split, no ear clipping
                self.indices.extend_from_slice(&[base, base + 2, base + 3]);
            }
        }

        log::debug!("OBJ model '{}': {} faces", model.name, arities.len());
        Ok(())
    }

    fn finish(self) -> Mesh {
        Mesh::new(self.positions, self.indices, None).with_normals()
    }
}
