//! BodyFit Core - Measurement-driven body morphing and preview scene.
//!
//! This crate provides:
//!
//! - **Mesh import**: Wavefront OBJ to indexed triangle meshes
//! - **Morphing**: Gaussian-blended radial scaling from chest, waist, and hip circumferences
//! - **Primitives**: procedural overlay geometry (rings, floor, height arrow)
//! - **Scene composition**: `SceneComposer` ties the above together per measurement set
//! - **Measurement contract**: request and response types of the measurement service
//!
//! # Example
//!
//! ```ignore
//! use bodyfit_core::{MeasurementSet, SceneComposer, SceneConfig};
//!
//! let mut scene = SceneComposer::new(SceneConfig::default())?;
//! scene.load_body("assets/mannequin.obj")?;
//! scene.apply_measurements(&MeasurementSet::new(175.0, 98.0, 87.5, 101.5))?;
//! println!("{} triangles", scene.total_triangle_count());
//! ```

pub mod config;
pub mod measurement;
pub mod mesh;
pub mod morph;
pub mod obj;
pub mod primitives;
pub mod scene;

// Re-export commonly used types
pub use config::{load_json, ConfigError};
pub use measurement::{AnalyzeRequest, MeasurementResponse, MeasurementSet, PhotoSlot, PhotoSlots};
pub use mesh::{Mesh, Vertex};
pub use morph::{Calibration, MorphEngine};
pub use obj::{load_obj, load_obj_from_string};
pub use scene::{Band, Material, SceneComposer, SceneConfig, SceneError, SceneNode, Transform};
