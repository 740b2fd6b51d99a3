//! Scene composition for the measurement preview.
//!
//! The [`SceneComposer`] owns the base body (and optional garment) meshes,
//! their current morphs, and the overlay primitives. Every new measurement
//! set tears down and rebuilds the overlays; nothing is patched in place
//! except the height arrow, which is created on first use and then has its
//! geometry replaced.

use std::path::Path;
use std::sync::Arc;

use bodyfit_math::{Aabb, Mat4, Mat4Ext, Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::{MeasurementError, MeasurementSet};
use crate::mesh::Mesh;
use crate::morph::{circumference_to_radius, Calibration, MorphEngine, MorphError};
use crate::obj::{load_obj, ParseError};
use crate::primitives::{arrow_with, disc, torus, ArrowStyle, PrimitiveError};

/// Errors that can occur while composing the scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error("Morph error: {0}")]
    Morph(#[from] MorphError),

    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Flat-shaded material for preview rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,

    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Vec3,

    /// Opacity (0=transparent, 1=opaque)
    pub opacity: f32,

    /// Specular exponent, 0 for none
    pub specular_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_color: Vec3::new(0.5, 0.5, 0.5),
            opacity: 1.0,
            specular_power: 0.0,
        }
    }
}

impl Material {
    /// Create a new material with just a name and diffuse color.
    pub fn new(name: impl Into<String>, diffuse_color: Vec3) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Diffuse color from 8-bit channels.
    pub fn from_rgb8(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self::new(
            name,
            Vec3::new(r as f32, g as f32, b as f32) / 255.0,
        )
    }

    pub fn with_specular(mut self, power: f32) -> Self {
        self.specular_power = power;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn body() -> Self {
        Self::from_rgb8("body", 226, 229, 234).with_specular(60.0)
    }

    pub fn garment() -> Self {
        Self::from_rgb8("garment", 150, 152, 158).with_specular(40.0)
    }

    pub fn ring() -> Self {
        Self::from_rgb8("ring", 36, 171, 84)
    }

    pub fn arrow() -> Self {
        Self::from_rgb8("arrow", 120, 120, 120)
    }

    pub fn floor() -> Self {
        Self::from_rgb8("floor", 0, 0, 0).with_opacity(20.0 / 255.0)
    }
}

/// Transform components that can be composed into a matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with only translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Create a new transform with only a uniform scale.
    pub fn from_uniform_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Default::default()
        }
    }

    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A mesh placed in the scene.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Transform,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, mesh: Mesh, material: Material) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            transform: Transform::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Bounds after the node transform.
    pub fn world_bounds(&self) -> Aabb {
        self.transform.to_matrix().transform_aabb(&self.mesh.bounds)
    }

    /// Copy of the mesh with the node transform baked in.
    pub fn world_mesh(&self) -> Mesh {
        self.mesh.transformed(&self.transform.to_matrix())
    }
}

/// Which band a measurement ring marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Chest,
    Waist,
    Hips,
    Neck,
}

impl Band {
    pub fn name(self) -> &'static str {
        match self {
            Band::Chest => "chest",
            Band::Waist => "waist",
            Band::Hips => "hips",
            Band::Neck => "neck",
        }
    }
}

/// A measurement ring overlay.
#[derive(Clone, Debug)]
pub struct Ring {
    pub band: Band,
    /// Absolute height of the ring center, cm
    pub y: f32,
    pub radius: f32,
    pub node: SceneNode,
}

/// Tube and tessellation of the measurement rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    pub tube_radius: f32,
    pub neck_tube_radius: f32,
    pub major_segments: u32,
    pub minor_segments: u32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            tube_radius: 0.8,
            neck_tube_radius: 0.6,
            major_segments: 128,
            minor_segments: 12,
        }
    }
}

/// Floor disc under the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorStyle {
    pub radius: f32,
    pub segments: u32,
    /// Raised slightly to avoid z-fighting with a ground grid
    pub lift: f32,
}

impl Default for FloorStyle {
    fn default() -> Self {
        Self {
            radius: 60.0,
            segments: 96,
            lift: 0.1,
        }
    }
}

/// Everything configurable about the composed scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub calibration: Calibration,
    pub rings: RingStyle,
    pub floor: FloorStyle,
    pub arrow: ArrowStyle,
}

impl SceneConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> crate::config::ConfigResult<Self> {
        crate::config::load_json(path)
    }
}

/// Below this base height (cm) the height scale is not applied.
const MIN_BASE_HEIGHT: f32 = 1.0;

/// Holds the base meshes and rebuilds the preview scene per measurement set.
pub struct SceneComposer {
    config: SceneConfig,
    engine: MorphEngine,
    body_base: Option<Arc<Mesh>>,
    garment_base: Option<Arc<Mesh>>,
    body: Option<SceneNode>,
    garment: Option<SceneNode>,
    floor: SceneNode,
    rings: Vec<Ring>,
    height_arrow: Option<SceneNode>,
    measurements: Option<MeasurementSet>,
}

impl SceneComposer {
    /// Create an empty scene. The floor disc is built immediately.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        let floor_style = &config.floor;
        let floor_mesh = disc(0.0, floor_style.radius, floor_style.segments)?;
        let floor = SceneNode::new("floor", floor_mesh, Material::floor())
            .with_transform(Transform::from_translation(Vec3::new(0.0, floor_style.lift, 0.0)));

        Ok(Self {
            engine: MorphEngine::new(config.calibration.clone()),
            config,
            body_base: None,
            garment_base: None,
            body: None,
            garment: None,
            floor,
            rings: Vec::new(),
            height_arrow: None,
            measurements: None,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Install the reference body mesh.
    ///
    /// If measurements were already applied, the new body is morphed to
    /// them straight away.
    pub fn set_body(&mut self, mut mesh: Mesh) -> SceneResult<()> {
        mesh.ensure_normals();
        let base = Arc::new(mesh);
        self.body = Some(SceneNode::new("body", (*base).clone(), Material::body()));
        self.body_base = Some(base);
        self.reapply()
    }

    /// Install an optional garment mesh calibrated against the same bands.
    pub fn set_garment(&mut self, mut mesh: Mesh) -> SceneResult<()> {
        mesh.ensure_normals();
        let base = Arc::new(mesh);
        self.garment = Some(SceneNode::new("garment", (*base).clone(), Material::garment()));
        self.garment_base = Some(base);
        self.reapply()
    }

    /// Load the body from an OBJ file.
    ///
    /// An unreadable or malformed file is logged and leaves the scene
    /// without a body (`Ok(false)`); overlays keep working.
    pub fn load_body<P: AsRef<Path>>(&mut self, path: P) -> SceneResult<bool> {
        let path = path.as_ref();
        match load_obj(path) {
            Ok(mesh) => {
                self.set_body(mesh)?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("No body mesh available ({}): {}", path.display(), e);
                self.body_base = None;
                self.body = None;
                Ok(false)
            }
        }
    }

    /// Load the garment from an OBJ file if it exists.
    ///
    /// Like [`load_body`](Self::load_body), a missing or malformed file
    /// leaves the scene without a garment (`Ok(false)`).
    pub fn load_garment<P: AsRef<Path>>(&mut self, path: P) -> SceneResult<bool> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No garment at {}, skipping", path.display());
            self.clear_garment();
            return Ok(false);
        }
        match load_obj(path) {
            Ok(mesh) => {
                self.set_garment(mesh)?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("No garment mesh available ({}): {}", path.display(), e);
                self.clear_garment();
                Ok(false)
            }
        }
    }

    fn clear_garment(&mut self) {
        self.garment_base = None;
        self.garment = None;
    }

    /// Morph the meshes and rebuild every overlay for a new measurement set.
    ///
    /// All geometry is built before anything is replaced, so on error the
    /// scene is left as it was.
    pub fn apply_measurements(&mut self, measurements: &MeasurementSet) -> SceneResult<()> {
        measurements.validate()?;

        let scale = self.height_scale(measurements.height_cm);
        let body = self.morph_node(self.body_base.as_deref(), "body", Material::body(), measurements, scale)?;
        let garment = self.morph_node(
            self.garment_base.as_deref(),
            "garment",
            Material::garment(),
            measurements,
            scale,
        )?;
        let rings = self.build_rings(measurements)?;
        let arrow_mesh = arrow_with(0.0, measurements.height_cm, &self.config.arrow)?;

        self.body = body;
        self.garment = garment;
        self.rings = rings;
        self.upsert_height_arrow(arrow_mesh);
        self.measurements = Some(*measurements);

        log::info!(
            "Applied measurements: height {:.1} chest {:.1} waist {:.1} hips {:.1} (scale {:.3})",
            measurements.height_cm,
            measurements.chest_cm,
            measurements.waist_cm,
            measurements.hips_cm,
            scale
        );
        Ok(())
    }

    /// Drop the morph and overlays, keeping the loaded assets and floor.
    pub fn reset(&mut self) {
        self.body = self
            .body_base
            .as_ref()
            .map(|base| SceneNode::new("body", (**base).clone(), Material::body()));
        self.garment = self
            .garment_base
            .as_ref()
            .map(|base| SceneNode::new("garment", (**base).clone(), Material::garment()));
        self.rings.clear();
        self.height_arrow = None;
        self.measurements = None;
    }

    pub fn body(&self) -> Option<&SceneNode> {
        self.body.as_ref()
    }

    pub fn body_base(&self) -> Option<&Mesh> {
        self.body_base.as_deref()
    }

    pub fn garment(&self) -> Option<&SceneNode> {
        self.garment.as_ref()
    }

    pub fn floor(&self) -> &SceneNode {
        &self.floor
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ring(&self, band: Band) -> Option<&Ring> {
        self.rings.iter().find(|ring| ring.band == band)
    }

    pub fn height_arrow(&self) -> Option<&SceneNode> {
        self.height_arrow.as_ref()
    }

    /// The last successfully applied measurement set.
    pub fn measurements(&self) -> Option<&MeasurementSet> {
        self.measurements.as_ref()
    }

    /// Every node in draw order: floor, body, garment, rings, arrow.
    pub fn nodes(&self) -> Vec<&SceneNode> {
        let mut nodes = vec![&self.floor];
        nodes.extend(self.body.iter());
        nodes.extend(self.garment.iter());
        nodes.extend(self.rings.iter().map(|ring| &ring.node));
        nodes.extend(self.height_arrow.iter());
        nodes
    }

    /// Total triangle count across all nodes.
    pub fn total_triangle_count(&self) -> usize {
        self.nodes().iter().map(|node| node.mesh.triangle_count()).sum()
    }

    /// World-space bounds of everything in the scene.
    pub fn world_bounds(&self) -> Aabb {
        self.nodes()
            .iter()
            .fold(Aabb::EMPTY, |acc, node| Aabb::surrounding(&acc, &node.world_bounds()))
    }

    /// Uniform scale mapping the reference mesh height onto `height_cm`.
    fn height_scale(&self, height_cm: f32) -> f32 {
        let Some(reference) = self.body_base.as_ref().or(self.garment_base.as_ref()) else {
            return 1.0;
        };
        let base_height = reference.size_y();
        if base_height > MIN_BASE_HEIGHT {
            height_cm / base_height
        } else {
            log::warn!(
                "Reference mesh is only {:.3} cm tall, not scaling to {:.1} cm",
                base_height,
                height_cm
            );
            1.0
        }
    }

    fn morph_node(
        &self,
        base: Option<&Mesh>,
        name: &str,
        material: Material,
        measurements: &MeasurementSet,
        scale: f32,
    ) -> SceneResult<Option<SceneNode>> {
        let Some(base) = base else {
            return Ok(None);
        };
        let morphed = self.engine.morph(base, measurements)?;
        Ok(Some(
            SceneNode::new(name, morphed, material).with_transform(Transform::from_uniform_scale(scale)),
        ))
    }

    /// Rings sit at calibration fractions of the target height.
    fn build_rings(&self, m: &MeasurementSet) -> SceneResult<Vec<Ring>> {
        let calibration = self.engine.calibration();
        let style = &self.config.rings;
        let chest_radius = circumference_to_radius(m.chest_cm);

        let specs = [
            (Band::Chest, calibration.chest.fraction, chest_radius, style.tube_radius),
            (
                Band::Waist,
                calibration.waist.fraction,
                circumference_to_radius(m.waist_cm),
                style.tube_radius,
            ),
            (
                Band::Hips,
                calibration.hips.fraction,
                circumference_to_radius(m.hips_cm),
                style.tube_radius,
            ),
            (
                Band::Neck,
                calibration.neck.fraction,
                chest_radius * calibration.neck.chest_ratio,
                style.neck_tube_radius,
            ),
        ];

        specs
            .into_iter()
            .map(|(band, fraction, radius, tube)| {
                let y = m.height_cm * fraction;
                let mesh = torus(y, radius, tube, style.major_segments, style.minor_segments)?;
                Ok(Ring {
                    band,
                    y,
                    radius,
                    node: SceneNode::new(format!("ring_{}", band.name()), mesh, Material::ring()),
                })
            })
            .collect()
    }

    /// Create the arrow node on first use, afterwards only swap its mesh.
    fn upsert_height_arrow(&mut self, mesh: Mesh) {
        match &mut self.height_arrow {
            Some(node) => node.mesh = mesh,
            None => self.height_arrow = Some(SceneNode::new("height_arrow", mesh, Material::arrow())),
        }
    }

    /// Re-run the last measurement set after an asset change.
    fn reapply(&mut self) -> SceneResult<()> {
        match self.measurements {
            Some(m) => self.apply_measurements(&m),
            None => Ok(()),
        }
    }
}
