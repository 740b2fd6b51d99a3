//! Measurement-driven body morphing.
//!
//! The reference mannequin is calibrated at three horizontal bands (chest,
//! waist, hips). A morph scales every vertex radially around the vertical
//! axis; the scale is a Gaussian-weighted blend of the per-band ratios
//! `target / baseline`, anchored by an implicit weight-1 "no change" term so
//! vertices far from every band stay put.
//!
//! Y is never touched. Overall height is a uniform transform applied by the
//! scene composer afterwards.

use std::f32::consts::TAU;

use bodyfit_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::{MeasurementError, MeasurementSet};
use crate::mesh::Mesh;

/// Errors that can occur during morphing.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MorphError {
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(#[from] MeasurementError),
}

/// Result type for morph operations.
pub type MorphResult<T> = Result<T, MorphError>;

/// Vertices closer than this to the Y axis are left alone.
const AXIS_EPSILON: f32 = 1e-6;

/// A band: where it sits (fraction of mesh height) and the reference
/// mannequin's circumference there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    pub fraction: f32,
    pub baseline_cm: f32,
}

impl BandSpec {
    pub const fn new(fraction: f32, baseline_cm: f32) -> Self {
        Self {
            fraction,
            baseline_cm,
        }
    }

    pub fn baseline_radius(&self) -> f32 {
        circumference_to_radius(self.baseline_cm)
    }
}

/// The neck ring is not morphed; it is derived from the chest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeckSpec {
    pub fraction: f32,
    /// Neck radius as a fraction of the chest radius
    pub chest_ratio: f32,
}

/// Calibration of a reference mesh.
///
/// Defaults match the bundled mannequin. Loaded once and shared read-only,
/// so engines for different reference meshes can coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub chest: BandSpec,
    pub waist: BandSpec,
    pub hips: BandSpec,
    pub neck: NeckSpec,
    /// Gaussian falloff width as a fraction of the target height
    pub sigma_factor: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            chest: BandSpec::new(0.72, 100.0),
            waist: BandSpec::new(0.60, 82.0),
            hips: BandSpec::new(0.50, 96.0),
            neck: NeckSpec {
                fraction: 0.78,
                chest_ratio: 0.33,
            },
            sigma_factor: 0.04,
        }
    }
}

/// `radius = circumference / 2π`
pub fn circumference_to_radius(circumference_cm: f32) -> f32 {
    circumference_cm / TAU
}

/// `exp(-0.5 * ((y - center) / sigma)²)`
fn gaussian(y: f32, center: f32, sigma: f32) -> f32 {
    let d = (y - center) / sigma;
    (-0.5 * d * d).exp()
}

/// One band resolved against a concrete mesh and measurement set.
#[derive(Debug, Clone, Copy)]
struct ResolvedBand {
    y: f32,
    scale: f32,
}

/// Morphs meshes calibrated with a given [`Calibration`].
#[derive(Debug, Clone, Default)]
pub struct MorphEngine {
    calibration: Calibration,
}

impl MorphEngine {
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Produce a morphed copy of `base`.
    ///
    /// Same vertex count and index buffer as `base`, X/Z scaled, Y unchanged.
    /// Normals are recomputed if `base` has them. `base` is never modified.
    pub fn morph(&self, base: &Mesh, measurements: &MeasurementSet) -> MorphResult<Mesh> {
        measurements.validate()?;

        let bands = self.resolve_bands(base, measurements);
        let sigma = measurements.height_cm * self.calibration.sigma_factor;

        log::debug!(
            "Morphing {} vertices: bands y={:.1}/{:.1}/{:.1} scale={:.3}/{:.3}/{:.3} sigma={:.2}",
            base.vertex_count(),
            bands[0].y,
            bands[1].y,
            bands[2].y,
            bands[0].scale,
            bands[1].scale,
            bands[2].scale,
            sigma
        );

        let positions = base
            .positions
            .iter()
            .map(|p| {
                let r = (p.x * p.x + p.z * p.z).sqrt();
                if r < AXIS_EPSILON {
                    return *p;
                }
                let s = blended_scale(&bands, p.y, sigma);
                Vec3::new(p.x * s, p.y, p.z * s)
            })
            .collect();

        Ok(base.with_positions(positions))
    }

    /// Band heights come from the base mesh's own bounds, not from the
    /// target height.
    fn resolve_bands(&self, base: &Mesh, m: &MeasurementSet) -> [ResolvedBand; 3] {
        let vertical = base.bounds.y;
        let c = &self.calibration;
        let band = |spec: &BandSpec, target_cm: f32| ResolvedBand {
            y: vertical.at(spec.fraction),
            scale: circumference_to_radius(target_cm) / spec.baseline_radius(),
        };
        [
            band(&c.chest, m.chest_cm),
            band(&c.waist, m.waist_cm),
            band(&c.hips, m.hips_cm),
        ]
    }
}

fn blended_scale(bands: &[ResolvedBand; 3], y: f32, sigma: f32) -> f32 {
    let mut numerator = 1.0;
    let mut denominator = 1.0;
    for band in bands {
        let w = gaussian(y, band.y, sigma);
        numerator += w * band.scale;
        denominator += w;
    }
    numerator / denominator
}
