//! Body measurements and the measurement service data contract.
//!
//! The service itself (photo upload, estimation) lives outside this crate.
//! What is modelled here is what crosses the boundary: the request the
//! client assembles, the JSON the service answers with, and the validated
//! [`MeasurementSet`] the geometry core consumes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating measurements or requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{field} must be a positive number of centimeters, got {value}")]
    InvalidMeasurement { field: &'static str, value: f32 },

    #[error("heightCm must be provided and > 0")]
    MissingHeight,

    #[error("missing {0} photo, all four images must be provided")]
    MissingPhoto(PhotoSlot),

    #[error("invalid measurement response: {0}")]
    Response(String),
}

/// Result type for measurement validation.
pub type MeasurementResult<T> = Result<T, MeasurementError>;

/// The four numbers the morph engine and scene composer work from, in cm.
///
/// No ordering between them is enforced; a waist wider than the chest is a
/// legal body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSet {
    pub height_cm: f32,
    pub chest_cm: f32,
    pub waist_cm: f32,
    pub hips_cm: f32,
}

impl MeasurementSet {
    pub fn new(height_cm: f32, chest_cm: f32, waist_cm: f32, hips_cm: f32) -> Self {
        Self {
            height_cm,
            chest_cm,
            waist_cm,
            hips_cm,
        }
    }

    /// Every value must be finite and strictly positive.
    pub fn validate(&self) -> MeasurementResult<()> {
        let fields = [
            ("height", self.height_cm),
            ("chest", self.chest_cm),
            ("waist", self.waist_cm),
            ("hips", self.hips_cm),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeasurementError::InvalidMeasurement { field, value });
            }
        }
        Ok(())
    }
}

/// Successful response body of the measurement service.
///
/// The service stub, the server model and the clients disagree on field
/// names (`chest`, `chestCm`, `chestCircumferenceCm`, ...); every spelling
/// is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResponse {
    #[serde(alias = "chest", alias = "chestCm")]
    pub chest_circumference_cm: f32,
    #[serde(alias = "waist", alias = "waistCm")]
    pub waist_circumference_cm: f32,
    #[serde(alias = "hips", alias = "hipsCm")]
    pub hip_circumference_cm: f32,
    #[serde(default, alias = "shoulders")]
    pub shoulder_width_cm: Option<f32>,
    #[serde(default, alias = "torsoLength", alias = "torsoLengthCm")]
    pub estimated_torso_length_cm: Option<f32>,
    #[serde(default, rename = "topSizeEU", alias = "topSize", alias = "topEu")]
    pub top_size_eu: Option<String>,
    #[serde(default, rename = "bottomSizeEU", alias = "bottomSize", alias = "bottomEu")]
    pub bottom_size_eu: Option<String>,
}

impl MeasurementResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> MeasurementResult<Self> {
        serde_json::from_str(json).map_err(|e| MeasurementError::Response(e.to_string()))
    }

    /// Combine with the height the user entered. The service does not echo it.
    pub fn to_measurement_set(&self, height_cm: f32) -> MeasurementResult<MeasurementSet> {
        let set = MeasurementSet::new(
            height_cm,
            self.chest_circumference_cm,
            self.waist_circumference_cm,
            self.hip_circumference_cm,
        );
        set.validate()?;
        Ok(set)
    }
}

/// Camera angles the service expects a photo for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoSlot {
    Front,
    Back,
    Left,
    Right,
}

impl PhotoSlot {
    pub const ALL: [PhotoSlot; 4] = [
        PhotoSlot::Front,
        PhotoSlot::Back,
        PhotoSlot::Left,
        PhotoSlot::Right,
    ];

    /// Multipart field name used by the service.
    pub fn field_name(self) -> &'static str {
        match self {
            PhotoSlot::Front => "front",
            PhotoSlot::Back => "back",
            PhotoSlot::Left => "left",
            PhotoSlot::Right => "right",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Fixed set of photo slots, each optionally filled with an image path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoSlots {
    paths: [Option<PathBuf>; 4],
}

impl PhotoSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a slot, returning the path it replaced.
    pub fn set(&mut self, slot: PhotoSlot, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.paths[slot.index()].replace(path.into())
    }

    /// Empty a slot, returning the path it held.
    pub fn clear(&mut self, slot: PhotoSlot) -> Option<PathBuf> {
        self.paths[slot.index()].take()
    }

    pub fn get(&self, slot: PhotoSlot) -> Option<&Path> {
        self.paths[slot.index()].as_deref()
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.paths = Default::default();
    }

    /// Slots that still need a photo, in [`PhotoSlot::ALL`] order.
    pub fn missing(&self) -> Vec<PhotoSlot> {
        PhotoSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.paths.iter().all(Option::is_some)
    }
}

/// Everything the client sends to the measurement service.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub height_cm: u32,
    /// Free-form label, passed through untouched.
    pub gender: String,
    pub photos: PhotoSlots,
}

impl AnalyzeRequest {
    pub fn new(height_cm: u32, gender: impl Into<String>, photos: PhotoSlots) -> Self {
        Self {
            height_cm,
            gender: gender.into(),
            photos,
        }
    }

    /// Reject requests the service would answer with a bad-request status.
    pub fn validate(&self) -> MeasurementResult<()> {
        if self.height_cm == 0 {
            return Err(MeasurementError::MissingHeight);
        }
        if let Some(slot) = self.photos.missing().first() {
            return Err(MeasurementError::MissingPhoto(*slot));
        }
        Ok(())
    }
}
