use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

/// Camera for 3D rendering
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera with clip planes sized for centimeter scenes.
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            aspect,
            near: 0.5,
            far: 5000.0,
        }
    }

    /// Get the view matrix (world → camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix (camera → clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera matrices laid out for a GPU uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_projection_matrix().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
        }
    }
}

/// Spherical camera rig driven by pointer drags and wheel steps.
///
/// The eye sits on a sphere of radius `distance` (yaw around Y, pitch above
/// the horizon), shifted by `offset`, and always looks at `target`. It only
/// produces a [`Camera`]; nothing in the geometry core depends on it.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub offset: Vec3,
    pub target: Vec3,
}

impl OrbitCamera {
    /// Radians per pixel of pointer drag.
    pub const DRAG_SENSITIVITY: f32 = 0.01;
    /// Pitch stays this far away from straight up/down.
    pub const PITCH_MARGIN: f32 = 0.1;
    pub const MIN_DISTANCE: f32 = 80.0;
    pub const MAX_DISTANCE: f32 = 800.0;

    /// Rotate by a pointer delta in pixels. Pitch is clamped short of the poles.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        let limit = FRAC_PI_2 - Self::PITCH_MARGIN;
        self.yaw += dx * Self::DRAG_SENSITIVITY;
        self.pitch = (self.pitch + dy * Self::DRAG_SENSITIVITY).clamp(-limit, limit);
    }

    /// Dolly in for positive wheel deltas and out for everything else.
    pub fn zoom(&mut self, wheel_delta: f32) {
        let factor = if wheel_delta > 0.0 { 0.9 } else { 1.1 };
        self.distance = (self.distance * factor).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Return to the framing used for a freshly composed figure.
    pub fn recenter(&mut self) {
        self.yaw = 0.0;
        self.pitch = (-15.0_f32).to_radians();
        self.distance = 300.0;
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let spherical = Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        );
        spherical + self.offset
    }

    /// Build a render camera for the given viewport aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::new(self.eye(), self.target, aspect)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: (-8.0_f32).to_radians(),
            distance: 320.0,
            offset: Vec3::new(0.0, 80.0, 100.0),
            target: Vec3::ZERO,
        }
    }
}
