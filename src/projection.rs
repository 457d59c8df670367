use glam::Mat4;

/// Perspective projection parameters, kept alongside the camera so the
/// combined matrices can be regenerated on demand.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    /// Creates a projection for the given field of view and surface size.
    pub fn new(fovy: f32, width: u32, height: u32) -> Self {
        Self {
            fovy,
            aspect: width as f32 / height.max(1) as f32,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Tracks a surface resize by recomputing the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Builds the projection matrix with OpenGL depth conventions
    /// (clip z in [-1, 1]).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(45.0, 1280, 720)
    }
}
