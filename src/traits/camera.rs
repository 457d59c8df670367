use crate::camera::FreeLookCamera;

/// Camera movement and control abstraction.
///
/// Matrices and vectors cross this boundary as plain arrays so hosts do not
/// need to share the crate's math types.
pub trait CameraController {
    /// Stage input deltas for the next update.
    fn stage_input(&mut self, move_forward: f32, move_strafe: f32, look_dx: f32, look_dy: f32);

    /// Apply staged input to the camera pose.
    fn update(&mut self);

    /// Get the view matrix for rendering (column-major).
    fn view_matrix(&self) -> [[f32; 4]; 4];

    /// Get the camera position in world space.
    fn position(&self) -> [f32; 3];

    /// Get the camera forward direction.
    fn forward(&self) -> [f32; 3];
}

impl CameraController for FreeLookCamera {
    fn stage_input(&mut self, move_forward: f32, move_strafe: f32, look_dx: f32, look_dy: f32) {
        self.accumulate_input(move_forward, move_strafe, look_dx, look_dy);
    }

    fn update(&mut self) {
        FreeLookCamera::update(self);
    }

    fn view_matrix(&self) -> [[f32; 4]; 4] {
        FreeLookCamera::view_matrix(self).to_cols_array_2d()
    }

    fn position(&self) -> [f32; 3] {
        self.eye().to_array()
    }

    fn forward(&self) -> [f32; 3] {
        FreeLookCamera::forward(self).to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use glam::Vec3;

    fn drive(camera: &mut dyn CameraController) -> [f32; 3] {
        camera.stage_input(1.0, 0.0, 0.0, 0.0);
        camera.update();
        camera.position()
    }

    #[test]
    fn free_look_camera_is_drivable_through_the_trait() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO, CameraConfig::default());
        let position = drive(&mut camera);

        assert_eq!(position[0], 0.0);
        assert!(position[2] < 0.0, "forward input moves the eye down -Z");
        assert_eq!(CameraController::forward(&camera), [0.0, 0.0, -1.0]);
    }
}
