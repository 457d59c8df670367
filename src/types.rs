use glam::Mat4;

/// Transform uniform buffer data for GPU upload.
///
/// Matches the model/view/projection triple a basic vertex shader consumes;
/// all matrices are column-major.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl TransformUniform {
    /// Creates a uniform with an identity model matrix.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }

    pub fn set_model(&mut self, model: Mat4) {
        self.model = model.to_cols_array_2d();
    }

    /// Syncs the view matrix; called once per frame after the camera update.
    pub fn set_view(&mut self, view: Mat4) {
        self.view = view.to_cols_array_2d();
    }

    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection.to_cols_array_2d();
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_three_tightly_packed_matrices() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 3 * 16 * 4);
    }

    #[test]
    fn default_is_identity_everywhere() {
        let uniform = TransformUniform::default();
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        assert_eq!(uniform.model, identity);
        assert_eq!(uniform.view, identity);
        assert_eq!(uniform.projection, identity);
    }

    #[test]
    fn set_view_overwrites_only_the_view() {
        let mut uniform = TransformUniform::default();
        let view = Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -3.0));
        uniform.set_view(view);

        assert_eq!(uniform.view, view.to_cols_array_2d());
        assert_eq!(uniform.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.projection, Mat4::IDENTITY.to_cols_array_2d());
    }
}
