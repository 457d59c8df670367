/// Renderer seam the camera host drives once per frame.
///
/// The camera produces view/projection matrices; what happens to them after
/// `draw` is the renderer's business (GPU upload, logging, capture).
pub trait ViewRenderer {
    /// Bind the projection transform (column-major).
    fn set_projection(&mut self, projection: [[f32; 4]; 4]);

    /// Bind the view transform (column-major).
    fn set_view(&mut self, view: [[f32; 4]; 4]);

    /// Issue the frame's draw call.
    fn draw(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
