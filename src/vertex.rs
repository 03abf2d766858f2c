use carousel3d::Vec3;

/// Vertex structure with view-space position and terminal cell position
pub struct Vertex {
    /// (right, up, depth) relative to the viewpoint
    pub view_position: Vec3,
    pub screen_position: [f64; 2],
}

impl Vertex {
    pub fn depth(&self) -> f64 {
        self.view_position.z
    }
}
