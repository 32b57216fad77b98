use crate::camera::Camera;
use bytemuck::{Pod, Zeroable};

/// Camera block as uploaded to shader uniforms. Matrices are column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    /// World position, w = 1.
    pub position: [f32; 4],
}

impl CameraUniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        let view = camera.view();
        let projection = camera.projection();
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_proj: (projection * view).to_cols_array_2d(),
            position: camera.position.extend(1.0).to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
