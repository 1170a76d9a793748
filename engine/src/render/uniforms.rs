//! GPU Uniform Buffers
//!
//! Camera data laid out for direct upload to a GPU uniform buffer. The
//! engine does not own a device or pipeline; an external renderer copies
//! these bytes into its own buffers each frame.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::camera::FreeLookCamera;

/// Camera uniforms for a view-dependent shader.
///
/// Must match the WGSL/std140 struct layout exactly: one column-major 4x4
/// view matrix followed by the camera basis as vec4s (xyz used, w padding).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub camera_front: [f32; 4],
    pub camera_up: [f32; 4],
    pub camera_right: [f32; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0, 0.0],
            camera_front: [0.0, 0.0, -1.0, 0.0],
            camera_up: [0.0, 1.0, 0.0, 0.0],
            camera_right: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

// Uniform buffer offsets must be 16-byte aligned
static_assertions::assert_eq_size!(CameraUniforms, [u8; 128]);
const _: () = assert!(std::mem::size_of::<CameraUniforms>() % 16 == 0);

impl CameraUniforms {
    /// Capture the camera's current state for upload.
    pub fn from_camera(camera: &FreeLookCamera) -> Self {
        let pos = camera.get_position();
        let front = camera.get_front();
        let up = camera.get_up();
        let right = camera.get_right();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            camera_pos: [pos.x, pos.y, pos.z, 0.0],
            camera_front: [front.x, front.y, front.z, 0.0],
            camera_up: [up.x, up.y, up.z, 0.0],
            camera_right: [right.x, right.y, right.z, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_default_layout() {
        let uniforms = CameraUniforms::default();
        assert_eq!(uniforms.view, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniforms.camera_front, [0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_from_camera_matches_state() {
        let camera =
            FreeLookCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();
        let uniforms = CameraUniforms::from_camera(&camera);

        assert_eq!(uniforms.camera_pos, [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(uniforms.view, camera.view_matrix().to_cols_array_2d());

        let front = camera.get_front();
        assert_eq!(uniforms.camera_front, [front.x, front.y, front.z, 0.0]);
    }

    #[test]
    fn test_pod_cast() {
        let uniforms = CameraUniforms::default();
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 128);
    }
}
