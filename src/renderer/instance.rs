//! Per-model instance data for the external renderer

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::sim::{Scene, Transform};

/// Column-major world matrix for one model draw
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub model: [[f32; 4]; 4],
}

impl ModelInstance {
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            model: matrix.to_cols_array_2d(),
        }
    }

    /// Place an anchor-local transform in the world
    pub fn placed(anchor: &Transform, local: &Transform) -> Self {
        Self::from_matrix(anchor.matrix() * local.matrix())
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

/// Everything to draw this frame, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Platform instances, oldest first
    pub platforms: Vec<ModelInstance>,
    pub figure: ModelInstance,
}

impl DrawList {
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            platforms: scene
                .platforms
                .iter()
                .map(|p| ModelInstance::placed(&scene.anchor, p))
                .collect(),
            figure: ModelInstance::placed(&scene.anchor, &scene.figure),
        }
    }

    /// Platform instances as raw bytes
    pub fn platform_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.platforms)
    }
}
