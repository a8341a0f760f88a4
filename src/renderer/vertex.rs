//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `VertexInput` in the shader
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const GRID: [f32; 4] = [0.0, 1.0, 1.0, 1.0]; // Cyan
    pub const PLAYER: [f32; 4] = [0.1, 0.3, 1.0, 1.0]; // Blue
    pub const ENEMY: [f32; 4] = [1.0, 0.1, 0.1, 1.0]; // Red
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.1, 1.0]; // Yellow
    pub const GAME_OVER_TINT: [f32; 4] = [0.0, 0.0, 0.0, 0.55];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
