// Vertex structure for 2D sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex of a textured sprite quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 2],
    /// Texture coordinates (UV) into the sheet surface
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    /// Create a new vertex
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
