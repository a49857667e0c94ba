// Camera for the arena view

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D orthographic camera
///
/// World space is y-up with the origin at the bottom-left of the window.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera center in world space
    pub position: Vec2,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera whose view starts at the world origin
    pub fn anchored(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.resize(viewport_width, viewport_height);
        camera
    }

    fn update_view_proj(&mut self) {
        let half_width = self.viewport_width / 2.0;
        let half_height = self.viewport_height / 2.0;

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -100.0, // Near plane
            100.0,  // Far plane
        );
    }

    /// Resize the viewport, keeping the bottom-left corner on the origin
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.position = Vec2::new(width / 2.0, height / 2.0);
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
