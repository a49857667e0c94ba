// Rendering system using wgpu

mod camera;
mod sprite;
mod texture;
mod vertex;

pub use camera::{Camera, CameraUniform};
pub use sprite::{SpriteBatch, SpriteRenderer};
pub use texture::Texture;
pub use vertex::Vertex;

use crate::engine::assets::{Frame, SpriteSheetIndex};
use anyhow::{Context, Result};
use glam::Affine2;
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

/// Anything that can composite frames of the shared sheet surface
///
/// `transform` places a quad of the frame's own pixel size, centered on the
/// origin, into world space.
pub trait RenderTarget {
    fn draw_frame(&mut self, frame: Frame, transform: Affine2);
}

/// Main renderer responsible for initializing wgpu and presenting frames
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_renderer: SpriteRenderer,
    camera: Camera,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// Create a new renderer for the given window and upload the sheet surface
    pub async fn new(
        window: Arc<Window>,
        sheet: &SpriteSheetIndex,
        clear_color: [f64; 3],
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("Failed to open GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let texture = Texture::from_image(&device, &queue, sheet.surface(), Some("Sprite Sheet"));
        let sprite_renderer = SpriteRenderer::new(&device, &config, &texture)?;

        let camera = Camera::anchored(config.width as f32, config.height as f32);

        info!(
            "Renderer initialized with {}x{} resolution",
            config.width, config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_renderer,
            camera,
            clear_color: srgb_to_linear(clear_color),
        })
    }

    /// Resize the renderer
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera
                .resize(new_size.width as f32, new_size.height as f32);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Draw the batch and present
    pub fn render(&mut self, batch: &SpriteBatch) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                self.resize(self.size);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera_uniform = CameraUniform::new(&self.camera);
        self.queue.write_buffer(
            self.sprite_renderer.camera_buffer(),
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );
        self.sprite_renderer
            .prepare(&self.device, &self.queue, batch);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer.render(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Convert an sRGB colour to the linear values wgpu expects for clears
fn srgb_to_linear([r, g, b]: [f64; 3]) -> wgpu::Color {
    let convert = |c: f64| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    wgpu::Color {
        r: convert(r),
        g: convert(g),
        b: convert(b),
        a: 1.0,
    }
}
