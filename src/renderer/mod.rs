//! wgpu backend for the sandbox window.
//!
//! Solid rectangles go through an instanced quad pipeline, text through
//! `wgpu_text`. A frame is first built on a [`GpuCanvas`], then uploaded and
//! drawn in one pass by [`GpuRenderer::present`].

pub mod canvas;
pub mod pipeline;
pub mod primitives;
pub mod text;

pub use canvas::GpuCanvas;
pub use text::{GlyphMetrics, GlyphText, load_font};

use crate::error::RenderError;
use pipeline::{create_quad_buffer, create_quad_pipeline};
use std::sync::Arc;
use wgpu::SurfaceError;
use wgpu_text::glyph_brush::ab_glyph::FontArc;
use wgpu_text::{BrushBuilder, TextBrush};
use winit::window::Window;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.08,
    b: 0.12,
    a: 1.0,
};

pub struct GpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    quad_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    quad_capacity: usize,
    text_brush: TextBrush<FontArc>,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>, font: FontArc) -> Result<Self, RenderError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::Adapter(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Editor Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RenderError::Surface("no supported texture format".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        // A form with a looping sprite does not need more than vsync.
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("RENDER: surface {}x{} {:?}", config.width, config.height, format);

        let quad_pipeline = create_quad_pipeline(&device, format);
        let quad_capacity = 64;
        let quad_buffer = create_quad_buffer(&device, quad_capacity);
        let text_brush =
            BrushBuilder::using_font(font).build(&device, config.width, config.height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            quad_pipeline,
            quad_buffer,
            quad_capacity,
            text_brush,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.text_brush.resize_view(
                new_size.width as f32,
                new_size.height as f32,
                &self.queue,
            );
        }
    }

    /// Uploads and draws one frame built on `canvas`.
    pub fn present<M: GlyphMetrics>(&mut self, canvas: &GpuCanvas<M>) -> Result<(), SurfaceError> {
        let quads = canvas.quads();
        if quads.len() > self.quad_capacity {
            self.quad_capacity = quads.len().next_power_of_two();
            self.quad_buffer = create_quad_buffer(&self.device, self.quad_capacity);
            log::debug!("RENDER: quad buffer grown to {}", self.quad_capacity);
        }
        if !quads.is_empty() {
            self.queue
                .write_buffer(&self.quad_buffer, 0, bytemuck::cast_slice(quads));
        }

        self.text_brush
            .queue(
                &self.device,
                &self.queue,
                canvas.sections().iter().map(|s| s.to_borrowed()),
            )
            .map_err(|_| SurfaceError::Lost)?;

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Editor Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Editor Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !quads.is_empty() {
                render_pass.set_pipeline(&self.quad_pipeline);
                render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                render_pass.draw(0..4, 0..quads.len() as u32);
            }
            self.text_brush.draw(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
