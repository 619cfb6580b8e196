pub mod batch;
pub mod draw;
pub mod font;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;
pub mod viewport;

use std::sync::Arc;

use anyhow::Context;
use batch::QuadBatch;
use game_core::FrameSink;
use pipeline::QuadPipeline;
use resources::GameBuffers;
use viewport::Viewport;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_rectangle, Mesh};

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub logical_size: (u32, u32),

    pub quad_pipeline: QuadPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub quad: Mesh,
    pub batch: QuadBatch,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, logical_size: (u32, u32)) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(logical_size.0 as f32, logical_size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let quad_pipeline = QuadPipeline::new(&ctx.device, ctx.config.format);
        let camera_bind_group = quad_pipeline.bind_camera(&ctx.device, &buffers.camera);
        let quad = create_rectangle(&ctx.device);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            logical_size,
            quad_pipeline,
            camera_bind_group,
            buffers,
            quad,
            batch: QuadBatch::new(),
        })
    }

    /// Zero-sized windows (minimized) keep the previous configuration
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Draw one frame of `sink`. Lost or outdated surfaces are reconfigured
    /// and the frame skipped; anything else is returned as an error.
    pub fn render<S: FrameSink + ?Sized>(&mut self, sink: &S) -> anyhow::Result<()> {
        let logical_size = sink.layout(self.size.0, self.size.1);
        if logical_size != self.logical_size {
            self.logical_size = logical_size;
            let camera = Camera::orthographic(logical_size.0 as f32, logical_size.1 as f32);
            self.buffers.write_camera(&self.queue, &camera);
        }

        self.batch.clear();
        sink.draw(&mut self.batch);
        self.buffers
            .write_instances(&self.device, &self.queue, self.batch.instances());

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Timed out waiting for the next frame");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to get current texture"),
        };

        let view = output.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let viewport = Viewport::fit(self.logical_size, self.size);
        draw::encode_frame(self, &mut encoder, &view, viewport);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
