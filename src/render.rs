use crate::core::{Camera, HeartField, Mesh};
use web_sys as web;

mod hearts;
mod helpers;
mod targets;

pub use hearts::Lighting;
use hearts::{create_heart_resources, HeartInstance, HeartResources, HeartUniforms};
use targets::DepthTarget;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    hearts: HeartResources,
    lighting: Lighting,
    instances: Vec<HeartInstance>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        mesh: &Mesh,
        heart_count: usize,
        lighting: Lighting,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        if caps.formats.is_empty() || caps.alpha_modes.is_empty() {
            anyhow::bail!("surface reports no formats");
        }
        let (format, alpha_mode) = helpers::pick_surface_format(&caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let hearts = create_heart_resources(&device, format, mesh, heart_count);
        log::info!(
            "WebGPU ready: {}x{} {:?}, {} triangles per heart",
            width,
            height,
            format,
            mesh.triangle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            hearts,
            lighting,
            instances: Vec::with_capacity(heart_count),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, field: &HeartField, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.instances.clear();
        self.instances.extend(
            field
                .objects()
                .iter()
                .take(self.hearts.instance_capacity)
                .map(HeartInstance::from),
        );
        let uniforms = HeartUniforms::new(camera.view_projection(), camera.eye, &self.lighting);
        self.queue
            .write_buffer(&self.hearts.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.hearts.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hearts_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if !self.instances.is_empty() {
                rpass.set_pipeline(&self.hearts.pipeline);
                rpass.set_bind_group(0, &self.hearts.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.hearts.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.hearts.instance_buffer.slice(..));
                rpass.set_index_buffer(self.hearts.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.hearts.index_count, 0, 0..self.instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
