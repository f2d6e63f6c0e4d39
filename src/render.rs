//! WebGPU renderer: additive scene pass into an HDR target, then a bloom
//! chain (bright pass, separable blur, composite) onto the swapchain.

use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};
use crate::core::Camera;
use web_sys as web;

mod geometry;
mod helpers;
mod post;
mod targets;

pub use geometry::{build_frame_geometry, FrameGeometry};
use geometry::{SceneResources, SceneUniforms, LINE_VERTEX_CAPACITY, SPRITE_CAPACITY};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    level: f32,
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bind_groups: post::PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    fog_density: f32,
    level: f32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let render_targets = RenderTargets::create(&device, width, height);
        let scene = geometry::create_scene_resources(&device, targets::HDR_FORMAT);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, targets::HDR_FORMAT, format);
        let bind_groups = post::build_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &render_targets.hdr_view,
            &render_targets.bloom_a_view,
            &render_targets.bloom_b_view,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets: render_targets,
            linear_sampler,
            post,
            bind_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.02,
                g: 0.018,
                b: 0.022,
                a: 1.0,
            },
            fog_density: 0.004,
            level: 0.0,
            time_accum: 0.0,
        })
    }

    /// Per-frame atmosphere: background clear color, fog density, and the
    /// current level (fed to the post uniforms).
    pub fn set_atmosphere(&mut self, background: [f32; 3], fog_density: f32, level: f32) {
        self.clear_color = wgpu::Color {
            r: background[0] as f64,
            g: background[1] as f64,
            b: background[2] as f64,
            a: 1.0,
        };
        self.fog_density = fog_density;
        self.level = level;
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

            self.targets.recreate(&self.device, width, height);
            self.bind_groups = post::build_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
                &self.targets.bloom_a_view,
                &self.targets.bloom_b_view,
            );
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        camera: &Camera,
        geo: &FrameGeometry,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let uniforms = SceneUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            eye: camera.eye.to_array(),
            spin: geo.spin,
            fog_density: self.fog_density,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let line_count = geo.lines.len().min(LINE_VERTEX_CAPACITY);
        let sprite_count = geo.sprites.len().min(SPRITE_CAPACITY);
        if line_count > 0 {
            self.queue.write_buffer(
                &self.scene.line_vbuf,
                0,
                bytemuck::cast_slice(&geo.lines[..line_count]),
            );
        }
        if sprite_count > 0 {
            self.queue.write_buffer(
                &self.scene.sprite_vbuf,
                0,
                bytemuck::cast_slice(&geo.sprites[..sprite_count]),
            );
        }

        // Pass 1: scene into the HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
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
            if line_count > 0 {
                rpass.set_pipeline(&self.scene.line_pipeline);
                rpass.set_bind_group(0, &self.scene.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.scene.line_vbuf.slice(..));
                rpass.draw(0..line_count as u32, 0..1);
            }
            if sprite_count > 0 {
                rpass.set_pipeline(&self.scene.sprite_pipeline);
                rpass.set_bind_group(0, &self.scene.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.scene.sprite_vbuf.slice(..));
                rpass.draw(0..6, 0..sprite_count as u32);
            }
        }

        let res = [self.width as f32 / 2.0, self.height as f32 / 2.0];
        let post_uniforms = |blur_dir: [f32; 2]| PostUniforms {
            resolution: res,
            time: self.time_accum,
            level: self.level,
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };

        // Pass 2: bright pass -> bloom_a
        post::write_post_uniforms(&self.queue, &self.post.uniform_buffer, post_uniforms([0.0, 0.0]));
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bind_groups.hdr,
            None,
        );

        // Pass 3: horizontal blur bloom_a -> bloom_b
        post::write_post_uniforms(&self.queue, &self.post.uniform_buffer, post_uniforms([1.0, 0.0]));
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );

        // Pass 4: vertical blur bloom_b -> bloom_a
        post::write_post_uniforms(&self.queue, &self.post.uniform_buffer, post_uniforms([0.0, 1.0]));
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );

        // Pass 5: composite to swapchain
        post::write_post_uniforms(&self.queue, &self.post.uniform_buffer, post_uniforms([0.0, 0.0]));
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.bind_groups.hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
