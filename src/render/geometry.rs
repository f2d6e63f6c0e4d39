//! Scene-pass geometry: trail line segments and instanced point sprites.
//!
//! Vertex buffers are allocated once at the worst-case capacity (painter cap
//! times trail length, full snow field, star) and rewritten each frame with
//! only the visible primitives.

use crate::constants::{
    SNOW_COLOR, SNOW_POINT_SIZE, SPARKLE_POINT_SIZE, STAR_COLOR, STAR_GLOW_SIZE,
};
use crate::core::{
    Scene, MAX_PAINTERS, SNOW_COUNT, SPARKLES_PER_PAINTER, STAR_RAY_COUNT, TRAIL_POINTS,
    VISIBILITY_EPSILON,
};

/// One endpoint of a trail or ray segment (line-list topology).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// One billboarded sprite (sparkle, snowflake, or the star glow).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl SpriteInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Must match `Globals` in scene.wgsl (160 bytes).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 3],
    pub(crate) spin: f32,
    pub(crate) fog_density: f32,
    pub(crate) _pad: [f32; 3],
}

// Worst case: every painter drawing its full trail, plus the star rays.
pub(crate) const LINE_VERTEX_CAPACITY: usize =
    MAX_PAINTERS * (TRAIL_POINTS - 1) * 2 + STAR_RAY_COUNT * 2;
// Every sparkle, the whole snow field, and the star glow.
pub(crate) const SPRITE_CAPACITY: usize =
    MAX_PAINTERS * SPARKLES_PER_PAINTER + SNOW_COUNT + 1;

pub(crate) struct SceneResources {
    pub(crate) line_pipeline: wgpu::RenderPipeline,
    pub(crate) sprite_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) line_vbuf: wgpu::Buffer,
    pub(crate) sprite_vbuf: wgpu::Buffer,
}

// Light accumulates: src + dst, with colors premultiplied in the shaders.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("line_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_line"),
            buffers: &[LineVertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_line"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sprite_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sprite"),
            buffers: &[SpriteInstance::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sprite"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let line_vbuf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("line_vbuf"),
        size: (LINE_VERTEX_CAPACITY * std::mem::size_of::<LineVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let sprite_vbuf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite_vbuf"),
        size: (SPRITE_CAPACITY * std::mem::size_of::<SpriteInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneResources {
        line_pipeline,
        sprite_pipeline,
        uniform_buffer,
        bind_group,
        line_vbuf,
        sprite_vbuf,
    }
}

/// Flattened, GPU-ready view of one simulated frame.
pub struct FrameGeometry {
    pub lines: Vec<LineVertex>,
    pub sprites: Vec<SpriteInstance>,
    pub spin: f32,
}

pub fn build_frame_geometry(scene: &Scene) -> FrameGeometry {
    let mut lines = Vec::new();
    let mut sprites = Vec::new();

    for painter in &scene.population.painters {
        if !painter.active || painter.opacity < VISIBILITY_EPSILON {
            continue;
        }
        let trail_color = [
            painter.color[0],
            painter.color[1],
            painter.color[2],
            painter.opacity,
        ];
        for pair in painter.points.windows(2) {
            lines.push(LineVertex {
                pos: pair[0].to_array(),
                color: trail_color,
            });
            lines.push(LineVertex {
                pos: pair[1].to_array(),
                color: trail_color,
            });
        }
        let sparkle_color = [
            painter.color[0],
            painter.color[1],
            painter.color[2],
            painter.sparkle_opacity(),
        ];
        for s in &painter.sparkles {
            sprites.push(SpriteInstance {
                pos: s.to_array(),
                size: SPARKLE_POINT_SIZE,
                color: sparkle_color,
            });
        }
    }

    let star = &scene.star;
    for (i, (a, b)) in star.ray_segments().into_iter().enumerate() {
        let ray_color = [STAR_COLOR[0], STAR_COLOR[1], STAR_COLOR[2], star.opacities[i + 1]];
        lines.push(LineVertex {
            pos: a.to_array(),
            color: ray_color,
        });
        lines.push(LineVertex {
            pos: b.to_array(),
            color: ray_color,
        });
    }
    sprites.push(SpriteInstance {
        pos: star.position.to_array(),
        size: STAR_GLOW_SIZE,
        color: [STAR_COLOR[0], STAR_COLOR[1], STAR_COLOR[2], star.opacities[0]],
    });

    let snow_color = [SNOW_COLOR[0], SNOW_COLOR[1], SNOW_COLOR[2], scene.snow.opacity];
    for p in &scene.snow.positions {
        sprites.push(SpriteInstance {
            pos: p.to_array(),
            size: SNOW_POINT_SIZE,
            color: snow_color,
        });
    }

    FrameGeometry {
        lines,
        sprites,
        spin: scene.rotation,
    }
}
