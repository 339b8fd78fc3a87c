use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::helpers::DEPTH_FORMAT;
use crate::core::{DecorativeObject, Mesh, MeshVertex};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct HeartUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) specular: [f32; 4],
}

/// Lighting and material shared by all hearts.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub light_position: Vec3,
    pub light_intensity: f32,
    pub opacity: f32,
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl HeartUniforms {
    pub(crate) fn new(view_proj: Mat4, eye: Vec3, lighting: &Lighting) -> Self {
        let dir = lighting.light_position.normalize_or_zero();
        let a = lighting.ambient_intensity;
        let s = lighting.specular;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: eye.extend(1.0).to_array(),
            light_dir: [dir.x, dir.y, dir.z, lighting.light_intensity],
            ambient: [a, a, a, lighting.opacity],
            specular: [s[0], s[1], s[2], lighting.shininess],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct HeartInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl From<&DecorativeObject> for HeartInstance {
    fn from(o: &DecorativeObject) -> Self {
        Self {
            model: o.model_matrix().to_cols_array_2d(),
            color: [o.color[0], o.color[1], o.color[2], 1.0],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];

pub(crate) struct HeartResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_capacity: usize,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_heart_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    mesh: &Mesh,
    instance_capacity: usize,
) -> HeartResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("hearts_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::HEARTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("hearts_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("hearts_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("hearts_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<HeartInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_capacity = instance_capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("heart_instances"),
        size: (instance_capacity * std::mem::size_of::<HeartInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("heart_uniforms"),
        size: std::mem::size_of::<HeartUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("hearts_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    HeartResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        instance_buffer,
        instance_capacity,
        uniform_buffer,
        bind_group,
    }
}
