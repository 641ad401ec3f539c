//! Uniform- und Storage-Buffer des Rasterisierers.

use super::error::{RenderError, RenderResult};
use super::types::{padded_points, GpuControlPoint};
use crate::core::{ControlPoint, CurveKind, MAX_CONTROL_POINTS};
use crate::shared::RasterConstants;

/// Führt eine Allokation unter OutOfMemory- und Validation-Error-Scopes aus.
pub(crate) fn allocate<T>(
    device: &wgpu::Device,
    label: &'static str,
    create: impl FnOnce() -> T,
) -> RenderResult<T> {
    device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let resource = create();

    let validation = pollster::block_on(device.pop_error_scope());
    let out_of_memory = pollster::block_on(device.pop_error_scope());
    match validation.or(out_of_memory) {
        Some(error) => Err(RenderError::Allocation {
            label,
            message: error.to_string(),
        }),
        None => Ok(resource),
    }
}

/// Byte-Größe eines Punktpuffers (feste Kapazität).
pub const POINT_BUFFER_SIZE: u64 =
    (MAX_CONTROL_POINTS * std::mem::size_of::<GpuControlPoint>()) as u64;

/// Konstanten- und Punktpuffer samt Bind-Group (Gruppe 0).
pub(crate) struct CurveResources {
    layout: wgpu::BindGroupLayout,
    constants: wgpu::Buffer,
    points: [wgpu::Buffer; 2],
    bind_group: wgpu::BindGroup,
}

impl CurveResources {
    /// Legt alle Puffer einmalig an. Inhalte werden erst beim Sync geschrieben.
    pub fn new(device: &wgpu::Device) -> RenderResult<Self> {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Curve Data Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                storage_entry(1),
                storage_entry(2),
            ],
        });

        let constants = allocate(device, "raster_constants", || {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Raster Constants"),
                size: std::mem::size_of::<RasterConstants>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        })?;

        let original = allocate(device, "original_points", || point_buffer(device, "Original Points"))?;
        let polar = allocate(device, "polar_points", || point_buffer(device, "Polar Points"))?;

        let bind_group = allocate(device, "curve_data_bind_group", || {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Curve Data Bind Group"),
                layout: &layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: constants.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: original.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: polar.as_entire_binding(),
                    },
                ],
            })
        })?;

        log::debug!(
            "Kurvenpuffer angelegt ({} Bytes pro Punktpuffer)",
            POINT_BUFFER_SIZE
        );

        Ok(Self {
            layout,
            constants,
            points: [original, polar],
            bind_group,
        })
    }

    /// Layout der Gruppe 0 (für das Pipeline-Layout).
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Bind-Group der Gruppe 0.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Schreibt den Konstantenblock vollständig neu.
    pub fn write_constants(&self, queue: &wgpu::Queue, constants: &RasterConstants) {
        queue.write_buffer(&self.constants, 0, bytemuck::bytes_of(constants));
    }

    /// Schreibt den Punktpuffer einer Kurve über die volle Kapazität neu.
    pub fn write_points(&self, queue: &wgpu::Queue, kind: CurveKind, points: &[ControlPoint]) {
        let gpu_points = padded_points(points, MAX_CONTROL_POINTS);
        queue.write_buffer(
            &self.points[kind.index()],
            0,
            bytemuck::cast_slice(&gpu_points),
        );
    }
}

fn storage_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: true },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn point_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: POINT_BUFFER_SIZE,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
