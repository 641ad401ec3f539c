//! Laden und Kompilieren des Compute-Shaders.

use super::error::{RenderError, RenderResult};
use std::path::Path;

/// Liest den WGSL-Quelltext von der Platte.
pub fn load_shader_source(path: &Path) -> RenderResult<String> {
    std::fs::read_to_string(path).map_err(|source| RenderError::ShaderRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Kompiliert den Shader und baut die Compute-Pipeline.
///
/// Validierungsfehler werden über einen Error-Scope eingesammelt statt den
/// Device-Fehlerhandler auszulösen.
pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    source: &str,
    layouts: &[&wgpu::BindGroupLayout],
) -> RenderResult<wgpu::ComputePipeline> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Curve Raster Shader"),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Curve Raster Pipeline Layout"),
        bind_group_layouts: layouts,
        push_constant_ranges: &[],
    });

    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("Curve Raster Pipeline"),
        layout: Some(&pipeline_layout),
        module: &module,
        entry_point: Some("cs_main"),
        compilation_options: Default::default(),
        cache: None,
    });

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(RenderError::ShaderCompile(error.to_string()));
    }

    log::info!("Compute-Shader kompiliert");
    Ok(pipeline)
}
