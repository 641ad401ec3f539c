//! Dispatch des Compute-Shaders.

use super::types::WORKGROUP_SIZE;
use crate::core::ViewportSize;

/// Anzahl der Workgroups pro Achse, sodass jedes Pixel abgedeckt ist.
pub fn workgroup_count(size: ViewportSize) -> (u32, u32) {
    (
        size.width.div_ceil(WORKGROUP_SIZE),
        size.height.div_ceil(WORKGROUP_SIZE),
    )
}

/// Zeichnet einen Compute-Pass in den Encoder.
///
/// Der Pass ist auf diese Funktion begrenzt, damit die Schreibbindung der
/// Zeichenfläche vor der Präsentation wieder frei ist.
pub(crate) fn encode(
    encoder: &mut wgpu::CommandEncoder,
    pipeline: &wgpu::ComputePipeline,
    curve_data: &wgpu::BindGroup,
    surface: &wgpu::BindGroup,
    size: ViewportSize,
) {
    let (groups_x, groups_y) = workgroup_count(size);
    let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
        label: Some("Curve Raster Pass"),
        timestamp_writes: None,
    });
    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, curve_data, &[]);
    pass.set_bind_group(1, surface, &[]);
    pass.dispatch_workgroups(groups_x, groups_y, 1);
}
