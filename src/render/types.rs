//! GPU-seitige Datenlayouts (müssen exakt zu `curve_raster.wgsl` passen).

use crate::core::ControlPoint;
use bytemuck::{Pod, Zeroable};

/// Kantenlänge einer Workgroup (8×8 Threads, wie `@workgroup_size(8, 8)`).
pub const WORKGROUP_SIZE: u32 = 8;

/// Kontrollpunkt im Storage-Buffer.
///
/// WGSL richtet `vec3<f32>` auf 16 Bytes aus, daher die expliziten Paddings.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuControlPoint {
    /// Position im Kurvenraum
    pub position: [f32; 2],
    _pad0: [f32; 2],
    /// RGB-Farbe
    pub color: [f32; 3],
    _pad1: f32,
}

impl From<&ControlPoint> for GpuControlPoint {
    fn from(point: &ControlPoint) -> Self {
        Self {
            position: point.position.to_array(),
            _pad0: [0.0; 2],
            color: point.color.to_array(),
            _pad1: 0.0,
        }
    }
}

/// Füllt die Punkte auf volle Pufferkapazität auf (Rest genullt).
pub(crate) fn padded_points(points: &[ControlPoint], capacity: usize) -> Vec<GpuControlPoint> {
    let mut gpu_points: Vec<GpuControlPoint> =
        points.iter().take(capacity).map(GpuControlPoint::from).collect();
    gpu_points.resize(capacity, GpuControlPoint::zeroed());
    gpu_points
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn gpu_control_point_matches_wgsl_stride() {
        assert_eq!(std::mem::size_of::<GpuControlPoint>(), 32);
    }

    #[test]
    fn padded_points_fills_capacity_with_zeros() {
        let points = [ControlPoint::new(Vec2::new(0.5, -0.5), Vec3::new(0.1, 0.2, 0.3))];

        let gpu = padded_points(&points, 5);

        assert_eq!(gpu.len(), 5);
        assert_eq!(gpu[0].position, [0.5, -0.5]);
        assert_eq!(gpu[0].color, [0.1, 0.2, 0.3]);
        assert!(gpu[1..].iter().all(|p| *p == GpuControlPoint::zeroed()));
    }
}
