//! GPU-Rasterisierung der Kurven per Compute-Shader (wgpu).
//!
//! Der Renderer kennt kein egui: er bekommt Device/Queue, den Kurvenzustand
//! und die Dirty-Flags und liefert eine Textur-View, die der Host präsentiert.

mod dispatch;
mod error;
mod resources;
mod shader;
mod surface;
mod types;

pub use dispatch::workgroup_count;
pub use error::{RenderError, RenderResult};
pub use resources::POINT_BUFFER_SIZE;
pub use shader::load_shader_source;
pub use surface::SURFACE_FORMAT;
pub use types::{GpuControlPoint, WORKGROUP_SIZE};

use crate::core::{CurveKind, CurveSet, GlobalSettings, ViewportSize};
use crate::shared::{DirtyState, RasterConstants};
use resources::CurveResources;
use std::path::Path;
use surface::ViewportSurface;

/// Ergebnis eines Sync-Durchlaufs: welche Ressourcen neu geschrieben wurden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Zeichenfläche wurde neu angelegt
    pub surface_recreated: bool,
    /// Konstantenblock wurde geschrieben
    pub constants_written: bool,
    /// Punktpuffer je Kurve (Index = `CurveKind::index()`)
    pub curves_written: [bool; 2],
}

impl SyncReport {
    /// Gibt `true` zurück, wenn nichts geschrieben wurde.
    pub fn is_empty(&self) -> bool {
        !self.surface_recreated && !self.constants_written && !self.curves_written.contains(&true)
    }
}

/// Compute-Rasterisierer für Original- und Polarkurve.
///
/// Besitzt Pipeline, Puffer und Zeichenfläche. Ressourcen werden nur in
/// [`CurveRenderer::sync`] aktualisiert, gezeichnet wird in
/// [`CurveRenderer::dispatch`].
pub struct CurveRenderer {
    pipeline: wgpu::ComputePipeline,
    resources: CurveResources,
    surface_layout: wgpu::BindGroupLayout,
    surface: ViewportSurface,
}

impl CurveRenderer {
    /// Liest den Shader von `shader_path` und baut alle GPU-Ressourcen.
    pub fn new(
        device: &wgpu::Device,
        shader_path: &Path,
        initial_size: ViewportSize,
    ) -> RenderResult<Self> {
        log::info!("Lade Compute-Shader: {}", shader_path.display());
        let source = load_shader_source(shader_path)?;
        Self::from_source(device, &source, initial_size)
    }

    /// Baut alle GPU-Ressourcen aus bereits geladenem WGSL-Quelltext.
    pub fn from_source(
        device: &wgpu::Device,
        source: &str,
        initial_size: ViewportSize,
    ) -> RenderResult<Self> {
        let resources = CurveResources::new(device)?;
        let surface_layout = surface::create_layout(device);
        let pipeline = shader::create_pipeline(device, source, &[resources.layout(), &surface_layout])?;
        let surface = ViewportSurface::new(device, &surface_layout, initial_size)?;

        Ok(Self {
            pipeline,
            resources,
            surface_layout,
            surface,
        })
    }

    /// Überträgt alle als veraltet markierten Daten auf die GPU.
    ///
    /// Reihenfolge: Zeichenfläche, Konstanten, Punktpuffer. Jedes Flag wird
    /// erst nach erfolgreichem Schreiben gelöscht. Ohne gesetzte Flags
    /// passiert nichts.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        curves: &CurveSet,
        settings: &GlobalSettings,
        viewport: ViewportSize,
        dirty: &mut DirtyState,
    ) -> RenderResult<SyncReport> {
        let mut report = SyncReport::default();

        if dirty.viewport() {
            self.surface = ViewportSurface::new(device, &self.surface_layout, viewport)?;
            dirty.clear_viewport();
            report.surface_recreated = true;
        }

        if dirty.constants() {
            let constants = RasterConstants::build(curves, settings);
            self.resources.write_constants(queue, &constants);
            dirty.clear_constants();
            report.constants_written = true;
        }

        for kind in CurveKind::ALL {
            if dirty.curve_points(kind) {
                self.resources
                    .write_points(queue, kind, curves.curve(kind).points());
                dirty.clear_curve_points(kind);
                report.curves_written[kind.index()] = true;
            }
        }

        if !report.is_empty() {
            log::trace!("GPU-Sync: {:?}", report);
        }
        Ok(report)
    }

    /// Rasterisiert beide Kurven in die Zeichenfläche und reicht die Arbeit ein.
    pub fn dispatch(&self, device: &wgpu::Device, queue: &wgpu::Queue) {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Curve Raster Encoder"),
        });
        self.encode_dispatch(&mut encoder);
        queue.submit(Some(encoder.finish()));
    }

    /// Zeichnet den Compute-Pass in einen fremden Encoder.
    pub fn encode_dispatch(&self, encoder: &mut wgpu::CommandEncoder) {
        dispatch::encode(
            encoder,
            &self.pipeline,
            self.resources.bind_group(),
            self.surface.bind_group(),
            self.surface.size(),
        );
    }

    /// View der Zeichenfläche für die Präsentation.
    pub fn view(&self) -> &wgpu::TextureView {
        self.surface.view()
    }

    /// Textur der Zeichenfläche (kopierbar, z. B. für Readback).
    pub fn texture(&self) -> &wgpu::Texture {
        self.surface.texture()
    }

    /// Aktuelle Größe der Zeichenfläche.
    pub fn surface_size(&self) -> ViewportSize {
        self.surface.size()
    }
}
