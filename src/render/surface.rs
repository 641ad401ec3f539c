//! Zeichenfläche des Compute-Shaders (Storage-Texture in Viewport-Größe).

use super::error::RenderResult;
use super::resources::allocate;
use crate::core::ViewportSize;

/// Texturformat der Zeichenfläche (storage-fähig, von egui samplebar).
pub const SURFACE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Bind-Group-Layout der Gruppe 1 (Storage-Texture, nur schreibend).
pub(crate) fn create_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Viewport Surface Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::COMPUTE,
            ty: wgpu::BindingType::StorageTexture {
                access: wgpu::StorageTextureAccess::WriteOnly,
                format: SURFACE_FORMAT,
                view_dimension: wgpu::TextureViewDimension::D2,
            },
            count: None,
        }],
    })
}

/// Textur, View und Bind-Group einer Viewport-Größe.
///
/// Wird bei Größenänderung komplett neu angelegt, nie in-place verändert.
pub(crate) struct ViewportSurface {
    size: ViewportSize,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    bind_group: wgpu::BindGroup,
}

impl ViewportSurface {
    /// Legt die Zeichenfläche in der gegebenen Größe an (mindestens 1×1).
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        size: ViewportSize,
    ) -> RenderResult<Self> {
        let size = ViewportSize::new(size.width, size.height);

        let texture = allocate(device, "viewport_surface", || {
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Surface"),
                size: wgpu::Extent3d {
                    width: size.width,
                    height: size.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: SURFACE_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING
                    | wgpu::TextureUsages::STORAGE_BINDING
                    | wgpu::TextureUsages::COPY_SRC,
                view_formats: &[],
            })
        })?;

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = allocate(device, "viewport_surface_bind_group", || {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Viewport Surface Bind Group"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                }],
            })
        })?;

        log::debug!("Zeichenfläche angelegt: {}x{}", size.width, size.height);

        Ok(Self {
            size,
            texture,
            view,
            bind_group,
        })
    }

    /// Aktuelle Größe in Pixeln.
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Textur der Zeichenfläche.
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// View zum Samplen (Präsentation durch egui).
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Bind-Group der Gruppe 1.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
