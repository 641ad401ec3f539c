//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod dirty;
pub mod options;
mod raster_constants;

pub use dirty::DirtyState;
pub use options::EditorOptions;
pub use raster_constants::RasterConstants;
