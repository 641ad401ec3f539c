//! UI-Komponenten: Properties, Viewport, Status-Bar, Theme.

pub mod input;
/// UI-Layer mit egui
///
/// Panels erzeugen ausschließlich `AppIntent`s; der State wird hier nie verändert.
pub mod properties;
pub mod status;
pub mod theme;
pub mod viewport;
mod widgets;

pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use viewport::render_viewport;
