//! Core-Domänentypen: Kontrollpunkte, Kurven, Polar-Ableitung, Einstellungen, Viewport.

pub mod bezier;
pub mod control_point;
/// Kurvenmodell
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - CurveSet: Container für Original- und Polarkurve
/// - Curve: Geordnete Kontrollpunkte plus Darstellungsstil
/// - CurveKind: Rolle einer Kurve (Original oder abgeleitete Polare)
pub mod curve;
pub mod polar;
pub mod settings;
pub mod viewport;

pub use control_point::ControlPoint;
pub use curve::{Curve, CurveKind, CurveSet, CurveStyle, MAX_CONTROL_POINTS};
pub use polar::{derive_polar, POLAR_POINT_COLOR};
pub use settings::GlobalSettings;
pub use viewport::{ViewportMapping, ViewportSize};
