//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Alle Mutationen an Kurven und Einstellungen laufen hier durch und setzen
//! die passenden Dirty-Flags. Andere Schichten setzen keine Flags.

pub mod control_points;
pub mod curve_style;
pub mod settings;
pub mod viewport;
