//! Bezier-Polar-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    derive_polar, ControlPoint, Curve, CurveKind, CurveSet, CurveStyle, GlobalSettings,
    ViewportMapping, ViewportSize, MAX_CONTROL_POINTS,
};
pub use shared::{DirtyState, EditorOptions, RasterConstants};
