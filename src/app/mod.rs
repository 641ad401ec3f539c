//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurven, Einstellungen, View, Dirty-Flags).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, ViewState};
