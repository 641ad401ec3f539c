//! Fehlertypen des GPU-Rasterisierers.

use std::path::PathBuf;

/// Fehler beim Aufbau oder Synchronisieren der GPU-Ressourcen.
///
/// Alle Varianten gelten für den Aufrufer als fatal.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Shader-Datei konnte nicht gelesen werden
    #[error("Shader-Datei {path:?} nicht lesbar: {source}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Shader-Kompilierung oder Pipeline-Erstellung fehlgeschlagen
    #[error("Shader-Kompilierung fehlgeschlagen: {0}")]
    ShaderCompile(String),
    /// GPU-Ressource konnte nicht angelegt werden
    #[error("GPU-Allokation '{label}' fehlgeschlagen: {message}")]
    Allocation { label: &'static str, message: String },
}

/// Result-Alias für Render-Operationen.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
