//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{ControlPoint, CurveKind, CurveStyle, ViewportSize};
use glam::{Vec2, Vec3};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Panel hat eine (ggf. neue) Größe in Pixeln
    ViewportResized { size: [f32; 2] },
    /// Cursor über dem Viewport bewegt (None = außerhalb)
    CursorMoved { curve_pos: Option<Vec2> },

    /// Kontrollpunkt an die Originalkurve anhängen ("Add")
    AddControlPointRequested,
    /// Mehrere Kontrollpunkte in einem Durchgang entfernen (Indizes vor dem Entfernen)
    RemoveControlPointsRequested { indices: Vec<usize> },
    /// Letzten Kontrollpunkt entfernen (Tastatur-Shortcut)
    RemoveLastControlPointRequested,
    /// Position eines Kontrollpunkts bearbeitet
    ControlPointPositionChanged { index: usize, position: Vec2 },
    /// Farbe eines Kontrollpunkts bearbeitet
    ControlPointColorChanged { index: usize, color: Vec3 },

    /// Farbe/Stärke einer Kurve bearbeitet
    CurveStyleChanged {
        kind: CurveKind,
        color: Vec3,
        thickness: f32,
    },

    /// Originalkurve ein-/ausblenden
    DrawOriginalToggled { enabled: bool },
    /// Polarkurve ein-/ausblenden
    DrawPolarToggled { enabled: bool },
    /// Sampleanzahl geändert
    SampleCountChanged { count: u32 },
    /// Polar-Parameter t1 geändert
    T1Changed { t1: f32 },
}

/// Mutierende Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Beenden anfordern
    RequestExit,
    /// Viewport-Größe übernehmen
    SetViewportSize { size: ViewportSize },
    /// Cursorposition übernehmen
    SetCursorPosition { curve_pos: Option<Vec2> },

    /// Kontrollpunkt anhängen (No-op bei voller Kapazität)
    AppendControlPoint { point: ControlPoint },
    /// Kontrollpunkte als Batch entfernen
    RemoveControlPoints { indices: Vec<usize> },
    /// Position eines Kontrollpunkts setzen
    SetControlPointPosition { index: usize, position: Vec2 },
    /// Farbe eines Kontrollpunkts setzen
    SetControlPointColor { index: usize, color: Vec3 },

    /// Stil einer Kurve setzen
    SetCurveStyle { kind: CurveKind, style: CurveStyle },

    /// Zeichnen der Originalkurve setzen
    SetDrawOriginal { enabled: bool },
    /// Zeichnen der Polarkurve setzen
    SetDrawPolar { enabled: bool },
    /// Sampleanzahl setzen (geklemmt auf [25, 100])
    SetSampleCount { count: u32 },
    /// t1 setzen (geklemmt auf [0, 1])
    SetT1 { t1: f32 },
}
