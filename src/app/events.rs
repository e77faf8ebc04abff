//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorTool;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick in den Viewport (Wirkung hängt vom aktiven Werkzeug ab)
    CanvasClicked { position: Vec2 },
    /// Neuen Kontrollpunkt hinzufügen (None = zufällige Startgeschwindigkeit)
    AddPointRequested {
        position: Vec2,
        velocity: Option<Vec2>,
    },
    /// Kontrollpunkt nahe der Position entfernen
    DeletePointRequested { position: Vec2 },
    /// Alle Kontrollpunkte entfernen (Neustart)
    ClearRequested,
    /// Pause/Wiedergabe umschalten
    PauseToggled,
    /// Tempo-Faktor erhöhen
    SpeedIncreaseRequested,
    /// Tempo-Faktor verringern
    SpeedDecreaseRequested,
    /// Segment-Auflösung erhöhen
    SegmentCountIncreaseRequested,
    /// Segment-Auflösung verringern
    SegmentCountDecreaseRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Ein Frame-Tick der Hauptschleife
    FrameAdvanced,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Kontrollpunkt an Position hinzufügen (None = zufällige Geschwindigkeit)
    AddPointAt {
        position: Vec2,
        velocity: Option<Vec2>,
    },
    /// Ersten Kontrollpunkt innerhalb der Toleranz entfernen
    DeletePointNear { position: Vec2, tolerance: f32 },
    /// Alle Kontrollpunkte entfernen
    ClearPoints,
    /// Pausenzustand setzen
    SetPaused { paused: bool },
    /// Tempo-Faktor um Delta ändern
    AdjustSpeed { delta: f32 },
    /// Segment-Auflösung setzen (>= 1)
    SetSegmentCount { count: u32 },
    /// Einen Physik-Schritt ausführen und die Kurve neu ableiten
    StepFrame,
    /// Anwendung beenden
    RequestExit,
}
