//! Application State — zentrale Datenhaltung.

use crate::core::{smoother, Bounds, PointSet};
use crate::shared::SaverOptions;
use glam::Vec2;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Klick platziert einen neuen Kontrollpunkt
    #[default]
    Place,
    /// Klick entfernt den ersten Kontrollpunkt innerhalb der Toleranz
    Erase,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte samt Physik-Parametern
    pub point_set: PointSet,
    /// Zuletzt abgeleitete geglättete Kurve; wird bei jeder Mutation
    /// vollständig ersetzt, nie partiell aktualisiert
    curve: Vec<Vec2>,
    /// Ob die Animation pausiert ist
    pub paused: bool,
    /// Aktives Werkzeug für Klicks in den Viewport
    pub tool: EditorTool,
    /// Begrenzung, in der sich die Punkte bewegen
    pub bounds: Bounds,
    /// Laufzeit-Optionen
    pub options: SaverOptions,
    /// Anzahl verarbeiteter Physik-Frames
    pub frame: u64,
    /// Signalisiert dem Host, die Frame-Schleife kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Anwendungszustand aus den übergebenen Optionen.
    pub fn with_options(options: SaverOptions) -> Self {
        let mut point_set = PointSet::new();
        point_set.speed_multiplier = options.speed_multiplier;
        if let Err(e) = point_set.set_segment_count(options.segment_count) {
            log::warn!("Optionen: {} — verwende Standardwert", e);
        }

        Self {
            bounds: options.bounds(),
            paused: options.start_paused,
            point_set,
            curve: Vec::new(),
            tool: EditorTool::default(),
            options,
            frame: 0,
            should_exit: false,
        }
    }

    /// Erstellt einen Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SaverOptions::default())
    }

    /// Anzahl der Kontrollpunkte (für Anzeige und Tests).
    pub fn point_count(&self) -> usize {
        self.point_set.len()
    }

    /// Die zuletzt abgeleitete geglättete Kurve.
    pub fn current_curve(&self) -> &[Vec2] {
        &self.curve
    }

    /// Die rohen Kontrollpunkt-Positionen in Reihenfolge.
    pub fn current_points(&self) -> Vec<Vec2> {
        self.point_set.positions()
    }

    /// Leitet die Kurve aus dem aktuellen PointSet neu ab.
    ///
    /// Wird nach jeder Mutation und jedem Physik-Schritt aufgerufen;
    /// die alte Folge wird als Ganzes ersetzt.
    pub fn recompute_curve(&mut self) {
        self.curve = smoother::smooth(
            &self.point_set.positions(),
            self.point_set.segment_count(),
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
