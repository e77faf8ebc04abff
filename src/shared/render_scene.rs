//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie
//! konsumiert; der Kern referenziert kein Zeichen-Handle.

use crate::core::Bounds;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Positionen der rohen Kontrollpunkte (Punkt-Darstellung)
    pub control_points: Vec<Vec2>,
    /// Dichte Polylinie der geglätteten, geschlossenen Kurve
    pub curve: Vec<Vec2>,
    /// Begrenzung, in der sich die Punkte bewegen
    pub bounds: Bounds,
    /// Ob die Animation aktuell pausiert ist
    pub paused: bool,
    /// Aktuelle Segment-Auflösung (für die Anzeige)
    pub segment_count: u32,
    /// Aktueller Tempo-Faktor (für die Anzeige)
    pub speed_multiplier: f32,
}

impl RenderScene {
    /// Gibt zurück, ob eine geglättete Kurve zum Zeichnen vorhanden ist.
    pub fn has_curve(&self) -> bool {
        !self.curve.is_empty()
    }
}
