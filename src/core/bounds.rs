//! Rechteckige Begrenzung des Viewports für die Bounce-Physik.

use glam::Vec2;

/// Achsen-parallele Begrenzung, gegen die Kontrollpunkte reflektiert werden.
///
/// Wird dem Kern bei jedem Physik-Schritt vom Aufrufer übergeben; der Kern
/// hält keine Fenster- oder Display-Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Minimale Y-Koordinate (oben)
    pub min_y: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Maximale Y-Koordinate (unten)
    pub max_y: f32,
}

impl Bounds {
    /// Erstellt Bounds aus einer Viewport-Größe (Ursprung oben links bei 0,0).
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }

    /// Breite des Rechtecks.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Höhe des Rechtecks.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Prüft ob eine Position innerhalb der Begrenzung liegt.
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }
}
