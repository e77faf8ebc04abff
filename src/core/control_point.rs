//! Einzelner Kontrollpunkt: Position plus Eigengeschwindigkeit.

use super::error::CurveError;
use glam::Vec2;

/// Ein vom Benutzer platzierter Kontrollpunkt der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Aktuelle Position im Viewport
    pub position: Vec2,
    /// Geschwindigkeit pro Frame (vor Anwendung des Tempo-Faktors)
    pub velocity: Vec2,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    ///
    /// Nicht-endliche Komponenten (NaN, ±∞) werden mit
    /// [`CurveError::InvalidOperand`] abgewiesen.
    pub fn new(position: Vec2, velocity: Vec2) -> Result<Self, CurveError> {
        ensure_finite(position)?;
        ensure_finite(velocity)?;
        Ok(Self { position, velocity })
    }
}

/// Weist Vektoren mit nicht-endlichen Komponenten ab.
pub(crate) fn ensure_finite(v: Vec2) -> Result<Vec2, CurveError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CurveError::InvalidOperand { x: v.x, y: v.y })
    }
}
