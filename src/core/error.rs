//! Fehler-Taxonomie der Kern-Operationen.

use thiserror::Error;

/// Fehler aus Kern-Operationen.
///
/// Ein fehlender Treffer beim Löschen gehört bewusst nicht hierher:
/// ein Klick ins Leere ist ein stilles No-op, kein Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// Ein Vektor-Operand enthält nicht-endliche Komponenten (NaN oder ±∞).
    #[error("ungültiger Operand: Vektor-Komponenten müssen endlich sein (x={x}, y={y})")]
    InvalidOperand {
        /// X-Komponente des abgewiesenen Vektors
        x: f32,
        /// Y-Komponente des abgewiesenen Vektors
        y: f32,
    },
    /// Die Segment-Auflösung muss mindestens 1 betragen.
    #[error("ungültige Konfiguration: Segment-Auflösung muss >= 1 sein (war {count})")]
    InvalidConfiguration {
        /// Der abgewiesene Wert
        count: u32,
    },
}
