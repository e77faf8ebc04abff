//! Zentrale Konfiguration des Knot-Screensavers.
//!
//! `SaverOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Bounds, DEFAULT_SEGMENT_COUNT, DEFAULT_SPEED_MULTIPLIER};
use serde::{Deserialize, Serialize};

// ── Viewport ────────────────────────────────────────────────────────

/// Standard-Viewport-Breite in Pixeln.
pub const VIEWPORT_WIDTH: f32 = 800.0;
/// Standard-Viewport-Höhe in Pixeln.
pub const VIEWPORT_HEIGHT: f32 = 600.0;

// ── Editieren ───────────────────────────────────────────────────────

/// Toleranz (Pixel, pro Achse) für das Löschen per Klick.
pub const DELETE_TOLERANCE: f32 = 4.0;
/// Obergrenze der zufälligen Startgeschwindigkeit neuer Punkte (pro Achse).
pub const SEED_VELOCITY_MAX: f32 = 2.0;

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Schrittweite der Tempo-Anpassung.
pub const SPEED_STEP: f32 = 5.0;
/// Unterhalb dieses Tempo-Faktors wird nicht weiter verringert.
pub const SPEED_DECREASE_FLOOR: f32 = 5.0;
/// Oberhalb dieses Tempo-Faktors wird nicht weiter erhöht.
pub const SPEED_INCREASE_CEILING: f32 = 190.0;
/// Wartezeit pro Frame in Millisekunden (Frame-Pacing der Demo-Schleife).
pub const FRAME_DELAY_MS: u64 = 16;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `knot_screensaver.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaverOptions {
    /// Viewport-Breite in Pixeln
    pub viewport_width: f32,
    /// Viewport-Höhe in Pixeln
    pub viewport_height: f32,
    /// Segment-Auflösung pro Glättungsfenster (>= 1)
    pub segment_count: u32,
    /// Globaler Tempo-Faktor der Punktbewegung
    pub speed_multiplier: f32,
    /// Lösch-Toleranz pro Achse in Pixeln
    #[serde(default = "default_delete_tolerance")]
    pub delete_tolerance: f32,
    /// Ob die Animation pausiert startet
    #[serde(default = "default_start_paused")]
    pub start_paused: bool,
}

impl Default for SaverOptions {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            segment_count: DEFAULT_SEGMENT_COUNT,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            delete_tolerance: DELETE_TOLERANCE,
            start_paused: true,
        }
    }
}

/// Serde-Default für `delete_tolerance` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_delete_tolerance() -> f32 {
    DELETE_TOLERANCE
}

/// Serde-Default für `start_paused` (Abwärtskompatibilität).
fn default_start_paused() -> bool {
    true
}

impl SaverOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("knot_screensaver"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("knot_screensaver.toml")
    }

    /// Begrenzung des Viewports aus den konfigurierten Maßen.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.viewport_width, self.viewport_height)
    }
}
