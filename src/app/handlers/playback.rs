//! Handler für Pause, Tempo, Segment-Auflösung und Physik-Schritte.

use crate::app::AppState;

/// Setzt den Pausenzustand.
pub fn set_paused(state: &mut AppState, paused: bool) {
    state.paused = paused;
    log::info!("{}", if paused { "Pausiert" } else { "Wiedergabe" });
}

/// Ändert den Tempo-Faktor um das übergebene Delta.
pub fn adjust_speed(state: &mut AppState, delta: f32) {
    state.point_set.speed_multiplier += delta;
    log::info!("Tempo-Faktor: {}", state.point_set.speed_multiplier);
}

/// Setzt die Segment-Auflösung und leitet die Kurve neu ab.
///
/// Werte unter 1 werden abgewiesen; der Zustand bleibt dann unverändert.
pub fn set_segment_count(state: &mut AppState, count: u32) -> anyhow::Result<()> {
    state.point_set.set_segment_count(count)?;
    state.recompute_curve();
    log::info!("Segment-Auflösung: {}", count);
    Ok(())
}

/// Führt einen Physik-Schritt aus und leitet die Kurve neu ab.
pub fn step_frame(state: &mut AppState) {
    let bounds = state.bounds;
    state.point_set.step(&bounds);
    state.recompute_curve();
    state.frame += 1;
}
