//! Handler für Punkt-Editing und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::shared::options::SEED_VELOCITY_MAX;
use glam::Vec2;
use rand::Rng;

/// Aktiviert ein Editor-Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Zufällige Startgeschwindigkeit für neu platzierte Punkte (beide
/// Komponenten in `[0, SEED_VELOCITY_MAX)`).
fn seed_velocity() -> Vec2 {
    let mut rng = rand::rng();
    Vec2::new(
        rng.random_range(0.0..SEED_VELOCITY_MAX),
        rng.random_range(0.0..SEED_VELOCITY_MAX),
    )
}

/// Fügt einen Kontrollpunkt hinzu und leitet die Kurve neu ab.
///
/// Ohne übergebene Geschwindigkeit wird eine zufällige gewählt.
/// Nicht-endliche Eingaben brechen die Mutation ab und lassen den
/// Zustand unverändert.
pub fn add_point(
    state: &mut AppState,
    position: Vec2,
    velocity: Option<Vec2>,
) -> anyhow::Result<()> {
    let velocity = velocity.unwrap_or_else(seed_velocity);
    state.point_set.add_point(position, velocity)?;
    state.recompute_curve();

    log::info!(
        "Punkt {} an ({:.1}, {:.1}) hinzugefügt",
        state.point_set.len(),
        position.x,
        position.y
    );
    Ok(())
}

/// Entfernt den ersten Kontrollpunkt innerhalb der Toleranz.
///
/// Kein Treffer ist ein stilles No-op (Klick ins Leere).
pub fn delete_point(state: &mut AppState, position: Vec2, tolerance: f32) {
    match state.point_set.delete_point(position, tolerance) {
        Some(removed) => {
            state.recompute_curve();
            log::info!(
                "Punkt an ({:.1}, {:.1}) entfernt, {} verbleiben",
                removed.position.x,
                removed.position.y,
                state.point_set.len()
            );
        }
        None => {
            log::debug!(
                "Kein Punkt innerhalb Toleranz {} um ({:.1}, {:.1})",
                tolerance,
                position.x,
                position.y
            );
        }
    }
}

/// Entfernt alle Kontrollpunkte (Neustart).
pub fn clear_points(state: &mut AppState) {
    let count = state.point_set.len();
    state.point_set.clear();
    state.recompute_curve();
    log::info!("{} Punkt(e) entfernt, Kurve zurückgesetzt", count);
}
