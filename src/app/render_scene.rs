//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        control_points: state.current_points(),
        curve: state.current_curve().to_vec(),
        bounds: state.bounds,
        paused: state.paused,
        segment_count: state.point_set.segment_count(),
        speed_multiplier: state.point_set.speed_multiplier,
    }
}
