//! Knot-Screensaver.
//!
//! Animierte, geschlossene Glättungskurve über springenden Kontrollpunkten.
//! Die Binary treibt eine Headless-Demo-Schleife: Punkte platzieren, Physik
//! fortschreiben, Kurve neu ableiten und den Szenenzustand loggen. Das
//! Zeichnen übernimmt ein externer Renderer auf Basis der RenderScene.

use glam::Vec2;
use knot_screensaver::shared::options::FRAME_DELAY_MS;
use knot_screensaver::{smoother, AppController, AppIntent, AppState, SaverOptions};
use rand::Rng;

/// Anzahl der beim Start platzierten Punkte.
const DEMO_POINT_COUNT: usize = 5;
/// Anzahl der simulierten Frames.
const DEMO_FRAME_COUNT: u64 = 600;
/// Intervall (in Frames) für Status-Logs.
const LOG_INTERVAL: u64 = 60;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Knot-Screensaver v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let options = SaverOptions::load_from_file(&SaverOptions::config_path());
    let frame_delay = std::time::Duration::from_millis(FRAME_DELAY_MS);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    // Startpunkte zufällig im Viewport platzieren
    let mut rng = rand::rng();
    for _ in 0..DEMO_POINT_COUNT {
        let position = Vec2::new(
            rng.random_range(0.0..state.bounds.width()),
            rng.random_range(0.0..state.bounds.height()),
        );
        controller.handle_intent(
            &mut state,
            AppIntent::AddPointRequested {
                position,
                velocity: None,
            },
        )?;
    }

    // Die Optionen starten standardmäßig pausiert; für die Demo anlaufen lassen
    if state.paused {
        controller.handle_intent(&mut state, AppIntent::PauseToggled)?;
    }

    for frame in 0..DEMO_FRAME_COUNT {
        controller.handle_intent(&mut state, AppIntent::FrameAdvanced)?;

        if frame % LOG_INTERVAL == 0 {
            let scene = controller.build_render_scene(&state);
            let escaped = scene
                .control_points
                .iter()
                .filter(|p| !scene.bounds.contains(**p))
                .count();
            log::info!(
                "Frame {}: {} Punkte, {} Kurvenpunkte (Umfang {:.0}), {} außerhalb der Box",
                frame,
                scene.control_points.len(),
                scene.curve.len(),
                smoother::polyline_length(&scene.curve),
                escaped
            );
        }

        if state.should_exit {
            break;
        }

        std::thread::sleep(frame_delay);
    }

    log::info!("Demo beendet nach {} Physik-Frames", state.frame);
    Ok(())
}
