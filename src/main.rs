//! Headless runner
//!
//! Plays the built-in level on autopilot and logs how it went.
//! Usage: `brickbreak [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::Path;
    use std::process::ExitCode;

    use brickbreak::Settings;
    use brickbreak::sim::{GamePhase, GameState, LevelLayout, autopilot_input, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickbreak (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let layout = LevelLayout::demo(&settings);
    let mut state = match GameState::new(&settings, &layout) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start level '{}': {e}", layout.name);
            return ExitCode::FAILURE;
        }
    };

    let mut frames = 0u64;
    while !state.is_finished() && frames < settings.max_frames {
        if matches!(state.phase, GamePhase::Serve | GamePhase::BallLost) {
            state.serve();
            continue;
        }
        let input = autopilot_input(&state);
        tick(&mut state, &input, settings.sim_dt);
        frames += 1;
    }

    match state.phase {
        GamePhase::Cleared => log::info!("Cleared in {frames} frames"),
        GamePhase::GameOver => log::info!("Out of lives after {frames} frames"),
        _ => log::info!(
            "Stopped after {frames} frames with {} blocks left",
            state.remaining_blocks
        ),
    }
    log::info!("Score: {}, lives: {}", state.score, state.lives);

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&state) {
            Ok(json) => log::debug!("Final state: {json}"),
            Err(e) => log::warn!("Failed to serialize final state: {e}"),
        }
    }

    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native only
}
