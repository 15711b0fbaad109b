//! Step Platformer entry point
//!
//! Headless driver: loads a level (the built-in one unless a JSON path is
//! given), feeds a scripted run through the stepper on a simulated 60 Hz
//! clock, and logs what happens.
//!
//! Usage: `step-platformer [level.json] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Step Platformer (headless) starting...");

    if let Err(e) = demo::run(std::env::args().skip(1)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on wasm
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use step_platformer::audio::{AudioManager, AudioSink, SoundEffect};
    use step_platformer::renderer::{ViewWindow, scene};
    use step_platformer::sim::{Command, GameState, Stepper, apply_command};
    use step_platformer::{Level, LevelError, Settings};

    /// Simulated frame rate
    const FPS: f64 = 60.0;
    /// Length of the scripted run (seconds)
    const RUN_SECONDS: f64 = 8.0;
    const ASPECT: f32 = 16.0 / 9.0;

    /// Commands issued at fixed times
    const SCRIPT: &[(f64, Command)] = &[
        (0.5, Command::RightDown),
        (1.5, Command::Jump),
        (2.6, Command::Jump),
        (3.8, Command::Jump),
        (5.0, Command::RightUp),
        (5.2, Command::LeftDown),
        (5.4, Command::Jump),
        (7.0, Command::LeftUp),
    ];

    /// Sink that logs cues instead of playing them; voices finish instantly
    struct LogSink;

    impl AudioSink for LogSink {
        fn is_playing(&self, _effect: SoundEffect, _voice: usize) -> bool {
            false
        }

        fn play(&mut self, effect: SoundEffect, voice: usize, volume: f32) {
            log::info!("♪ {:?} (voice {}, volume {:.2})", effect, voice, volume);
        }
    }

    pub fn run(mut args: impl Iterator<Item = String>) -> Result<(), LevelError> {
        let level = match args.next() {
            Some(path) => Level::load(path)?,
            None => Level::builtin(),
        };
        let settings = match args.next() {
            Some(path) => Settings::load(path)?,
            None => level.settings(),
        };

        let mut state = GameState::from_level(&level, settings)?;
        let mut audio = AudioManager::with_settings(Some(Box::new(LogSink)), &state.settings);
        let mut stepper = Stepper::starting_at(0.0);
        let mut script = SCRIPT.iter().peekable();

        let frames = (RUN_SECONDS * FPS) as u64;
        let mut substeps = 0u64;
        for frame in 1..=frames {
            let now = frame as f64 / FPS;

            while let Some(&&(at, command)) = script.peek() {
                if at > now {
                    break;
                }
                apply_command(&mut state, command);
                script.next();
            }

            substeps += stepper.frame(&mut state, now) as u64;

            let events = state.drain_events();
            for event in &events {
                log::debug!("t={:.2}s {:?}", now, event);
            }
            audio.handle_events(&events);

            if frame % FPS as u64 == 0 {
                let view = ViewWindow::follow(
                    state.actor.pos(),
                    level.playing_width,
                    level.playing_height,
                    ASPECT,
                );
                let vertices: usize = scene(&state).iter().map(|b| b.vertices.len()).sum();
                log::info!(
                    "t={:.0}s pos=({:.2}, {:.2}) view=[{:.2}, {:.2}] score={} left={} verts={}",
                    now,
                    state.actor.pos().x,
                    state.actor.pos().y,
                    view.left,
                    view.right,
                    state.score(),
                    state.remaining(),
                    vertices
                );
            }
        }

        log::info!(
            "Done: {} frames, {} sub-steps, score {} ({} collectibles left)",
            frames,
            substeps,
            state.score(),
            state.remaining()
        );
        Ok(())
    }
}
