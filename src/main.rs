//! Headless demo runner
//!
//! Drives the simulation with a scripted input stream: start the run, hold
//! right, hop periodically, and hammer the attack key once the boss level is
//! reached. Useful for smoke-testing the full level progression and for
//! eyeballing the event/sound stream without a renderer attached.

use std::error::Error;
use std::process;

use canyon_run::consts::SIM_DT;
use canyon_run::sim::{GameState, GameView, TickInput, tick};
use canyon_run::SceneSnapshot;

const MAX_TICKS: u64 = 60 * 60 * 5; // five simulated minutes

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("demo run failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut state = GameState::new();

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start)?;

    for frame in 0..MAX_TICKS {
        // One-shot inputs are rebuilt every frame, never held over
        let mut input = TickInput {
            move_right: true,
            ..Default::default()
        };
        if frame % 50 == 0 {
            input.jump = true;
        }
        if let GameView::Playing { attempt, .. } = &state.view {
            if attempt.is_boss_level() && frame % 5 == 0 {
                input.attack = true;
            }
        }

        tick(&mut state, &input)?;

        for event in &state.events {
            log::info!("tick {}: {event:?}", state.time_ticks);
        }
        for sound in state.drain_sounds() {
            log::debug!("sound: {sound:?}");
        }

        if matches!(state.view, GameView::Win { .. }) {
            break;
        }
    }

    let sim_seconds = state.time_ticks as f32 * SIM_DT;
    log::info!(
        "demo finished after {} ticks ({sim_seconds:.1}s simulated)",
        state.time_ticks
    );

    let snapshot = SceneSnapshot::capture(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
