//! Fixed timestep simulation tick
//!
//! One call advances exactly one 60 Hz frame. Within a tick the order is
//! fixed: input → player physics → survival scoring → scripted motion →
//! collision/event resolution → state transitions. Collisions are always
//! checked against post-movement positions, and a death short-circuits the
//! remainder of the tick so nothing observes the dead attempt.

use super::chase::chase_step;
use super::level::LevelError;
use super::physics::step_player;
use super::state::{Attempt, GameEvent, GameState, GameView, Session, SoundEffect};
use crate::consts::TICKS_PER_SECOND;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: run left
    pub move_left: bool,
    /// Held: run right
    pub move_right: bool,
    /// Edge: jump request (cleared by the caller after the tick)
    pub jump: bool,
    /// Edge: attack the boss
    pub attack: bool,
    /// Edge: leave the start/win screen
    pub start: bool,
    /// Edge: abandon the run and return to the start screen
    pub reset: bool,
}

/// What the playing tick decided to do with the view
enum Outcome {
    Continue,
    /// Player died: rebuild the attempt on the same level, keep the score
    Restart,
    /// Map end reached with levels remaining
    Advance,
    /// Boss HP hit zero
    Won(u32),
    /// Reset input: back to the start screen, score discarded
    Reset,
}

/// Advance the game state by one fixed timestep.
///
/// Gameplay outcomes (death, win, level change) are events and view
/// transitions, never errors; the only error is missing level geometry
/// during a transition, which is fatal to the attempt and surfaces here.
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), LevelError> {
    state.events.clear();
    state.time_ticks += 1;

    match &state.view {
        GameView::Start => {
            if input.start {
                let session = Session::new();
                let attempt = Attempt::new(state.levels.load(session.level)?, &state.tuning);
                log::info!("run started on level {}", session.level);
                state.view = GameView::Playing { session, attempt };
            }
            Ok(())
        }
        GameView::Win { .. } => {
            if input.start {
                state.view = GameView::Start;
            }
            Ok(())
        }
        GameView::Playing { .. } => playing_tick(state, input),
    }
}

fn playing_tick(state: &mut GameState, input: &TickInput) -> Result<(), LevelError> {
    let max_level = state.levels.max_level();
    let mut events: Vec<GameEvent> = Vec::new();
    let mut sounds: Vec<SoundEffect> = Vec::new();

    let outcome = {
        let GameView::Playing { session, attempt } = &mut state.view else {
            unreachable!("playing_tick called outside Playing");
        };
        run_playing(
            session,
            attempt,
            input,
            &state.tuning,
            max_level,
            &mut events,
            &mut sounds,
        )
    };

    state.events.append(&mut events);
    for sound in sounds {
        state.queue_sound(sound);
    }

    match outcome {
        Outcome::Continue => {}
        Outcome::Reset => {
            log::info!("run abandoned; returning to start screen");
            state.view = GameView::Start;
        }
        Outcome::Won(final_score) => {
            log::info!("boss defeated; final score {final_score}");
            state.view = GameView::Win { final_score };
        }
        Outcome::Restart => {
            let GameView::Playing { session, attempt } = &mut state.view else {
                unreachable!();
            };
            *attempt = Attempt::new(state.levels.load(session.level)?, &state.tuning);
            log::info!(
                "player died; restarting level {} with score {}",
                session.level,
                session.score
            );
        }
        Outcome::Advance => {
            let GameView::Playing { session, attempt } = &mut state.view else {
                unreachable!();
            };
            session.level += 1;
            *attempt = Attempt::new(state.levels.load(session.level)?, &state.tuning);
            log::info!(
                "level complete; advancing to level {} with score {}",
                session.level,
                session.score
            );
        }
    }
    Ok(())
}

/// The per-frame gameplay pass. Mutates the attempt in place and reports the
/// view transition, if any, for the caller to apply.
fn run_playing(
    session: &mut Session,
    attempt: &mut Attempt,
    input: &TickInput,
    tuning: &Tuning,
    max_level: u32,
    events: &mut Vec<GameEvent>,
    sounds: &mut Vec<SoundEffect>,
) -> Outcome {
    if input.reset {
        return Outcome::Reset;
    }

    // Held movement sets velocity directly; releasing stops on a dime.
    // The first horizontal input of the attempt wakes the enemy.
    let player = &mut attempt.player;
    player.vel.x = 0.0;
    if input.move_left {
        player.vel.x = -tuning.player_move_speed;
    }
    if input.move_right {
        player.vel.x = tuning.player_move_speed;
    }
    if input.move_left || input.move_right {
        if let Some(enemy) = &mut attempt.enemy {
            enemy.activated = true;
        }
    }

    // Jump is edge-triggered and gated on standing on a platform
    if input.jump && attempt.player.grounded {
        attempt.player.vel.y = tuning.player_jump_speed;
        sounds.push(SoundEffect::Jump);
    }

    // Attack lands on every edge while a boss exists, no range gate. With no
    // boss the input is a plain no-op; a BossDamaged event can only be minted
    // here, with the boss borrowed, so the event never dangles.
    if input.attack {
        if let Some(boss) = &mut attempt.boss {
            boss.apply_damage(tuning.attack_damage);
            events.push(GameEvent::BossDamaged {
                amount: tuning.attack_damage,
            });
        }
    }

    // Physics strictly precedes every collision check
    step_player(
        &mut attempt.player,
        &attempt.geometry.platforms,
        tuning.gravity,
    );

    // Survival bonus ticks only on the boss level
    if attempt.is_boss_level() {
        attempt.survival_ticks += 1;
        if attempt.survival_ticks >= TICKS_PER_SECOND {
            attempt.survival_ticks = 0;
            session.score += tuning.survival_bonus;
        }
    }

    let player_box = attempt.player.aabb();

    // Enemy chase and contact
    if let Some(enemy) = &mut attempt.enemy {
        if enemy.activated {
            enemy.pos = chase_step(
                enemy.pos,
                attempt.player.pos,
                tuning.enemy_chase_speed,
                tuning.enemy_vertical_speed(),
            );
        }
        if enemy.aabb().intersects(&player_box) {
            events.push(GameEvent::PlayerDied);
            sounds.push(SoundEffect::GameOver);
            return Outcome::Restart;
        }
    }

    // Boss chase, lethal contact, defeat check
    if let Some(boss) = &mut attempt.boss {
        boss.pos = chase_step(
            boss.pos,
            attempt.player.pos,
            tuning.boss_chase_speed,
            tuning.boss_vertical_speed(),
        );
        if boss.aabb().intersects(&player_box) {
            events.push(GameEvent::PlayerDied);
            sounds.push(SoundEffect::GameOver);
            return Outcome::Restart;
        }
        if boss.hp <= 0 {
            events.push(GameEvent::BossDefeated);
            return Outcome::Won(session.score);
        }
    }

    // Coins: every coin overlapped this tick registers; removal is a
    // set-difference, never in-place mutation mid-iteration
    let collected: Vec<u32> = attempt
        .coins
        .iter()
        .filter(|coin| coin.aabb().intersects(&player_box))
        .map(|coin| coin.id)
        .collect();
    if !collected.is_empty() {
        attempt.coins.retain(|coin| !collected.contains(&coin.id));
        for id in collected {
            session.score += tuning.coin_score;
            events.push(GameEvent::CoinCollected { id });
            sounds.push(SoundEffect::Coin);
        }
    }

    // Hazard contact is death
    if attempt
        .geometry
        .hazards
        .iter()
        .any(|hazard| hazard.intersects(&player_box))
    {
        events.push(GameEvent::PlayerDied);
        sounds.push(SoundEffect::GameOver);
        return Outcome::Restart;
    }

    // Map end: advance while levels remain; the final level is won through
    // the boss, so reaching its edge changes nothing
    if attempt.player.pos.x >= attempt.geometry.width {
        events.push(GameEvent::LevelComplete);
        if session.level < max_level {
            return Outcome::Advance;
        }
        log::debug!("map end reached on the final level; ignored");
    }

    Outcome::Continue
}
