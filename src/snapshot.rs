//! Read-only scene snapshot for presentation layers
//!
//! A [`SceneSnapshot`] is a serializable copy of everything a renderer or
//! debug tool needs for one frame. Capturing never mutates the simulation,
//! and the snapshot holds no references into it, so it can outlive the tick
//! that produced it.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, GameView};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    Start,
    Playing,
    Win,
}

/// Boss as seen by the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BossView {
    pub pos: Vec2,
    /// Remaining HP as a fraction of max, clamped to [0, 1]. Feeds HP bars
    /// directly without exposing the raw tuning numbers.
    pub hp_fraction: f32,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub mode: ViewMode,
    /// Current level number while playing
    pub level: Option<u32>,
    /// Score while playing or on the win screen
    pub score: Option<u32>,
    pub player_pos: Option<Vec2>,
    pub enemy_pos: Option<Vec2>,
    pub boss: Option<BossView>,
    pub coin_positions: Vec<Vec2>,
    /// Map width in pixels, for camera clamping
    pub map_width: Option<f32>,
}

impl SceneSnapshot {
    pub fn capture(state: &GameState) -> Self {
        match &state.view {
            GameView::Start => Self {
                mode: ViewMode::Start,
                level: None,
                score: None,
                player_pos: None,
                enemy_pos: None,
                boss: None,
                coin_positions: Vec::new(),
                map_width: None,
            },
            GameView::Win { final_score } => Self {
                mode: ViewMode::Win,
                level: None,
                score: Some(*final_score),
                player_pos: None,
                enemy_pos: None,
                boss: None,
                coin_positions: Vec::new(),
                map_width: None,
            },
            GameView::Playing { session, attempt } => {
                let max_hp = state.tuning.boss_max_hp.max(1) as f32;
                Self {
                    mode: ViewMode::Playing,
                    level: Some(session.level),
                    score: Some(session.score),
                    player_pos: Some(attempt.player.pos),
                    enemy_pos: attempt.enemy.as_ref().map(|e| e.pos),
                    boss: attempt.boss.as_ref().map(|b| BossView {
                        pos: b.pos,
                        hp_fraction: (b.hp as f32 / max_hp).clamp(0.0, 1.0),
                    }),
                    coin_positions: attempt.coins.iter().map(|c| c.pos).collect(),
                    map_width: Some(attempt.geometry.width),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{tick, GameView, LevelGeometry, LevelSet, TickInput};
    use crate::tuning::Tuning;

    fn boss_state() -> GameState {
        let geometry = LevelGeometry::from_ascii(
            1,
            &["....................", "o...................", "####################"],
            false,
            true,
        );
        let mut state =
            GameState::with_levels(LevelSet::from_levels(vec![geometry]), Tuning::default());
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start).unwrap();
        state
    }

    #[test]
    fn start_screen_snapshot_is_empty() {
        let state = GameState::new();
        let snap = SceneSnapshot::capture(&state);
        assert_eq!(snap.mode, ViewMode::Start);
        assert!(snap.player_pos.is_none());
        assert!(snap.coin_positions.is_empty());
    }

    #[test]
    fn playing_snapshot_mirrors_the_attempt() {
        let state = boss_state();
        let snap = SceneSnapshot::capture(&state);
        assert_eq!(snap.mode, ViewMode::Playing);
        assert_eq!(snap.level, Some(1));
        assert_eq!(snap.score, Some(0));
        assert!(snap.player_pos.is_some());
        assert!(snap.enemy_pos.is_none());
        assert_eq!(snap.coin_positions.len(), 1);
        assert_eq!(snap.map_width, Some(1280.0));
    }

    #[test]
    fn boss_hp_fraction_starts_full_and_falls() {
        let mut state = boss_state();
        assert_eq!(SceneSnapshot::capture(&state).boss.unwrap().hp_fraction, 1.0);

        let attack = TickInput {
            attack: true,
            ..Default::default()
        };
        tick(&mut state, &attack).unwrap();
        let fraction = SceneSnapshot::capture(&state).boss.unwrap().hp_fraction;
        assert!(fraction < 1.0 && fraction > 0.0);
    }

    #[test]
    fn win_snapshot_carries_the_final_score() {
        let mut state = GameState::new();
        state.view = GameView::Win { final_score: 420 };
        let snap = SceneSnapshot::capture(&state);
        assert_eq!(snap.mode, ViewMode::Win);
        assert_eq!(snap.score, Some(420));
        assert!(snap.boss.is_none());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = SceneSnapshot::capture(&boss_state());
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"mode\":\"Playing\""));
        assert!(json.contains("\"map_width\":1280.0"));
    }
}
