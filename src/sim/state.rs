//! Game state and core simulation types
//!
//! The state splits along attempt/session lines: an [`Attempt`] is everything
//! rebuilt wholesale when the player dies or the level changes (entities,
//! geometry, the survival counter), while a [`Session`] is what survives
//! those reloads (level number, score). A full reset to the start screen
//! discards both.

use glam::Vec2;

use super::collision::Aabb;
use super::level::{LevelGeometry, LevelSet};
use crate::consts::*;
use crate::tuning::Tuning;

/// The player-controlled sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Standing on a platform this tick; gates jumping
    pub grounded: bool,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(PLAYER_HALF_W, PLAYER_HALF_H))
    }
}

/// The chase enemy (non-boss levels). Stationary until the player's first
/// horizontal-movement input of the attempt flips `activated`.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub activated: bool,
}

impl Enemy {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            pos,
            activated: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(ENEMY_HALF_EXTENT))
    }
}

/// The final-level boss. Contact is lethal; attack inputs whittle its HP.
#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    pub hp: i32,
}

impl Boss {
    pub fn spawn(pos: Vec2, max_hp: i32) -> Self {
        Self { pos, hp: max_hp }
    }

    /// Remove hit points, floored at zero. No re-heal path exists.
    pub fn apply_damage(&mut self, amount: i32) {
        debug_assert!(amount > 0, "boss damage must be positive");
        self.hp = (self.hp - amount).max(0);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(BOSS_HALF_EXTENT))
    }
}

/// A collectible coin. One-shot: removed from the attempt on collection.
#[derive(Debug, Clone)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
}

impl Coin {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(COIN_HALF_EXTENT))
    }
}

/// Semantic events emitted by one tick's collision/resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { id: u32 },
    PlayerDied,
    BossDamaged { amount: i32 },
    BossDefeated,
    LevelComplete,
}

/// Sound effects queued by the simulation; playback is the caller's concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Coin,
    Jump,
    GameOver,
}

/// Per-playthrough state that persists across death-restarts and level
/// advances, but not across a reset to the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub level: u32,
    pub score: u32,
}

impl Session {
    pub fn new() -> Self {
        Self { level: 1, score: 0 }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable per-attempt world: geometry plus every live entity. Replaced
/// wholesale on death, level advance, or reset, so nothing can dangle.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub geometry: LevelGeometry,
    pub player: Player,
    pub enemy: Option<Enemy>,
    pub boss: Option<Boss>,
    /// Live coins, ordered by id
    pub coins: Vec<Coin>,
    /// Ticks spent in this attempt; feeds the boss-level survival bonus
    pub survival_ticks: u32,
}

impl Attempt {
    pub fn new(geometry: LevelGeometry, tuning: &Tuning) -> Self {
        let enemy = geometry.enemy_spawn.map(Enemy::spawn);
        let boss = geometry
            .boss_spawn
            .map(|pos| Boss::spawn(pos, tuning.boss_max_hp));
        debug_assert!(
            enemy.is_none() || boss.is_none(),
            "a level carries an enemy or a boss, never both"
        );
        let coins = geometry
            .coin_spawns
            .iter()
            .enumerate()
            .map(|(i, &pos)| Coin { id: i as u32, pos })
            .collect();
        Self {
            geometry,
            player: Player::spawn(),
            enemy,
            boss,
            coins,
            survival_ticks: 0,
        }
    }

    /// Whether this attempt plays on the designated boss level
    pub fn is_boss_level(&self) -> bool {
        self.geometry.boss_spawn.is_some()
    }
}

/// The current view, owned by the tick loop. Transitions are applied inside
/// [`tick`](super::tick::tick) and always produce the next view explicitly.
#[derive(Debug, Clone)]
pub enum GameView {
    /// Start menu; waiting for the start input
    Start,
    /// Active gameplay
    Playing { session: Session, attempt: Attempt },
    /// Boss defeated; loops back to Start on the start input
    Win { final_score: u32 },
}

/// Complete game state. Exactly one writer: the tick loop.
#[derive(Debug)]
pub struct GameState {
    pub levels: LevelSet,
    pub tuning: Tuning,
    pub view: GameView,
    /// Simulation tick counter (never resets)
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
    sounds: Vec<SoundEffect>,
}

impl GameState {
    /// Fresh state on the start screen with the built-in levels
    pub fn new() -> Self {
        Self::with_levels(LevelSet::builtin(), Tuning::default())
    }

    /// Fresh state with custom levels and balance (tests, tools)
    pub fn with_levels(levels: LevelSet, tuning: Tuning) -> Self {
        Self {
            levels,
            tuning,
            view: GameView::Start,
            time_ticks: 0,
            events: Vec::new(),
            sounds: Vec::new(),
        }
    }

    /// Queue a sound effect for the presentation layer
    pub(crate) fn queue_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    /// Take all sounds queued since the last drain. Fire-and-forget for the
    /// caller; the simulation never observes playback.
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Current score, if a run is in progress
    pub fn score(&self) -> Option<u32> {
        match &self.view {
            GameView::Playing { session, .. } => Some(session.score),
            GameView::Win { final_score } => Some(*final_score),
            GameView::Start => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LevelGeometry;

    fn enemy_geometry() -> LevelGeometry {
        LevelGeometry::from_ascii(1, &["o.o", "###"], true, false)
    }

    #[test]
    fn attempt_spawns_player_at_fixed_point() {
        let attempt = Attempt::new(enemy_geometry(), &Tuning::default());
        assert_eq!(attempt.player.pos, Vec2::new(128.0, 128.0));
        assert!(!attempt.player.grounded);
    }

    #[test]
    fn attempt_numbers_coins_in_order() {
        let attempt = Attempt::new(enemy_geometry(), &Tuning::default());
        let ids: Vec<u32> = attempt.coins.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn enemy_starts_deactivated() {
        let attempt = Attempt::new(enemy_geometry(), &Tuning::default());
        assert!(!attempt.enemy.unwrap().activated);
    }

    #[test]
    fn boss_spawns_with_max_hp() {
        let geometry = LevelGeometry::from_ascii(3, &["...", "###"], false, true);
        let attempt = Attempt::new(geometry, &Tuning::default());
        assert!(attempt.is_boss_level());
        assert_eq!(attempt.boss.unwrap().hp, 100);
    }

    #[test]
    fn boss_damage_floors_at_zero() {
        let mut boss = Boss::spawn(Vec2::ZERO, 12);
        boss.apply_damage(5);
        boss.apply_damage(5);
        boss.apply_damage(5);
        assert_eq!(boss.hp, 0);
        boss.apply_damage(5);
        assert_eq!(boss.hp, 0);
    }

    #[test]
    fn drained_sounds_do_not_replay() {
        let mut state = GameState::new();
        state.queue_sound(SoundEffect::Coin);
        assert_eq!(state.drain_sounds(), vec![SoundEffect::Coin]);
        assert!(state.drain_sounds().is_empty());
    }
}
