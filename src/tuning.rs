//! Data-driven game balance
//!
//! Every speed, reward, and damage number lives here so a presentation layer
//! (or a test) can rebalance the game without touching simulation code.
//! Defaults match the shipped levels.

use serde::{Deserialize, Serialize};

/// Gameplay balance knobs. All speeds are in pixels per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Horizontal run speed while a movement key is held
    pub player_move_speed: f32,
    /// Downward acceleration applied every tick
    pub gravity: f32,
    /// Upward impulse on a grounded jump
    pub player_jump_speed: f32,

    /// Enemy horizontal chase step
    pub enemy_chase_speed: f32,
    /// Enemy vertical step as a fraction of the horizontal step
    pub enemy_vertical_ratio: f32,

    /// Boss horizontal chase step
    pub boss_chase_speed: f32,
    /// Boss vertical step as a fraction of the horizontal step. The boss
    /// climbs at half its ground speed; jumping over it stays viable.
    pub boss_vertical_ratio: f32,
    /// Boss starting hit points
    pub boss_max_hp: i32,
    /// Hit points removed per attack input
    pub attack_damage: i32,

    /// Score awarded per collected coin
    pub coin_score: u32,
    /// Score awarded per whole second survived on the boss level
    pub survival_bonus: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_move_speed: 8.0,
            gravity: 1.0,
            player_jump_speed: 22.0,
            enemy_chase_speed: 7.0,
            enemy_vertical_ratio: 0.5,
            boss_chase_speed: 6.0,
            boss_vertical_ratio: 0.5,
            boss_max_hp: 100,
            attack_damage: 5,
            coin_score: 75,
            survival_bonus: 5,
        }
    }
}

impl Tuning {
    /// Enemy vertical chase step in pixels per tick
    pub fn enemy_vertical_speed(&self) -> f32 {
        self.enemy_chase_speed * self.enemy_vertical_ratio
    }

    /// Boss vertical chase step in pixels per tick
    pub fn boss_vertical_speed(&self) -> f32 {
        self.boss_chase_speed * self.boss_vertical_ratio
    }
}
