//! Level geometry and the built-in level set
//!
//! Levels are authored as ASCII tile grids (one character per 64 px tile,
//! rows listed top to bottom). The simulation only ever sees the parsed
//! [`LevelGeometry`]: platform and hazard boxes, coin spawn points, the map
//! width, and optional enemy/boss spawns.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;

/// Static geometry for one level attempt. Immutable once loaded; death and
/// level advancement reload it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGeometry {
    /// Level number, 1-based
    pub number: u32,
    pub platforms: Vec<Aabb>,
    pub hazards: Vec<Aabb>,
    pub coin_spawns: Vec<Vec2>,
    /// Map width in pixels; reaching it completes the level
    pub width: f32,
    /// Chase enemy spawn (non-boss levels only)
    pub enemy_spawn: Option<Vec2>,
    /// Boss spawn (final level only)
    pub boss_spawn: Option<Vec2>,
}

impl LevelGeometry {
    /// Parse an ASCII tile grid. Characters: `#` platform, `^` hazard,
    /// `o` coin, `.` empty. Every row must be the same width.
    ///
    /// `has_enemy` places the chase enemy 200 px left of the player spawn;
    /// `has_boss` places the boss near the right map edge. A level carries
    /// at most one of the two.
    pub fn from_ascii(number: u32, rows: &[&str], has_enemy: bool, has_boss: bool) -> Self {
        assert!(number >= 1, "level numbers are 1-based");
        assert!(
            !(has_enemy && has_boss),
            "a level carries an enemy or a boss, never both"
        );
        assert!(!rows.is_empty(), "level grid is empty");

        let cols = rows[0].len();
        let row_count = rows.len();
        let mut platforms = Vec::new();
        let mut hazards = Vec::new();
        let mut coin_spawns = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged level grid at row {i}");
            // Row 0 is the top of the map; +y is up in world space.
            let center_y = (row_count - 1 - i) as f32 * TILE_SIZE + TILE_SIZE / 2.0;
            for (c, ch) in row.chars().enumerate() {
                let center = Vec2::new(c as f32 * TILE_SIZE + TILE_SIZE / 2.0, center_y);
                match ch {
                    '#' => platforms.push(Aabb::from_center(center, Vec2::splat(TILE_SIZE / 2.0))),
                    '^' => hazards.push(Aabb::from_center(center, Vec2::splat(TILE_SIZE / 2.0))),
                    'o' => coin_spawns.push(center),
                    '.' => {}
                    other => panic!("unknown tile {other:?} in level {number} row {i}"),
                }
            }
        }

        let width = cols as f32 * TILE_SIZE;
        let enemy_spawn = has_enemy.then(|| {
            Vec2::new(PLAYER_SPAWN_X - ENEMY_SPAWN_OFFSET_X, PLAYER_SPAWN_Y)
        });
        let boss_spawn = has_boss.then(|| Vec2::new(width - BOSS_SPAWN_MARGIN_X, BOSS_SPAWN_Y));

        Self {
            number,
            platforms,
            hazards,
            coin_spawns,
            width,
            enemy_spawn,
            boss_spawn,
        }
    }
}

/// Failed to provide level geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No asset for the requested level number. Fatal to the attempt.
    NotFound { number: u32 },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::NotFound { number } => write!(f, "level {number} not found"),
        }
    }
}

impl std::error::Error for LevelError {}

/// The ordered set of playable levels. The last one is the boss level.
#[derive(Debug, Clone)]
pub struct LevelSet {
    levels: Vec<LevelGeometry>,
}

impl LevelSet {
    /// The three shipped levels
    pub fn builtin() -> Self {
        Self::from_levels(vec![
            LevelGeometry::from_ascii(1, LEVEL_1, true, false),
            LevelGeometry::from_ascii(2, LEVEL_2, true, false),
            LevelGeometry::from_ascii(3, LEVEL_3, false, true),
        ])
    }

    /// Build a set from pre-parsed geometry (used by tests and tools)
    pub fn from_levels(levels: Vec<LevelGeometry>) -> Self {
        assert!(!levels.is_empty(), "level set is empty");
        Self { levels }
    }

    /// Load geometry for a 1-based level number
    pub fn load(&self, number: u32) -> Result<LevelGeometry, LevelError> {
        let geometry = self
            .levels
            .get(number.checked_sub(1).ok_or(LevelError::NotFound { number })? as usize)
            .ok_or(LevelError::NotFound { number })?;
        log::info!(
            "loaded level {number}: {} platforms, {} hazards, {} coins, width {}",
            geometry.platforms.len(),
            geometry.hazards.len(),
            geometry.coin_spawns.len(),
            geometry.width
        );
        Ok(geometry.clone())
    }

    /// Highest level number in the set
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }
}

const LEVEL_1: &[&str] = &[
    "........................",
    "........................",
    "........................",
    ".........o......o.......",
    "........###....###......",
    "........................",
    ".....o......^^..........",
    "########################",
];

const LEVEL_2: &[&str] = &[
    "............................",
    "............................",
    "............................",
    "......o.............o.......",
    ".....###...........###......",
    "............................",
    "........^^....o....^^.......",
    "############################",
];

const LEVEL_3: &[&str] = &[
    "....................",
    "....................",
    "....................",
    "....................",
    "....................",
    "....o.....o.........",
    "....................",
    "####################",
];
