//! Canyon Run - a tile-based side-scrolling platformer runtime
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, chase AI, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `snapshot`: Immutable scene snapshots for the presentation layer
//!
//! Rendering, audio playback, and input devices are external collaborators:
//! the runtime consumes a [`sim::TickInput`] each tick and exposes a
//! [`SceneSnapshot`] plus a drained sound-effect queue in return.

pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use snapshot::SceneSnapshot;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz). Velocities are in pixels per tick,
    /// so `SIM_DT` only matters for pacing and elapsed-time math.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per whole second of the survival bonus
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Tile edge length in pixels (128 px source tiles at 0.5 scale)
    pub const TILE_SIZE: f32 = 64.0;

    /// Player spawn point (sprite center)
    pub const PLAYER_SPAWN_X: f32 = 128.0;
    pub const PLAYER_SPAWN_Y: f32 = 128.0;
    /// Player bounding half-extents
    pub const PLAYER_HALF_W: f32 = 24.0;
    pub const PLAYER_HALF_H: f32 = 24.0;

    /// Enemy spawns this far left of the player spawn
    pub const ENEMY_SPAWN_OFFSET_X: f32 = 200.0;
    pub const ENEMY_HALF_EXTENT: f32 = 24.0;

    /// Boss spawns this far in from the right map edge...
    pub const BOSS_SPAWN_MARGIN_X: f32 = 150.0;
    /// ...at this height
    pub const BOSS_SPAWN_Y: f32 = 200.0;
    pub const BOSS_HALF_EXTENT: f32 = 48.0;

    pub const COIN_HALF_EXTENT: f32 = 16.0;
}
