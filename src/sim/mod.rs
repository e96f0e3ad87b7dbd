//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only (one call to [`tick`] is one frame)
//! - Stable iteration order (coins by entity ID)
//! - No rendering, audio, or platform dependencies
//!
//! The presentation layer talks to the simulation through three seams:
//! [`TickInput`] going in, [`SceneSnapshot`](crate::SceneSnapshot) and the
//! drained [`SoundEffect`] queue coming out.

pub mod chase;
pub mod collision;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use chase::chase_step;
pub use collision::Aabb;
pub use level::{LevelError, LevelGeometry, LevelSet};
pub use state::{
    Attempt, Boss, Coin, Enemy, GameEvent, GameState, GameView, Player, Session, SoundEffect,
};
pub use tick::{TickInput, tick};
