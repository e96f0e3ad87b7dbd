//! Scripted chase step for enemy and boss movement
//!
//! Both scripted entities use the same greedy rule: step each axis
//! independently toward the target by a fixed per-axis speed, looking only at
//! the sign of the delta. No pathfinding and no obstacle avoidance; entities
//! can wedge behind geometry, which is accepted behavior. The enemy's
//! activation grace period is handled by the tick loop, not here.

use glam::Vec2;

/// One chase step: move `pos` toward `target` by `speed_x` horizontally and
/// `speed_y` vertically. Pure function, independently testable.
#[inline]
pub fn chase_step(pos: Vec2, target: Vec2, speed_x: f32, speed_y: f32) -> Vec2 {
    let dx = if pos.x < target.x { speed_x } else { -speed_x };
    let dy = if pos.y < target.y { speed_y } else { -speed_y };
    Vec2::new(pos.x + dx, pos.y + dy)
}
