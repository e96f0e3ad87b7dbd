//! Platformer physics resolver
//!
//! Integrates the player against gravity and static platform geometry, one
//! axis at a time: move horizontally and separate, then apply gravity, move
//! vertically and separate. Landing on a tile top sets the grounded flag;
//! hitting a tile bottom kills upward velocity. The grounded flag is
//! recomputed from scratch every tick and gates jumping.
//!
//! There is no inertia or friction: horizontal velocity is set directly from
//! held input and drops to zero the tick the input is released.

use super::collision::Aabb;
use super::state::Player;
use crate::consts::{PLAYER_HALF_H, PLAYER_HALF_W};

/// Advance the player by one tick against the platform set.
///
/// `player.vel.x` is expected to already reflect this tick's held movement
/// input; the jump impulse is applied by the tick loop before calling in.
pub fn step_player(player: &mut Player, platforms: &[Aabb], gravity: f32) {
    // Horizontal move + separation
    player.pos.x += player.vel.x;
    if player.pos.x < PLAYER_HALF_W {
        // Left map edge is solid
        player.pos.x = PLAYER_HALF_W;
    }
    for platform in platforms {
        let body = player.aabb();
        if !body.intersects(platform) {
            continue;
        }
        if player.vel.x > 0.0 {
            player.pos.x = platform.min.x - PLAYER_HALF_W;
        } else if player.vel.x < 0.0 {
            player.pos.x = platform.max.x + PLAYER_HALF_W;
        }
    }

    // Gravity, vertical move + separation
    player.vel.y -= gravity;
    player.pos.y += player.vel.y;
    player.grounded = false;
    for platform in platforms {
        let body = player.aabb();
        if !body.intersects(platform) {
            continue;
        }
        if player.vel.y <= 0.0 {
            // Landed on the tile top
            player.pos.y = platform.max.y + PLAYER_HALF_H;
            player.vel.y = 0.0;
            player.grounded = true;
        } else {
            // Bumped the tile bottom
            player.pos.y = platform.min.y - PLAYER_HALF_H;
            player.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_SIZE;
    use glam::Vec2;

    fn ground() -> Vec<Aabb> {
        // A 20-tile floor strip along y = 0..64
        (0..20)
            .map(|c| {
                Aabb::new(
                    Vec2::new(c as f32 * TILE_SIZE, 0.0),
                    Vec2::new((c + 1) as f32 * TILE_SIZE, TILE_SIZE),
                )
            })
            .collect()
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    #[test]
    fn falls_under_gravity_and_lands() {
        let platforms = ground();
        let mut player = player_at(128.0, 300.0);
        for _ in 0..120 {
            step_player(&mut player, &platforms, 1.0);
        }
        assert!(player.grounded);
        assert_eq!(player.pos.y, TILE_SIZE + PLAYER_HALF_H);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn stays_grounded_while_standing() {
        let platforms = ground();
        let mut player = player_at(128.0, TILE_SIZE + PLAYER_HALF_H);
        for _ in 0..10 {
            step_player(&mut player, &platforms, 1.0);
            assert!(player.grounded);
            assert_eq!(player.pos.y, TILE_SIZE + PLAYER_HALF_H);
        }
    }

    #[test]
    fn horizontal_motion_is_direct() {
        let platforms = ground();
        let mut player = player_at(128.0, TILE_SIZE + PLAYER_HALF_H);
        player.vel.x = 8.0;
        step_player(&mut player, &platforms, 1.0);
        assert_eq!(player.pos.x, 136.0);
        // Released input: velocity zeroed by the caller, no coasting
        player.vel.x = 0.0;
        step_player(&mut player, &platforms, 1.0);
        assert_eq!(player.pos.x, 136.0);
    }

    #[test]
    fn wall_stops_horizontal_motion() {
        let mut platforms = ground();
        // A wall tile sitting on the floor at x = 256..320
        platforms.push(Aabb::new(
            Vec2::new(256.0, TILE_SIZE),
            Vec2::new(320.0, 2.0 * TILE_SIZE),
        ));
        let mut player = player_at(224.0, TILE_SIZE + PLAYER_HALF_H);
        player.vel.x = 8.0;
        for _ in 0..10 {
            step_player(&mut player, &platforms, 1.0);
        }
        assert_eq!(player.pos.x, 256.0 - PLAYER_HALF_W);
    }

    #[test]
    fn ceiling_kills_upward_velocity() {
        let mut platforms = ground();
        // Low ceiling one tile above the floor surface
        platforms.push(Aabb::new(
            Vec2::new(64.0, 3.0 * TILE_SIZE),
            Vec2::new(192.0, 4.0 * TILE_SIZE),
        ));
        let mut player = player_at(128.0, TILE_SIZE + PLAYER_HALF_H);
        player.vel.y = 22.0;
        let mut apex = player.pos.y;
        for _ in 0..40 {
            step_player(&mut player, &platforms, 1.0);
            apex = apex.max(player.pos.y);
        }
        // Without the ceiling the jump apex would be ~253 px above the floor
        assert_eq!(apex, 3.0 * TILE_SIZE - PLAYER_HALF_H);
    }

    #[test]
    fn left_map_edge_is_clamped() {
        let platforms = ground();
        let mut player = player_at(30.0, TILE_SIZE + PLAYER_HALF_H);
        player.vel.x = -8.0;
        for _ in 0..10 {
            step_player(&mut player, &platforms, 1.0);
        }
        assert_eq!(player.pos.x, PLAYER_HALF_W);
    }
}
