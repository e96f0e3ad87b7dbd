//! Axis-aligned bounding boxes for tile-based collision
//!
//! Everything that can touch anything in this game is an AABB: platform
//! tiles, hazard tiles, coins, the player, and the scripted entities.

use glam::Vec2;

/// An axis-aligned bounding box, min/max corners in world pixels (+y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "inverted aabb");
        Self { min, max }
    }

    /// Box centered on `center` with the given half-extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test. Boxes that merely share an edge do not collide,
    /// so a sprite resting exactly on a tile top is not "inside" it.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Overlap depth on each axis (only meaningful when intersecting)
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            (self.max.x - other.min.x).min(other.max.x - self.min.x),
            (self.max.y - other.min.y).min(other.max.y - self.min.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(15.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(25.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn edge_touching_boxes_do_not_intersect() {
        // Sprite resting on a tile top: max.y of the tile == min.y of the sprite
        let tile = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(64.0, 64.0));
        let sprite = Aabb::new(Vec2::new(10.0, 64.0), Vec2::new(50.0, 112.0));
        assert!(!tile.intersects(&sprite));
    }

    #[test]
    fn penetration_reports_overlap_depth() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = Aabb::new(Vec2::new(15.0, 10.0), Vec2::new(40.0, 40.0));
        let pen = a.penetration(&b);
        assert_eq!(pen.x, 5.0);
        assert_eq!(pen.y, 10.0);
    }
}
