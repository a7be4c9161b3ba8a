//! Axis-aligned bounding box collision detection
//!
//! Hitboxes are derived on demand from an entity's position and size, never
//! stored. The overlap test uses strict inequalities: rectangles touching
//! only at an edge do not collide. Queries are plain O(n) scans; the active
//! entity count stays well under a hundred.

use serde::{Deserialize, Serialize};

/// A rectangular hitbox in screen coordinates (+y is down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// AABB overlap test. Strict inequalities: edge contact is not a hit.
    #[inline]
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything that exposes a hitbox for collision queries
pub trait Collidable {
    fn hitbox(&self) -> Hitbox;
}

/// A bare rectangle is its own hitbox
impl Collidable for Hitbox {
    fn hitbox(&self) -> Hitbox {
        *self
    }
}

/// First item in `items` overlapping `target`, if any
pub fn find_first_collision<'a, T: Collidable>(
    target: &impl Collidable,
    items: &'a [T],
) -> Option<&'a T> {
    let hitbox = target.hitbox();
    items.iter().find(|item| hitbox.intersects(&item.hitbox()))
}

/// All items in `items` overlapping `target` (batch collection per tick)
pub fn find_all_collisions<T: Collidable + Copy>(target: &impl Collidable, items: &[T]) -> Vec<T> {
    let hitbox = target.hitbox();
    items
        .iter()
        .filter(|item| hitbox.intersects(&item.hitbox()))
        .copied()
        .collect()
}

/// Whether `target` overlaps any item in `items`
pub fn has_any_collision(target: &impl Collidable, items: &[impl Collidable]) -> bool {
    let hitbox = target.hitbox();
    items.iter().any(|item| hitbox.intersects(&item.hitbox()))
}
