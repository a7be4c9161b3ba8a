//! Collectible swag and ground obstacles
//!
//! The item catalog is fixed at compile time: nine swag types across two
//! rarity tiers. Instances are value types; every update returns a new copy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, Hitbox};
use crate::consts::*;
use crate::{ground_level, grounded_y};

/// Rarity tier controlling spawn probability and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRarity {
    Common,
    Rare,
}

/// The fixed catalog of collectible swag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwagItemType {
    Sticker,
    Pin,
    Pen,
    Sock,
    ToteBag,
    Notebook,
    Bottle,
    Hoodie,
    TShirt,
}

impl SwagItemType {
    /// Every type in the catalog
    pub const ALL: [SwagItemType; 9] = [
        Self::Sticker,
        Self::Pin,
        Self::Pen,
        Self::Sock,
        Self::ToteBag,
        Self::Notebook,
        Self::Bottle,
        Self::Hoodie,
        Self::TShirt,
    ];

    /// Common types (the 1 and 2 point items)
    pub const COMMON: [SwagItemType; 7] = [
        Self::Sticker,
        Self::Pin,
        Self::Pen,
        Self::Sock,
        Self::ToteBag,
        Self::Notebook,
        Self::Bottle,
    ];

    /// Rare types (the 5 point items)
    pub const RARE: [SwagItemType; 2] = [Self::Hoodie, Self::TShirt];

    pub fn point_value(&self) -> i32 {
        match self {
            Self::Sticker | Self::Pin | Self::Pen => 1,
            Self::Sock | Self::ToteBag | Self::Notebook | Self::Bottle => 2,
            Self::Hoodie | Self::TShirt => 5,
        }
    }

    pub fn rarity(&self) -> ItemRarity {
        match self {
            Self::Hoodie | Self::TShirt => ItemRarity::Rare,
            _ => ItemRarity::Common,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sticker => "Sticker",
            Self::Pin => "Pin",
            Self::Pen => "Pen",
            Self::Sock => "Sock",
            Self::ToteBag => "Tote Bag",
            Self::Notebook => "Notebook",
            Self::Bottle => "Bottle",
            Self::Hoodie => "Hoodie",
            Self::TShirt => "T-Shirt",
        }
    }

    /// Display color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            Self::Sticker => 0xFF6B6B,
            Self::Pin => 0x4ECDC4,
            Self::Pen => 0x45B7D1,
            Self::Sock => 0xFFA07A,
            Self::ToteBag => 0x98D8C8,
            Self::Notebook => 0xF7DC6F,
            Self::Bottle => 0x85C1E2,
            Self::Hoodie => 0x9B59B6,
            Self::TShirt => 0xE74C3C,
        }
    }
}

/// An active collectible scrolling across the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwagItem {
    pub item_type: SwagItemType,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_active: bool,
}

impl SwagItem {
    pub fn new(item_type: SwagItemType, pos: Vec2) -> Self {
        Self {
            item_type,
            pos,
            width: ITEM_SIZE,
            height: ITEM_SIZE,
            is_active: true,
        }
    }

    /// Copy with the horizontal position shifted (world scroll)
    pub fn scrolled(self, delta_x: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x + delta_x, self.pos.y),
            ..self
        }
    }

    /// Copy marked as collected
    pub fn collect(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }

    /// True once the right edge has passed the left screen boundary
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.width < 0.0
    }

    /// Spawn height: items float at the peak of the player's jump arc,
    /// centered on the apex so they are only reachable mid-jump
    pub fn apex_y(screen_height: f32, item_height: f32) -> f32 {
        let jump_height = JUMP_VELOCITY * JUMP_VELOCITY / (2.0 * GRAVITY);
        ground_level(screen_height) - jump_height - item_height / 2.0
    }
}

impl Collidable for SwagItem {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A cardboard-box hazard sitting on the road; contact ends the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_active: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
            is_active: true,
        }
    }

    /// Y position for an obstacle sitting on the road surface
    pub fn ground_y(screen_height: f32, obstacle_height: f32) -> f32 {
        grounded_y(screen_height, obstacle_height)
    }

    /// Copy with the horizontal position shifted (world scroll)
    pub fn scrolled(self, delta_x: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x + delta_x, self.pos.y),
            ..self
        }
    }

    /// True once the right edge has passed the left screen boundary
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.width < 0.0
    }
}

impl Collidable for Obstacle {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}
