//! Item and obstacle spawn scheduling
//!
//! Owns the active entity lists and advances them each tick: spawn, scroll
//! left, cull off-screen. All randomness comes from a Pcg32 seeded at
//! construction, so a run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::item::{Obstacle, SwagItem, SwagItemType};
use crate::consts::*;

/// Schedules spawns and advances everything that scrolls
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    screen_width: f32,
    screen_height: f32,
    pub(crate) items: Vec<SwagItem>,
    pub(crate) obstacles: Vec<Obstacle>,
    time_since_last_spawn: f32,
    time_since_last_obstacle: f32,
    game_time: f32,
    rng: Pcg32,
}

impl SpawnScheduler {
    /// Screen dimensions are validated by the caller before construction
    pub fn new(screen_width: f32, screen_height: f32, seed: u64) -> Self {
        Self {
            screen_width,
            screen_height,
            items: Vec::new(),
            obstacles: Vec::new(),
            time_since_last_spawn: 0.0,
            time_since_last_obstacle: 0.0,
            game_time: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the scheduler by one tick: spawn, scroll, cull.
    pub fn update(&mut self, dt: f32) {
        self.game_time += dt;
        self.time_since_last_spawn += dt;
        self.time_since_last_obstacle += dt;

        // The spawn threshold is intentionally redrawn every tick rather
        // than fixed once per interval; effective spacing skews toward the
        // low end of the range.
        let interval = self
            .rng
            .random_range(MIN_SPAWN_INTERVAL..MAX_SPAWN_INTERVAL);
        if self.time_since_last_spawn >= interval {
            self.spawn_item();
            self.time_since_last_spawn = 0.0;
        }

        let obstacle_interval = self
            .rng
            .random_range(MIN_OBSTACLE_INTERVAL..MAX_OBSTACLE_INTERVAL);
        if self.time_since_last_obstacle >= obstacle_interval {
            self.spawn_obstacle();
            self.time_since_last_obstacle = 0.0;
        }

        // Scroll left; entities spawned above move this same tick
        let delta_x = -SCROLL_SPEED * dt;
        for item in &mut self.items {
            *item = item.scrolled(delta_x);
        }
        for obstacle in &mut self.obstacles {
            *obstacle = obstacle.scrolled(delta_x);
        }

        self.items.retain(|item| !item.is_off_screen());
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());
    }

    /// Place a new item just past the right edge, floating at jump apex
    fn spawn_item(&mut self) {
        let item_type = self.select_item_type();
        let pos = Vec2::new(
            self.screen_width + SPAWN_OFFSET_X,
            SwagItem::apex_y(self.screen_height, ITEM_SIZE),
        );
        self.items.push(SwagItem::new(item_type, pos));
    }

    /// Rarity first, then a uniform pick within the chosen tier
    fn select_item_type(&mut self) -> SwagItemType {
        if self.rng.random_bool(RARE_ITEM_PROBABILITY) {
            SwagItemType::RARE[self.rng.random_range(0..SwagItemType::RARE.len())]
        } else {
            SwagItemType::COMMON[self.rng.random_range(0..SwagItemType::COMMON.len())]
        }
    }

    /// Place a new obstacle just past the right edge, sitting on the road
    fn spawn_obstacle(&mut self) {
        let pos = Vec2::new(
            self.screen_width + SPAWN_OFFSET_X,
            Obstacle::ground_y(self.screen_height, OBSTACLE_SIZE),
        );
        self.obstacles.push(Obstacle::new(pos));
    }

    /// Currently active items
    pub fn active_items(&self) -> &[SwagItem] {
        &self.items
    }

    /// Currently active obstacles
    pub fn active_obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn active_item_count(&self) -> usize {
        self.items.len()
    }

    /// Cumulative gameplay time driven through this scheduler
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    /// Batch removal by value (the items collected this tick)
    pub fn remove_items(&mut self, collected: &[SwagItem]) {
        self.items.retain(|item| !collected.contains(item));
    }

    /// Clear all entities and timers; the RNG stream continues
    pub fn reset(&mut self) {
        self.items.clear();
        self.obstacles.clear();
        self.time_since_last_spawn = 0.0;
        self.time_since_last_obstacle = 0.0;
        self.game_time = 0.0;
    }
}
