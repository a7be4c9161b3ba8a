//! The player character
//!
//! Runs in place at a fixed horizontal anchor while the world scrolls past.
//! Value-semantic: every update consumes the old value and returns a new
//! one, so a snapshot handed to a reader is always internally consistent.
//!
//! Invariant: while grounded, `velocity_y` is zero and `pos.y` equals the
//! grounded Y for the cached screen height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, Hitbox};
use crate::consts::*;
use crate::grounded_y;

/// The player, with position, jump state, and run animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    pub velocity_y: f32,
    /// Current frame of the run cycle
    pub animation_frame: u32,
    pub animation_timer: f32,
    /// Cached screen height; 0.0 until the display size is known
    pub screen_height: f32,
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            is_jumping: false,
            velocity_y: 0.0,
            animation_frame: 0,
            animation_timer: 0.0,
            screen_height: 0.0,
        }
    }
}

impl PlayerCharacter {
    /// Player anchored at 15% of screen width, standing on the road
    pub fn at_start(screen_width: f32, screen_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                screen_width * PLAYER_ANCHOR_RATIO,
                grounded_y(screen_height, PLAYER_HEIGHT),
            ),
            screen_height,
            ..Self::default()
        }
    }

    /// Advance the run animation. Frozen entirely while airborne.
    pub fn update_animation(self, dt: f32) -> Self {
        if self.is_jumping {
            return self;
        }

        let timer = self.animation_timer + dt;
        if timer >= ANIMATION_FRAME_DURATION {
            Self {
                animation_frame: (self.animation_frame + 1) % RUNNING_FRAME_COUNT,
                animation_timer: 0.0,
                ..self
            }
        } else {
            Self {
                animation_timer: timer,
                ..self
            }
        }
    }

    /// Start a jump if grounded and positioned. Idempotent while airborne.
    pub fn initiate_jump(self) -> Self {
        if !self.is_jumping && self.screen_height > 0.0 {
            Self {
                is_jumping: true,
                velocity_y: JUMP_VELOCITY,
                ..self
            }
        } else {
            self
        }
    }

    /// Advance jump physics by one step. No-op when grounded.
    ///
    /// Semi-implicit Euler: the position integrates the carried velocity
    /// before this step's gravity increment. The ordering sets the arc
    /// height and must not change.
    pub fn update_jump(self, dt: f32) -> Self {
        if !self.is_jumping {
            return self;
        }

        let new_velocity_y = self.velocity_y + GRAVITY * dt;
        let new_y = self.pos.y + self.velocity_y * dt;
        let ground = grounded_y(self.screen_height, self.height);

        if new_y >= ground {
            // Landed
            Self {
                pos: Vec2::new(self.pos.x, ground),
                is_jumping: false,
                velocity_y: 0.0,
                ..self
            }
        } else {
            Self {
                pos: Vec2::new(self.pos.x, new_y),
                velocity_y: new_velocity_y,
                ..self
            }
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.is_jumping
    }
}

impl Collidable for PlayerCharacter {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_start_is_grounded() {
        let player = PlayerCharacter::at_start(400.0, 800.0);
        assert!((player.pos.x - 60.0).abs() < 1e-3);
        // Ground level 640, minus player height 88
        assert_eq!(player.pos.y, 552.0);
        assert!(player.is_grounded());
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_requires_positioning() {
        let player = PlayerCharacter::default().initiate_jump();
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_jump_is_idempotent_while_airborne() {
        let player = PlayerCharacter::at_start(400.0, 800.0).initiate_jump();
        assert!(player.is_jumping);
        assert_eq!(player.velocity_y, JUMP_VELOCITY);

        // A second trigger mid-air changes nothing, even after gravity
        // has eaten into the velocity
        let airborne = player.update_jump(SIM_DT);
        let retriggered = airborne.initiate_jump();
        assert_eq!(retriggered, airborne);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let start = PlayerCharacter::at_start(400.0, 800.0);
        let ground = start.pos.y;

        let mut player = start.initiate_jump();
        let mut ticks = 0;
        while player.is_jumping && ticks < 120 {
            player = player.update_jump(SIM_DT);
            // Never sinks below the road
            assert!(player.pos.y <= ground + 1e-3);
            ticks += 1;
        }

        assert!(!player.is_jumping);
        assert_eq!(player.pos.y, ground);
        assert_eq!(player.velocity_y, 0.0);
        // Full arc at -600 px/s and 1800 px/s^2 lasts about 2/3 s
        assert!((30..=50).contains(&ticks), "arc took {ticks} ticks");
    }

    #[test]
    fn test_jump_reaches_apex_height() {
        let start = PlayerCharacter::at_start(400.0, 800.0);
        let ground = start.pos.y;

        let mut player = start.initiate_jump();
        let mut peak = ground;
        for _ in 0..120 {
            player = player.update_jump(SIM_DT);
            peak = peak.min(player.pos.y);
            if !player.is_jumping {
                break;
            }
        }

        // Closed form: v^2 / 2g = 100 px above ground. The discrete arc
        // overshoots the continuous apex by a few pixels.
        let apex = ground - JUMP_VELOCITY * JUMP_VELOCITY / (2.0 * GRAVITY);
        assert!((peak - apex).abs() < 10.0, "peak {peak} vs apex {apex}");
    }

    #[test]
    fn test_update_jump_is_noop_when_grounded() {
        let player = PlayerCharacter::at_start(400.0, 800.0);
        assert_eq!(player.update_jump(SIM_DT), player);
    }

    #[test]
    fn test_animation_cycles_every_frame_duration() {
        let mut player = PlayerCharacter::at_start(400.0, 800.0);
        assert_eq!(player.animation_frame, 0);

        // 0.1s: timer accrues, no frame advance yet
        player = player.update_animation(0.1);
        assert_eq!(player.animation_frame, 0);
        assert_eq!(player.animation_timer, 0.1);

        // Crosses 0.15s: frame advances, timer resets
        player = player.update_animation(0.1);
        assert_eq!(player.animation_frame, 1);
        assert_eq!(player.animation_timer, 0.0);

        // Frame index wraps after the full cycle
        for _ in 0..3 {
            player = player.update_animation(ANIMATION_FRAME_DURATION);
        }
        assert_eq!(player.animation_frame, 0);
    }

    #[test]
    fn test_animation_frozen_while_jumping() {
        let player = PlayerCharacter::at_start(400.0, 800.0).initiate_jump();
        let updated = player.update_animation(1.0);
        assert_eq!(updated.animation_frame, player.animation_frame);
        assert_eq!(updated.animation_timer, player.animation_timer);
    }

    #[test]
    fn test_hitbox_tracks_position() {
        let player = PlayerCharacter::at_start(400.0, 800.0);
        let hitbox = player.hitbox();
        assert_eq!(hitbox.x, player.pos.x);
        assert_eq!(hitbox.y, player.pos.y);
        assert_eq!(hitbox.right(), player.pos.x + PLAYER_WIDTH);
        assert_eq!(hitbox.bottom(), player.pos.y + PLAYER_HEIGHT);
    }
}
