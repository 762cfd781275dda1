//! The player-controlled bird
//!
//! The bird never moves horizontally. Each tick gravity accelerates it
//! downward; a flap replaces whatever velocity it had with a fixed upward one.

use crate::collision::Collidable;
use crate::config::GameConfig;
use sdl2::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: i32,
    pub y: f32,
    pub velocity: f32,
    pub size: u32,
}

impl Bird {
    /// Creates a bird resting at mid-height of the field
    pub fn new(config: &GameConfig) -> Self {
        Bird {
            x: config.bird_x,
            y: (config.field_height / 2) as f32,
            velocity: 0.0,
            size: config.bird_size,
        }
    }

    /// Applies one tick of gravity and moves by the resulting velocity
    pub fn fall(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Overwrites the velocity with the flap impulse (not additive)
    pub fn flap(&mut self, jump_strength: f32) {
        self.velocity = jump_strength;
    }

    /// Screen-space box; the vertical position is truncated to whole pixels
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y as i32, self.size, self.size)
    }
}

impl Collidable for Bird {
    fn bounds(&self) -> Vec<Rect> {
        vec![self.rect()]
    }
}
