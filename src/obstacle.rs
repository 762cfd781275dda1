//! Pipe pairs scrolling in from the right
//!
//! Each [`Obstacle`] is an upper and a lower pipe segment around a gap whose
//! vertical centre is rolled once at spawn. Spawning is distance-based: a new
//! pair appears whenever the newest one has scrolled past a fixed threshold,
//! so spacing between pairs never depends on frame timing.

use crate::collision::Collidable;
use crate::config::GameConfig;
use rand::Rng;
use sdl2::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge; may go arbitrarily negative
    pub x: f32,
    pub gap_center: i32,
    /// Set once the trailing edge has cleared the bird
    pub passed: bool,
    width: u32,
    segment_height: u32,
    gap: i32,
}

impl Obstacle {
    /// Creates a pipe pair at the right edge of the field with a random gap
    pub fn spawn<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let gap_center = rng.gen_range(config.gap_min..=config.gap_max);
        Self::with_gap(config, config.field_width as f32, gap_center)
    }

    pub fn with_gap(config: &GameConfig, x: f32, gap_center: i32) -> Self {
        Obstacle {
            x,
            gap_center,
            passed: false,
            width: config.pipe_width,
            segment_height: config.pipe_height,
            gap: config.pipe_gap,
        }
    }

    /// Scrolls left by `speed` per tick, without clamping
    pub fn advance(&mut self, ticks: u32, speed: f32) {
        self.x -= speed * ticks as f32;
    }

    /// Right edge of the pair
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width as f32
    }

    /// Marks the pair passed the first time its trailing edge is strictly left
    /// of `bird_x`. Returns true only on that transition.
    pub fn try_pass(&mut self, bird_x: i32) -> bool {
        if !self.passed && self.trailing_edge() < bird_x as f32 {
            self.passed = true;
            true
        } else {
            false
        }
    }

    /// True once the whole pair is left of the field
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    pub fn upper_rect(&self) -> Rect {
        Rect::new(
            self.x as i32,
            self.gap_center - self.segment_height as i32,
            self.width,
            self.segment_height,
        )
    }

    pub fn lower_rect(&self) -> Rect {
        Rect::new(
            self.x as i32,
            self.gap_center + self.gap,
            self.width,
            self.segment_height,
        )
    }
}

impl Collidable for Obstacle {
    fn bounds(&self) -> Vec<Rect> {
        vec![self.upper_rect(), self.lower_rect()]
    }
}

/// True when a new pair is due, given the newest pair currently tracked
pub fn spawn_due(newest: Option<&Obstacle>, config: &GameConfig) -> bool {
    match newest {
        Some(obstacle) => obstacle.x < config.spawn_threshold(),
        None => true,
    }
}
