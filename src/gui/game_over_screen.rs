//! Game Over Screen Component
//!
//! Shown when the bird crashes. The screen freezes the last frame, darkens it,
//! shows the final score and hands control back to the main menu once its
//! display delay has elapsed. The hold is a timer, not a sleep, so the loop
//! keeps pumping window events while it is up.

use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// "GAME OVER" text color
    pub title_color: Color,

    /// Final score text color
    pub score_color: Color,

    /// "NEW BEST!" text color
    pub record_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            overlay_alpha: 140,
            title_color: Color::RGB(255, 255, 255),
            score_color: Color::RGB(255, 255, 100),
            record_color: Color::RGB(255, 140, 60),
        }
    }
}

/// State of the game over screen
///
/// # Example
///
/// ```rust
/// // When the bird crashes
/// game_over.trigger(score, new_high_score);
///
/// // In game loop
/// game_over.render(&mut canvas)?;
/// if game_over.should_return_to_menu() {
///     game_over.reset();
///     state.return_to_menu();
/// }
/// ```
pub struct GameOverScreen {
    display_duration: Duration,
    shown_at: Option<Instant>,
    final_score: u32,
    new_high_score: bool,
    style: GameOverStyle,
}

impl GameOverScreen {
    /// Creates a game over screen held for `display_duration`
    pub fn new(display_duration: Duration) -> Self {
        GameOverScreen {
            display_duration,
            shown_at: None,
            final_score: 0,
            new_high_score: false,
            style: GameOverStyle::default(),
        }
    }

    /// Show the screen (start timer)
    pub fn trigger(&mut self, final_score: u32, new_high_score: bool) {
        self.trigger_at(Instant::now(), final_score, new_high_score);
    }

    pub fn trigger_at(&mut self, now: Instant, final_score: u32, new_high_score: bool) {
        self.shown_at = Some(now);
        self.final_score = final_score;
        self.new_high_score = new_high_score;
    }

    /// Hide the screen (clear timer)
    pub fn reset(&mut self) {
        self.shown_at = None;
    }

    /// Check if the display delay has expired
    pub fn should_return_to_menu(&self) -> bool {
        self.should_return_to_menu_at(Instant::now())
    }

    pub fn should_return_to_menu_at(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(shown_at) => now.saturating_duration_since(shown_at) >= self.display_duration,
            None => false,
        }
    }

    /// Render game over overlay
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if self.shown_at.is_none() {
            return Ok(());
        }

        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;

        draw_centered_text(canvas, "GAME OVER", center_x, center_y - 60, self.style.title_color, 5)?;
        draw_centered_text(
            canvas,
            &format!("SCORE: {}", self.final_score),
            center_x,
            center_y + 10,
            self.style.score_color,
            3,
        )?;

        if self.new_high_score {
            draw_centered_text(canvas, "NEW BEST!", center_x, center_y + 50, self.style.record_color, 3)?;
        }

        Ok(())
    }
}
