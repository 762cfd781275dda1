/// Scene rendering
///
/// Draws the play field from a read-only view of the game state, back to
/// front: background, pipes, bird, then the score HUD. Overlays (main menu,
/// game over screen) are drawn by the GUI components on top of this.
use crate::assets::GameSprites;
use crate::game_state::GameState;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const HUD_COLOR: Color = Color::RGB(255, 255, 255);
const HUD_SHADOW: Color = Color::RGB(0, 0, 0);

/// Renders background, pipes and bird
pub fn render_scene(
    canvas: &mut Canvas<Window>,
    state: &GameState,
    sprites: &GameSprites,
) -> Result<(), String> {
    let config = state.config();
    sprites
        .background
        .draw(canvas, Rect::new(0, 0, config.field_width, config.field_height))?;

    for obstacle in &state.obstacles {
        sprites.pipe.draw(canvas, obstacle.upper_rect())?;
        sprites.pipe.draw(canvas, obstacle.lower_rect())?;
    }

    sprites.bird.draw(canvas, state.bird.rect())
}

/// Renders the score counter in the top-left corner
pub fn render_hud(canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
    let text = format!("SCORE: {}", score);
    // 2px drop shadow keeps the text readable over bright images
    draw_simple_text(canvas, &text, 12, 12, HUD_SHADOW, 3)?;
    draw_simple_text(canvas, &text, 10, 10, HUD_COLOR, 3)
}
