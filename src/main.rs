use sdl2::pixels::Color;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod assets;
mod bird;
mod collision;
mod config;
mod events;
mod game_state;
mod gui;
mod input_system;
mod obstacle;
mod render;
mod save;
mod text;

use assets::{GameSprites, SoundBank};
use config::{GameConfig, CONFIG_PATH};
use events::GameEvent;
use game_state::{Flow, GameState, Mode};
use gui::GameOverScreen;
use input_system::InputSystem;
use render::{render_hud, render_scene};
use save::HighScoreStore;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &GameConfig) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_h = (display_mode.h as f32 * 0.9) as u32;
            let usable_w = (display_mode.w as f32 * 0.9) as u32;

            let scale = (usable_w / config.field_width).min(usable_h / config.field_height);

            // Never shrink below the logical size, cap at 3x
            scale.clamp(1, 3)
        }
        Err(e) => {
            warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window_width = config.field_width * window_scale;
    let window_height = config.field_height * window_scale;
    info!("Window: {}x{} ({}x scale)", window_width, window_height, window_scale);

    let window = video_subsystem
        .window("Zahoor Bird - Eid Edition", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size gives pixel-perfect scaling for free
    canvas
        .set_logical_size(config.field_width, config.field_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let sprites = GameSprites::load(&texture_creator, &config.assets);
    if sprites.placeholder_count() > 0 {
        info!("{} image(s) replaced by placeholders", sprites.placeholder_count());
    }
    let sounds = SoundBank::load(&sdl_context, &config.assets);

    let frame_duration = config.frame_duration();
    let mut game_over_screen = GameOverScreen::new(config.game_over_delay());
    let mut input = InputSystem::new();
    let store = HighScoreStore::in_home_dir();
    debug!("High score file: {}", store.path().display());
    let mut state = GameState::new(config, store);

    info!("Controls: SPACE flap, ESC menu, UP/DOWN + ENTER to choose");

    'running: loop {
        let frame_start = Instant::now();

        // 1. Input
        input.update_context(state.mode);
        for action in input.poll_events(&mut event_pump) {
            if state.handle_action(action) == Flow::Exit {
                break 'running;
            }
        }

        // 2. Simulation
        for event in state.tick() {
            sounds.play(event.sound());
            match event {
                GameEvent::Flapped => {}
                GameEvent::Scored { score } => debug!("Score: {}", score),
                GameEvent::Crashed {
                    cause,
                    score,
                    new_high_score,
                } => {
                    debug!("Crashed into {:?}", cause);
                    game_over_screen.trigger(score, new_high_score);
                }
            }
        }

        if state.mode == Mode::GameOver && game_over_screen.should_return_to_menu() {
            game_over_screen.reset();
            state.return_to_menu();
        }

        // 3. Rendering
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        render_scene(&mut canvas, &state, &sprites)?;
        match state.mode {
            Mode::Menu => state.menu.render(&mut canvas, state.high_score)?,
            Mode::Playing => render_hud(&mut canvas, state.score)?,
            Mode::GameOver => {
                render_hud(&mut canvas, state.score)?;
                game_over_screen.render(&mut canvas)?;
            }
        }

        canvas.present();

        // 4. Pace to the target tick rate
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    debug!("Main loop exited");
    info!("Goodbye! Best score: {}", state.high_score);

    Ok(())
}
