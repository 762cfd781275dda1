//! Main Menu Component
//!
//! The title screen shown at startup, after escaping a run and after every
//! game over. Three options:
//! - Play: start a fresh run
//! - Resume: continue the run that was escaped from
//! - Exit: quit the game

use super::menu::{Menu, MenuItem, MenuStyle};
use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Options in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    Play,
    Resume,
    Exit,
}

impl MainMenuOption {
    pub fn all() -> [Self; 3] {
        [Self::Play, Self::Resume, Self::Exit]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Play => "PLAY",
            Self::Resume => "RESUME",
            Self::Exit => "EXIT",
        }
    }
}

const MENU_TOP: u32 = 60;
const MENU_HEIGHT: u32 = 330;

/// State of the main menu
///
/// Wraps the base Menu component with type-safe option handling.
pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new() -> Self {
        let items = MainMenuOption::all()
            .iter()
            .map(|option| MenuItem::new(option.label().to_string()))
            .collect();
        let style = MenuStyle {
            top: Some(MENU_TOP),
            height: MENU_HEIGHT,
            ..MenuStyle::default()
        };

        let mut menu = Menu::new("ZAHOOR BIRD".to_string(), items)
            .with_subtitle("EID EDITION".to_string())
            .with_style(style);
        // Nothing to resume until a run has started
        menu.set_enabled(Self::index_of(MainMenuOption::Resume), false);

        MainMenu { menu }
    }

    fn index_of(option: MainMenuOption) -> usize {
        MainMenuOption::all()
            .iter()
            .position(|o| *o == option)
            .unwrap_or(0)
    }

    /// Navigate up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    /// Get selected option
    pub fn selected_option(&self) -> MainMenuOption {
        MainMenuOption::all()
            .get(self.menu.selected_index())
            .copied()
            .unwrap_or(MainMenuOption::Play)
    }

    /// Enables or dims the Resume entry
    pub fn set_resume_available(&mut self, available: bool) {
        self.menu
            .set_enabled(Self::index_of(MainMenuOption::Resume), available);
    }

    pub fn resume_available(&self) -> bool {
        self.menu.is_enabled(Self::index_of(MainMenuOption::Resume))
    }

    /// Render the menu with the best score underneath the buttons
    pub fn render(&self, canvas: &mut Canvas<Window>, high_score: u32) -> Result<(), String> {
        self.menu.render(canvas)?;

        let (screen_width, _) = canvas.logical_size();
        draw_centered_text(
            canvas,
            &format!("BEST: {}", high_score),
            (screen_width / 2) as i32,
            (MENU_TOP + MENU_HEIGHT - 40) as i32,
            Color::RGB(255, 220, 120),
            2,
        )
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_play_with_resume_dimmed() {
        let menu = MainMenu::new();
        assert_eq!(menu.selected_option(), MainMenuOption::Play);
        assert!(!menu.resume_available());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = MainMenu::new();
        menu.navigate_up();
        assert_eq!(menu.selected_option(), MainMenuOption::Exit);
        menu.navigate_down();
        assert_eq!(menu.selected_option(), MainMenuOption::Play);
        menu.navigate_down();
        assert_eq!(menu.selected_option(), MainMenuOption::Resume);
    }

    #[test]
    fn test_resume_toggle() {
        let mut menu = MainMenu::new();
        menu.set_resume_available(true);
        assert!(menu.resume_available());
        menu.set_resume_available(false);
        assert!(!menu.resume_available());
    }
}
