//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions on top of the play field.
//!
//! # Architecture
//!
//! Screen-space GUI elements:
//! - Use logical screen coordinates
//! - Render on top of the game scene
//! - Are stateful (selection, timers)
//! - Use procedural rendering (SDL2 primitives and the bitmap font)
//!
//! # Available Components
//!
//! - [`menu::Menu`] - Generic overlay menu with wrap-around selection
//! - [`MainMenu`] - Title screen with Play / Resume / Exit
//! - [`GameOverScreen`] - Timed game over overlay

pub mod game_over_screen;
pub mod main_menu;
pub mod menu;

pub use game_over_screen::GameOverScreen;
pub use main_menu::{MainMenu, MainMenuOption};
