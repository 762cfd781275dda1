use crate::game_state::Mode;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the player can trigger
///
/// High-level intents decoupled from raw SDL2 events. The game state only
/// ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Flight ===
    Jump,

    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuConfirm,

    // === System ===
    ReturnToMenu,
    Quit,
}

/// Input context determines which keys mean anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Main menu is shown
    Menu,
    /// Bird is flying
    Playing,
    /// Game over screen is held; only closing the window does something
    GameOver,
}

impl From<Mode> for InputContext {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Menu => InputContext::Menu,
            Mode::Playing => InputContext::Playing,
            Mode::GameOver => InputContext::GameOver,
        }
    }
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. Set the InputContext from the current mode
/// 2. Poll SDL2 events
/// 3. Translate events to GameActions for that context
/// 4. Return actions to the game loop
///
/// Keys with no meaning in the current context are dropped.
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    /// Update the input context from the game mode
    ///
    /// Call before poll_events() every frame.
    pub fn update_context(&mut self, mode: Mode) {
        self.context = mode.into();
    }

    /// Drain pending SDL2 events and return the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    self.handle_keydown(key, &mut actions);
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }

    /// Routes key presses to context-specific handlers
    fn handle_keydown(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match self.context {
            InputContext::Menu => self.handle_menu_keys(key, actions),
            InputContext::Playing => self.handle_playing_keys(key, actions),
            InputContext::GameOver => {}
        }
    }

    fn handle_menu_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Up => actions.push(GameAction::MenuUp),
            Keycode::Down => actions.push(GameAction::MenuDown),
            Keycode::Return | Keycode::Space => actions.push(GameAction::MenuConfirm),
            _ => {}
        }
    }

    fn handle_playing_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Space => actions.push(GameAction::Jump),
            Keycode::Escape => actions.push(GameAction::ReturnToMenu),
            _ => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
