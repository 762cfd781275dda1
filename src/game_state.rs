//! Game state and the per-tick simulation
//!
//! [`GameState`] is the single owner of everything that changes while the game
//! runs: the bird, the pipes, the score, the high score, the current mode and
//! the main menu selection. The loop driver feeds it [`GameAction`]s and calls
//! [`GameState::tick`] once per frame while playing.
//!
//! # Modes
//!
//! ```text
//!            Play / Resume              crash
//!   Menu  ------------------> Playing ---------> GameOver
//!    ^  <------------------                          |
//!    |        Escape                                 |
//!    +------------------ after display delay --------+
//! ```

use crate::bird::Bird;
use crate::collision::{field_breach, first_collision, FieldEdge};
use crate::config::GameConfig;
use crate::events::{CrashCause, GameEvent};
use crate::gui::{MainMenu, MainMenuOption};
use crate::input_system::GameAction;
use crate::obstacle::{spawn_due, Obstacle};
use crate::save::HighScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

/// Whether the loop should keep running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct GameState {
    config: GameConfig,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    pub mode: Mode,
    pub menu: MainMenu,
    /// A run exists that Resume can continue
    run_active: bool,
    /// Flap input received since the last tick
    jump_requested: bool,
    store: HighScoreStore,
    rng: StdRng,
}

impl GameState {
    /// Creates the initial state: main menu, no run, high score from disk
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, store: HighScoreStore, rng: StdRng) -> Self {
        let high_score = store.load();
        GameState {
            bird: Bird::new(&config),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            mode: Mode::Menu,
            menu: MainMenu::new(),
            run_active: false,
            jump_requested: false,
            store,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies one input intent. Inputs that make no sense in the current
    /// mode are ignored.
    pub fn handle_action(&mut self, action: GameAction) -> Flow {
        if action == GameAction::Quit {
            return Flow::Exit;
        }

        match self.mode {
            Mode::Menu => match action {
                GameAction::MenuUp => self.menu.navigate_up(),
                GameAction::MenuDown => self.menu.navigate_down(),
                GameAction::MenuConfirm => return self.confirm_menu(),
                _ => {}
            },
            Mode::Playing => match action {
                GameAction::Jump => self.jump_requested = true,
                GameAction::ReturnToMenu => self.pause_to_menu(),
                _ => {}
            },
            Mode::GameOver => {}
        }

        Flow::Continue
    }

    fn confirm_menu(&mut self) -> Flow {
        match self.menu.selected_option() {
            MainMenuOption::Play => self.start_new_run(),
            MainMenuOption::Resume => {
                debug_assert_eq!(self.run_active, self.menu.resume_available());
                if self.run_active {
                    debug!("Resuming run at score {}", self.score);
                    self.mode = Mode::Playing;
                }
            }
            MainMenuOption::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Resets every run-scoped value and enters Playing
    pub fn start_new_run(&mut self) {
        self.bird = Bird::new(&self.config);
        self.obstacles = vec![Obstacle::spawn(&self.config, &mut self.rng)];
        self.score = 0;
        self.jump_requested = false;
        self.run_active = true;
        self.menu.set_resume_available(true);
        self.mode = Mode::Playing;
        info!("New run started (best: {})", self.high_score);
    }

    fn pause_to_menu(&mut self) {
        self.jump_requested = false;
        self.mode = Mode::Menu;
    }

    /// Leaves the game over screen once its delay is done
    pub fn return_to_menu(&mut self) {
        if self.mode == Mode::GameOver {
            self.mode = Mode::Menu;
        }
    }

    /// Advances the simulation by one tick. Does nothing outside Playing.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.mode != Mode::Playing {
            return events;
        }

        self.bird.fall(self.config.gravity);
        if self.jump_requested {
            self.bird.flap(self.config.jump_strength);
            self.jump_requested = false;
            events.push(GameEvent::Flapped);
        }

        events.extend(self.advance_obstacles());
        self.spawn_if_due();

        let crash = match field_breach(&self.bird.rect(), self.config.field_height) {
            Some(FieldEdge::Top) => Some(CrashCause::Ceiling),
            Some(FieldEdge::Bottom) => Some(CrashCause::Floor),
            None => first_collision(&self.bird, &self.obstacles).map(|_| CrashCause::Obstacle),
        };

        if let Some(cause) = crash {
            events.push(self.crash(cause));
        }

        self.retire_obstacles();

        events
    }

    /// Scrolls every pipe and scores the ones whose trailing edge just cleared the bird
    fn advance_obstacles(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for obstacle in &mut self.obstacles {
            obstacle.advance(1, self.config.pipe_speed);
            if obstacle.try_pass(self.bird.x) {
                self.score += 1;
                events.push(GameEvent::Scored { score: self.score });
            }
        }
        events
    }

    fn spawn_if_due(&mut self) {
        if spawn_due(self.obstacles.last(), &self.config) {
            self.obstacles.push(Obstacle::spawn(&self.config, &mut self.rng));
        }
    }

    /// Drops pipes that have fully left the field
    fn retire_obstacles(&mut self) {
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());
    }

    /// Ends the run, persisting the score if it is a new best
    fn crash(&mut self, cause: CrashCause) -> GameEvent {
        self.mode = Mode::GameOver;
        self.run_active = false;
        self.jump_requested = false;
        self.menu.set_resume_available(false);

        let mut new_high_score = self.score > self.high_score;
        if new_high_score {
            match self.store.record(self.score) {
                Ok(true) => self.high_score = self.score,
                Ok(false) => {
                    // The file already holds a better score; adopt it
                    self.high_score = self.store.load().max(self.score);
                    new_high_score = false;
                }
                Err(e) => {
                    // The in-memory value stays even if the write fails
                    self.high_score = self.score;
                    warn!("Failed to save high score: {}", e);
                }
            }
        }

        info!("Run over ({:?}): score {}, best {}", cause, self.score, self.high_score);

        GameEvent::Crashed {
            cause,
            score: self.score,
            new_high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_store(name: &str) -> (HighScoreStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "flappy_eid_state_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (HighScoreStore::new(&dir), dir)
    }

    fn new_state(name: &str) -> (GameState, PathBuf) {
        let (store, dir) = temp_store(name);
        let state = GameState::with_rng(GameConfig::default(), store, StdRng::seed_from_u64(42));
        (state, dir)
    }

    #[test]
    fn test_initial_state() {
        let (state, _dir) = new_state("initial");
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.menu.selected_option(), MainMenuOption::Play);
        assert!(!state.run_active);
        assert_eq!(state.high_score, 0);
    }

    #[test]
    fn test_play_starts_fresh_run() {
        let (mut state, _dir) = new_state("play");
        assert_eq!(state.handle_action(GameAction::MenuConfirm), Flow::Continue);

        assert_eq!(state.mode, Mode::Playing);
        assert!(state.run_active);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, 400.0);
        assert_eq!(state.bird, Bird::new(state.config()));
    }

    #[test]
    fn test_gravity_without_jump() {
        let (mut state, _dir) = new_state("gravity");
        state.start_new_run();

        for _ in 0..10 {
            let before = state.bird.velocity;
            state.tick();
            assert_eq!(state.bird.velocity, before + 0.5);
        }
    }

    #[test]
    fn test_jump_overrides_gravity_same_tick() {
        let (mut state, _dir) = new_state("jump");
        state.start_new_run();
        state.bird.velocity = 6.0;

        state.handle_action(GameAction::Jump);
        let events = state.tick();

        assert_eq!(state.bird.velocity, -8.0);
        assert_eq!(events, vec![GameEvent::Flapped]);

        // Two presses in one tick are still a single impulse
        state.handle_action(GameAction::Jump);
        state.handle_action(GameAction::Jump);
        let events = state.tick();
        assert_eq!(state.bird.velocity, -8.0);
        assert_eq!(events, vec![GameEvent::Flapped]);
    }

    #[test]
    fn test_falls_to_floor_in_closed_form_ticks() {
        let (mut state, _dir) = new_state("freefall");
        state.start_new_run();

        // y(n) = 300 + g * n(n+1)/2; dead once trunc(y) + 40 > 600
        let config = state.config().clone();
        let expected = (1u32..)
            .find(|&n| {
                let y = config.field_height as f32 / 2.0
                    + config.gravity * (n * (n + 1)) as f32 / 2.0;
                y as i32 + config.bird_size as i32 > config.field_height as i32
            })
            .unwrap();
        assert_eq!(expected, 32);

        let mut ticks = 0;
        let mut last_events = Vec::new();
        while state.mode == Mode::Playing {
            last_events = state.tick();
            ticks += 1;
            assert!(ticks <= 1000);
        }

        assert_eq!(ticks, expected);
        assert_eq!(state.mode, Mode::GameOver);
        assert!(last_events.contains(&GameEvent::Crashed {
            cause: CrashCause::Floor,
            score: 0,
            new_high_score: false,
        }));
    }

    #[test]
    fn test_repeated_flaps_keep_bird_in_field() {
        let (mut state, _dir) = new_state("hover");
        state.start_new_run();

        for _ in 0..10_000 {
            state.obstacles.clear();
            if state.bird.y > 300.0 {
                state.handle_action(GameAction::Jump);
            }
            state.tick();

            assert_eq!(state.mode, Mode::Playing);
            assert!(field_breach(&state.bird.rect(), 600).is_none());
        }
    }

    #[test]
    fn test_flying_into_ceiling_ends_run() {
        let (mut state, _dir) = new_state("ceiling");
        state.start_new_run();

        let mut events = Vec::new();
        for _ in 0..200 {
            state.obstacles.clear();
            state.handle_action(GameAction::Jump);
            events = state.tick();
            if state.mode != Mode::Playing {
                break;
            }
        }

        assert_eq!(state.mode, Mode::GameOver);
        assert!(matches!(
            events.last(),
            Some(GameEvent::Crashed { cause: CrashCause::Ceiling, .. })
        ));
    }

    #[test]
    fn test_pipe_scores_exactly_once() {
        let (mut state, _dir) = new_state("score");
        state.start_new_run();
        let config = state.config().clone();
        // Trailing edge at 51, one tick puts it at 48 (< 50)
        state.obstacles = vec![Obstacle::with_gap(&config, -9.0, 250)];

        let events = state.tick();
        assert_eq!(state.score, 1);
        assert!(events.contains(&GameEvent::Scored { score: 1 }));

        for _ in 0..5 {
            let events = state.tick();
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_pipe_collision_ends_run_and_saves_best() {
        let (mut state, dir) = new_state("collide");
        state.start_new_run();
        state.score = 5;
        let config = state.config().clone();
        // Lower segment spans y 250..400, bird spans 300..340
        state.obstacles = vec![Obstacle::with_gap(&config, 63.0, 100)];

        let events = state.tick();

        assert_eq!(state.mode, Mode::GameOver);
        assert!(!state.run_active);
        assert!(!state.menu.resume_available());
        assert_eq!(state.high_score, 5);
        assert!(events.contains(&GameEvent::Crashed {
            cause: CrashCause::Obstacle,
            score: 5,
            new_high_score: true,
        }));
        assert_eq!(HighScoreStore::new(&dir).load(), 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_spawn_spacing_is_constant() {
        let (mut state, _dir) = new_state("spacing");
        state.start_new_run();

        for _ in 0..3000 {
            state.advance_obstacles();
            state.spawn_if_due();
            state.retire_obstacles();
        }

        assert!(state.obstacles.len() >= 2);
        for pair in state.obstacles.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 303.0);
        }
    }

    #[test]
    fn test_off_screen_pipes_are_retired() {
        let (mut state, _dir) = new_state("retire");
        state.start_new_run();

        for _ in 0..3000 {
            state.advance_obstacles();
            state.spawn_if_due();
            state.retire_obstacles();
            assert!(state.obstacles.len() <= 3);
            assert!(state.obstacles.iter().all(|o| o.trailing_edge() >= 0.0));
        }
    }

    #[test]
    fn test_escape_and_resume_keep_run() {
        let (mut state, _dir) = new_state("resume");
        state.handle_action(GameAction::MenuConfirm);
        for _ in 0..5 {
            state.tick();
        }
        let bird = state.bird.clone();
        let obstacles = state.obstacles.clone();

        state.handle_action(GameAction::ReturnToMenu);
        assert_eq!(state.mode, Mode::Menu);
        // Menu mode does not simulate
        assert!(state.tick().is_empty());

        state.handle_action(GameAction::MenuDown);
        assert_eq!(state.menu.selected_option(), MainMenuOption::Resume);
        state.handle_action(GameAction::MenuConfirm);

        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.bird, bird);
        assert_eq!(state.obstacles, obstacles);
    }

    #[test]
    fn test_resume_without_run_is_ignored() {
        let (mut state, _dir) = new_state("noresume");
        state.handle_action(GameAction::MenuDown);
        state.handle_action(GameAction::MenuConfirm);
        assert_eq!(state.mode, Mode::Menu);
    }

    #[test]
    fn test_game_over_returns_to_menu_and_blocks_resume() {
        let (mut state, _dir) = new_state("gameover");
        state.start_new_run();
        while state.mode == Mode::Playing {
            state.tick();
        }

        // Inputs during the game over hold are ignored
        state.handle_action(GameAction::MenuConfirm);
        assert_eq!(state.mode, Mode::GameOver);

        state.return_to_menu();
        assert_eq!(state.mode, Mode::Menu);

        state.handle_action(GameAction::MenuDown);
        state.handle_action(GameAction::MenuConfirm);
        assert_eq!(state.mode, Mode::Menu);
    }

    #[test]
    fn test_exit_and_quit() {
        let (mut state, _dir) = new_state("exit");
        state.handle_action(GameAction::MenuUp);
        assert_eq!(state.menu.selected_option(), MainMenuOption::Exit);
        assert_eq!(state.handle_action(GameAction::MenuConfirm), Flow::Exit);

        state.start_new_run();
        assert_eq!(state.handle_action(GameAction::Quit), Flow::Exit);
    }

    #[test]
    fn test_high_score_sequence() {
        let (mut state, dir) = new_state("sequence");

        let mut persisted = Vec::new();
        for score in [50, 30, 80, 10] {
            state.start_new_run();
            state.score = score;
            state.crash(CrashCause::Floor);
            persisted.push(HighScoreStore::new(&dir).load());
        }

        assert_eq!(persisted, vec![50, 50, 80, 80]);
        assert_eq!(state.high_score, 80);

        // A fresh process picks the stored value up
        let reloaded = GameState::with_rng(
            GameConfig::default(),
            HighScoreStore::new(&dir),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(reloaded.high_score, 80);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_crash_adopts_higher_stored_score() {
        let (mut state, dir) = new_state("adopt");
        // Another instance stores a better score mid-run
        HighScoreStore::new(&dir).save(60).unwrap();

        state.start_new_run();
        state.score = 20;
        let event = state.crash(CrashCause::Obstacle);

        assert_eq!(HighScoreStore::new(&dir).load(), 60);
        assert_eq!(state.high_score, 60);
        assert_eq!(
            event,
            GameEvent::Crashed {
                cause: CrashCause::Obstacle,
                score: 20,
                new_high_score: false,
            }
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_crash_leaves_newer_format_file_alone() {
        let (mut state, dir) = new_state("newer_format");
        std::fs::create_dir_all(&dir).unwrap();
        let json = r#"{"version": 2, "high_score": 99, "last_updated": "2026-01-01T00:00:00+00:00"}"#;
        std::fs::write(dir.join("highscore.json"), json).unwrap();

        state.start_new_run();
        state.score = 5;
        state.crash(CrashCause::Floor);

        assert_eq!(std::fs::read_to_string(dir.join("highscore.json")).unwrap(), json);
        assert_eq!(state.high_score, 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupted_high_score_file_starts_at_zero() {
        let (store, dir) = temp_store("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(store.path(), "not json at all").unwrap();

        let state = GameState::with_rng(GameConfig::default(), store, StdRng::seed_from_u64(3));
        assert_eq!(state.high_score, 0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
