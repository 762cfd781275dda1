//! Events emitted by the simulation step
//!
//! The simulation never touches audio or the screen. It reports what happened
//! during a tick and the loop driver decides which sound to fire.

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Flew above the top of the field
    Ceiling,
    /// Fell below the bottom of the field
    Floor,
    /// Hit a pipe segment
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored { score: u32 },
    Crashed {
        cause: CrashCause,
        score: u32,
        new_high_score: bool,
    },
}

impl GameEvent {
    /// Sound effect triggered by this event
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::Flapped => SoundEffect::Flap,
            GameEvent::Scored { .. } => SoundEffect::Score,
            GameEvent::Crashed { .. } => SoundEffect::Hit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Flap,
    Score,
    Hit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sounds() {
        assert_eq!(GameEvent::Flapped.sound(), SoundEffect::Flap);
        assert_eq!(GameEvent::Scored { score: 3 }.sound(), SoundEffect::Score);
        let crash = GameEvent::Crashed {
            cause: CrashCause::Floor,
            score: 0,
            new_high_score: false,
        };
        assert_eq!(crash.sound(), SoundEffect::Hit);
    }
}
