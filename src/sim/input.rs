//! Player commands
//!
//! The host maps its key events onto `Command`s; applying one only writes
//! actor velocity and acceleration; the stepper does the rest.

use super::state::{GameEvent, GameState};

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left key pressed
    LeftDown,
    /// Left key released
    LeftUp,
    /// Right key pressed
    RightDown,
    /// Right key released
    RightUp,
    /// Jump trigger
    Jump,
}

/// Apply one command to the actor
///
/// Returns false when the command had no effect (a jump while airborne).
pub fn apply(state: &mut GameState, command: Command) -> bool {
    let walk = state.settings.walk_speed;
    match command {
        Command::LeftDown => state.actor.walk(-walk),
        Command::RightDown => state.actor.walk(walk),
        Command::LeftUp | Command::RightUp => state.actor.walk(0.0),
        Command::Jump => {
            let (speed, gravity) = (state.settings.jump_speed, state.settings.gravity);
            if !state.actor.jump(speed, gravity) {
                return false;
            }
            log::debug!("Jump from {:?}", state.actor.pos());
            state.push_event(GameEvent::Jumped);
        }
    }
    true
}

/// Apply a batch of commands in order, returning how many took effect
pub fn apply_all(state: &mut GameState, commands: impl IntoIterator<Item = Command>) -> usize {
    commands
        .into_iter()
        .filter(|&command| apply(state, command))
        .count()
}
