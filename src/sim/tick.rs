//! Fixed timestep simulation tick
//!
//! One call = one 60 Hz frame of game logic: player input, automaton step,
//! sentry motion, treasure pickup.

use glam::IVec2;

use super::automaton::DfaState;
use super::state::{GameEvent, Session};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Restart request; only honoured once the player has been caught
    pub restart: bool,
}

impl TickInput {
    /// Unit step per axis (-1, 0 or 1); opposite keys cancel
    pub fn direction(&self) -> IVec2 {
        IVec2::new(
            self.right as i32 - self.left as i32,
            self.down as i32 - self.up as i32,
        )
    }
}

/// Advance the session by one tick and report what happened
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart && session.game_over {
        session.reset();
        events.push(GameEvent::Restarted);
    }

    // World is frozen after capture
    if session.game_over {
        return events;
    }

    session.time_ticks += 1;

    // Player moves freely, no clamping to the playfield
    session.player.pos += input.direction() * session.tuning.player_speed;

    // Automaton step
    let symbol = session.symbol();
    let from = session.state;
    let to = session.next_state(symbol);
    session.state = to;
    session.sentry.on_transition(from, to);
    if from != to {
        log::debug!(
            "tick {}: {} --{}--> {}",
            session.time_ticks,
            from.as_str(),
            symbol.as_str(),
            to.as_str()
        );
        events.push(GameEvent::StateChanged { from, to });
    }

    if to == DfaState::Catch {
        session.game_over = true;
        log::info!("Player caught with score {}", session.score);
        events.push(GameEvent::PlayerCaught {
            score: session.score,
        });
    } else {
        session
            .sentry
            .step(&session.treasure, &session.player, &session.tuning);
    }

    if session.player.overlaps(&session.treasure) {
        session.score += 1;
        session.randomize_treasure();
        log::info!(
            "Treasure collected (score {}), respawned at ({}, {})",
            session.score,
            session.treasure.pos.x,
            session.treasure.pos.y
        );
        events.push(GameEvent::TreasureCollected {
            score: session.score,
        });
    }

    events
}
