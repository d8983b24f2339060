//! Demo-mode player AI
//!
//! Produces the same `TickInput` a keyboard would: heads for the treasure,
//! breaks away while the sentry is chasing, and presses restart after a
//! capture while it still has restarts to spend.

use glam::Vec2;

use super::automaton::DfaState;
use super::state::Session;
use super::tick::TickInput;

/// Below this share of the unit vector an axis key stays released
const AXIS_DEADZONE: f32 = 0.3;
/// How strongly the treasure still pulls while fleeing
const GREED: f32 = 0.5;
/// Stay this far inside the playfield while fleeing
const EDGE_PADDING: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    restarts_left: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
        }
    }

    pub fn restarts_left(&self) -> u32 {
        self.restarts_left
    }

    /// The run is over: caught with no restarts left
    pub fn finished(&self, session: &Session) -> bool {
        session.game_over && self.restarts_left == 0
    }

    /// Decide this tick's keys
    pub fn input(&mut self, session: &Session) -> TickInput {
        if session.game_over {
            if self.restarts_left == 0 {
                return TickInput::default();
            }
            self.restarts_left -= 1;
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }

        let player = session.player.center().as_vec2();
        let treasure = session.treasure.center().as_vec2();
        let sentry = session.sentry.body.center().as_vec2();

        let to_treasure = (treasure - player).normalize_or_zero();
        let mut desired = if session.state == DfaState::Chase {
            (player - sentry).normalize_or_zero() + to_treasure * GREED
        } else {
            to_treasure
        };

        // Don't run off the field
        let tuning = session.tuning();
        let max = Vec2::new(tuning.field_width as f32, tuning.field_height as f32) - EDGE_PADDING;
        if (player.x <= EDGE_PADDING && desired.x < 0.0) || (player.x >= max.x && desired.x > 0.0) {
            desired.x = 0.0;
        }
        if (player.y <= EDGE_PADDING && desired.y < 0.0) || (player.y >= max.y && desired.y > 0.0) {
            desired.y = 0.0;
        }

        keys_for(desired.normalize_or_zero())
    }
}

fn keys_for(dir: Vec2) -> TickInput {
    TickInput {
        up: dir.y < -AXIS_DEADZONE,
        down: dir.y > AXIS_DEADZONE,
        left: dir.x < -AXIS_DEADZONE,
        right: dir.x > AXIS_DEADZONE,
        restart: false,
    }
}
