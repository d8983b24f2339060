//! DFA Sentinel - a treasure heist arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (automaton, sentry motion, game session)
//! - `tuning`: Data-driven game balance
//! - `ui`: Per-tick HUD snapshot for whatever front end draws the game

pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};
pub use ui::Hud;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Entity sizes (square boxes)
    pub const PLAYER_SIZE: i32 = 30;
    pub const SENTRY_SIZE: i32 = 40;
    pub const TREASURE_SIZE: i32 = 30;

    /// Player spawn (top-left corner)
    pub const PLAYER_START: (i32, i32) = (100, 100);

    /// Movement speeds in units per tick
    pub const PLAYER_SPEED: i32 = 5;
    pub const SENTRY_SPEED: f32 = 4.0;

    /// Center distance at or under which the sentry notices the player
    pub const NEAR_DISTANCE: f32 = 200.0;

    /// Orbit around the treasure while patrolling
    pub const PATROL_RADIUS: f32 = 80.0;
    pub const PATROL_ANGLE_STEP: f32 = 0.03;
    /// Returning sentry rejoins the orbit once closer than this
    pub const RETURN_TOLERANCE: f32 = 5.0;

    /// Largest playfield side or distance tuning may ask for
    pub const MAX_FIELD_EXTENT: i32 = 1 << 16;

    /// Treasure keeps this far from the playfield edges
    pub const TREASURE_MARGIN: i32 = 80;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian_axes() {
        let p = polar_to_cartesian(80.0, 0.0);
        assert!((p.x - 80.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);

        let p = polar_to_cartesian(80.0, PI / 2.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 80.0).abs() < 1e-4);
    }
}
