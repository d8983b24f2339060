//! Sentry motion controller
//!
//! The automaton decides how alert the sentry is; this module decides how it
//! moves. The motion mode is a second, smaller state machine nested under the
//! automaton: patrolling splits into orbiting and returning-to-orbit, and the
//! returning mode is entered only by a Chase -> Patrol transition.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::automaton::DfaState;
use super::geom::{Aabb, distance, move_towards, truncate};
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// How the sentry moves this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SentryMode {
    /// Locked onto the orbit circle, angle advancing every tick
    #[default]
    Orbiting,
    /// Gave up a chase; walking back to the orbit at sentry speed
    ReturningToOrbit,
    /// Heading straight for the player
    Pursuing,
    /// Player caught, no more movement
    Frozen,
}

impl SentryMode {
    /// Mode after the automaton moves from `from` to `to`
    pub fn after_transition(self, from: DfaState, to: DfaState) -> Self {
        match (from, to) {
            (_, DfaState::Catch) => SentryMode::Frozen,
            (_, DfaState::Chase) => SentryMode::Pursuing,
            (DfaState::Chase, DfaState::Patrol) => SentryMode::ReturningToOrbit,
            (_, DfaState::Patrol) => match self {
                SentryMode::ReturningToOrbit => SentryMode::ReturningToOrbit,
                _ => SentryMode::Orbiting,
            },
        }
    }
}

/// The sentry entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentry {
    pub body: Aabb,
    pub mode: SentryMode,
    /// Orbit angle in radians, kept in [0, TAU)
    pub orbit_angle: f32,
}

impl Sentry {
    pub fn new(size: i32) -> Self {
        Self {
            body: Aabb::square(0, 0, size),
            mode: SentryMode::Orbiting,
            orbit_angle: 0.0,
        }
    }

    /// Back to orbiting at angle 0, parked at the orbit's rightmost point
    pub fn reset(&mut self, treasure: &Aabb, tuning: &Tuning) {
        self.mode = SentryMode::Orbiting;
        self.orbit_angle = 0.0;
        let offset = Vec2::new(tuning.patrol_radius, 0.0);
        self.body.set_center(treasure.center() + truncate(offset));
    }

    /// Whether the sentry is walking back to its orbit
    pub fn is_returning(&self) -> bool {
        self.mode == SentryMode::ReturningToOrbit
    }

    /// Point on the orbit circle for the current angle
    pub fn orbit_target(&self, treasure: &Aabb, tuning: &Tuning) -> Vec2 {
        treasure.center().as_vec2() + polar_to_cartesian(tuning.patrol_radius, self.orbit_angle)
    }

    /// Follow the automaton's latest transition
    pub fn on_transition(&mut self, from: DfaState, to: DfaState) {
        let next = self.mode.after_transition(from, to);
        if next != self.mode {
            log::trace!("Sentry mode {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
    }

    /// Move one tick according to the current mode
    pub fn step(&mut self, treasure: &Aabb, player: &Aabb, tuning: &Tuning) {
        match self.mode {
            SentryMode::Orbiting => {
                let target = truncate(self.orbit_target(treasure, tuning));
                // Wrap so f32 keeps resolving the step on long sessions
                self.orbit_angle = (self.orbit_angle + tuning.patrol_angle_step).rem_euclid(TAU);
                self.body.set_center(target);
            }
            SentryMode::ReturningToOrbit => {
                let point = truncate(self.orbit_target(treasure, tuning));
                let target = Aabb::new(point.x, point.y, 1, 1);
                move_towards(&mut self.body, &target, tuning.sentry_speed);
                if distance(&self.body, &target) < tuning.return_tolerance {
                    self.mode = SentryMode::Orbiting;
                }
            }
            SentryMode::Pursuing => {
                move_towards(&mut self.body, player, tuning.sentry_speed);
            }
            SentryMode::Frozen => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_mode_follows_automaton() {
        use DfaState::*;
        let m = SentryMode::Orbiting;
        assert_eq!(m.after_transition(Patrol, Patrol), SentryMode::Orbiting);
        assert_eq!(m.after_transition(Patrol, Chase), SentryMode::Pursuing);
        assert_eq!(m.after_transition(Patrol, Catch), SentryMode::Frozen);

        let m = SentryMode::Pursuing;
        assert_eq!(m.after_transition(Chase, Chase), SentryMode::Pursuing);
        assert_eq!(m.after_transition(Chase, Patrol), SentryMode::ReturningToOrbit);
        assert_eq!(m.after_transition(Chase, Catch), SentryMode::Frozen);

        let m = SentryMode::ReturningToOrbit;
        assert_eq!(m.after_transition(Patrol, Patrol), SentryMode::ReturningToOrbit);
        assert_eq!(m.after_transition(Patrol, Chase), SentryMode::Pursuing);

        let m = SentryMode::Frozen;
        assert_eq!(m.after_transition(Catch, Catch), SentryMode::Frozen);
    }

    #[test]
    fn test_reset_parks_on_orbit_start() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.mode = SentryMode::Pursuing;
        s.orbit_angle = 4.2;
        s.reset(&treasure, &t);

        assert_eq!(s.mode, SentryMode::Orbiting);
        assert_eq!(s.orbit_angle, 0.0);
        assert_eq!(s.body.center(), IVec2::new(315 + 80, 215));
    }

    #[test]
    fn test_orbit_snaps_then_advances_angle() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.body = Aabb::square(0, 0, t.sentry_size);

        s.step(&treasure, &player, &t);

        // Snapped to the angle-0 point, then the angle moved on
        assert_eq!(s.body.center(), IVec2::new(395, 215));
        assert!((s.orbit_angle - t.patrol_angle_step).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_stays_on_circle() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.reset(&treasure, &t);

        for _ in 0..300 {
            s.step(&treasure, &player, &t);
            let d = distance(&s.body, &treasure);
            assert!((d - t.patrol_radius).abs() < 2.0, "drifted off orbit: {d}");
        }
    }

    #[test]
    fn test_orbit_keeps_advancing_from_huge_angle() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        // At this magnitude a plain f32 add of 0.03 is lost entirely
        s.orbit_angle = 524_288.0;

        s.step(&treasure, &player, &t);
        assert!((0.0..TAU).contains(&s.orbit_angle));

        let angle = s.orbit_angle;
        let pos = s.body.pos;
        for _ in 0..100 {
            s.step(&treasure, &player, &t);
        }
        let expected = angle + 100.0 * t.patrol_angle_step;
        let drift = (s.orbit_angle - expected).rem_euclid(TAU);
        assert!(drift < 1e-3 || drift > TAU - 1e-3, "angle {}", s.orbit_angle);
        assert_ne!(s.body.pos, pos);
    }

    #[test]
    fn test_orbit_angle_wraps_after_full_turn() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.reset(&treasure, &t);

        // 0.03 rad per tick: a full turn takes ~210 ticks
        for _ in 0..1000 {
            s.step(&treasure, &player, &t);
            assert!((0.0..TAU).contains(&s.orbit_angle));
        }
    }

    #[test]
    fn test_returning_does_not_advance_angle() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.body.set_center(IVec2::new(600, 215));
        s.mode = SentryMode::ReturningToOrbit;
        s.orbit_angle = 0.0;

        s.step(&treasure, &player, &t);

        assert_eq!(s.orbit_angle, 0.0);
        assert_eq!(s.body.center(), IVec2::new(596, 215));
        assert!(s.is_returning());
    }

    #[test]
    fn test_returning_rejoins_orbit_within_tolerance() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        // Orbit point for angle 0 is (395, 215); start 6 units away
        s.body.set_center(IVec2::new(401, 215));
        s.mode = SentryMode::ReturningToOrbit;

        s.step(&treasure, &player, &t);

        assert_eq!(s.body.center(), IVec2::new(397, 215));
        assert_eq!(s.mode, SentryMode::Orbiting);
    }

    #[test]
    fn test_returning_eventually_orbits() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.body.set_center(IVec2::new(700, 500));
        s.mode = SentryMode::ReturningToOrbit;

        let mut ticks = 0;
        while s.is_returning() {
            s.step(&treasure, &player, &t);
            ticks += 1;
            assert!(ticks < 1000, "never got back to the orbit");
        }
        assert_eq!(s.orbit_angle, 0.0);
    }

    #[test]
    fn test_pursuit_heads_for_player() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 40);
        let mut s = Sentry::new(t.sentry_size);
        s.body = Aabb::square(100, 0, t.sentry_size);
        s.mode = SentryMode::Pursuing;

        s.step(&treasure, &player, &t);
        assert_eq!(s.body.pos, IVec2::new(96, 0));
    }

    #[test]
    fn test_frozen_does_not_move() {
        let t = tuning();
        let treasure = Aabb::square(300, 200, 30);
        let player = Aabb::square(0, 0, 30);
        let mut s = Sentry::new(t.sentry_size);
        s.body = Aabb::square(123, 45, t.sentry_size);
        s.mode = SentryMode::Frozen;
        s.orbit_angle = 1.0;

        s.step(&treasure, &player, &t);
        assert_eq!(s.body.pos, IVec2::new(123, 45));
        assert_eq!(s.orbit_angle, 1.0);
    }
}
