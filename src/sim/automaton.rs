//! Sentry alertness automaton
//!
//! Three states, three input symbols, one fixed transition table. The input
//! symbol is derived fresh every tick from player/sentry geometry.

use serde::{Deserialize, Serialize};

use super::geom::{Aabb, distance};

/// Sentry alertness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DfaState {
    /// Idle, orbiting the treasure
    #[default]
    Patrol,
    /// Actively pursuing the player
    Chase,
    /// Player captured (absorbing)
    Catch,
}

impl DfaState {
    pub const ALL: [DfaState; 3] = [DfaState::Patrol, DfaState::Chase, DfaState::Catch];

    pub fn as_str(&self) -> &'static str {
        match self {
            DfaState::Patrol => "Patrol",
            DfaState::Chase => "Chase",
            DfaState::Catch => "Catch",
        }
    }

    /// Whether this state ends the session
    pub fn is_accepting(&self) -> bool {
        *self == DfaState::Catch
    }

    fn index(self) -> usize {
        match self {
            DfaState::Patrol => 0,
            DfaState::Chase => 1,
            DfaState::Catch => 2,
        }
    }
}

/// Per-tick proximity classification of player vs. sentry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Far,
    Near,
    Touch,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::Far, Symbol::Near, Symbol::Touch];

    /// Single-letter label shown on the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Far => "f",
            Symbol::Near => "n",
            Symbol::Touch => "t",
        }
    }

    /// Classify two boxes. Overlap wins over any distance check.
    pub fn classify(player: &Aabb, sentry: &Aabb, near_distance: f32) -> Self {
        if player.overlaps(sentry) {
            Symbol::Touch
        } else if distance(player, sentry) <= near_distance {
            Symbol::Near
        } else {
            Symbol::Far
        }
    }

    fn index(self) -> usize {
        match self {
            Symbol::Far => 0,
            Symbol::Near => 1,
            Symbol::Touch => 2,
        }
    }
}

/// Total transition function `DfaState x Symbol -> DfaState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rows: [[DfaState; 3]; 3],
}

impl Default for TransitionTable {
    fn default() -> Self {
        use DfaState::*;
        Self {
            //        far     near   touch
            rows: [
                [Patrol, Chase, Catch], // Patrol
                [Patrol, Chase, Catch], // Chase
                [Catch, Catch, Catch],  // Catch
            ],
        }
    }
}

impl TransitionTable {
    /// Look up the next state
    #[inline]
    pub fn next(&self, state: DfaState, symbol: Symbol) -> DfaState {
        self.rows[state.index()][symbol.index()]
    }
}
