//! Game session state
//!
//! Everything that changes during play lives in `Session`. There are no
//! process-wide globals: a front end owns one session and drives it with
//! `tick`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::automaton::{DfaState, Symbol, TransitionTable};
use super::geom::Aabb;
use super::sentry::Sentry;
use crate::tuning::{Tuning, TuningError};

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Automaton moved to a different state
    StateChanged { from: DfaState, to: DfaState },
    /// Player grabbed the treasure; carries the new score
    TreasureCollected { score: u32 },
    /// Automaton reached `Catch`
    PlayerCaught { score: u32 },
    /// Session was reset by the restart input
    Restarted,
}

/// One play session
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Validated at construction; read-only afterwards
    pub(crate) tuning: Tuning,
    table: TransitionTable,

    pub player: Aabb,
    pub sentry: Sentry,
    pub treasure: Aabb,

    /// Current automaton state
    pub state: DfaState,
    pub score: u32,
    pub game_over: bool,
    /// Never set by the simulation; the game has no victory rule yet
    pub player_won: bool,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
}

impl Session {
    /// New session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// New session with custom tuning; rejects tuning the sim can't run with
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            table: TransitionTable::default(),
            player: Aabb::square(tuning.player_start.x, tuning.player_start.y, tuning.player_size),
            sentry: Sentry::new(tuning.sentry_size),
            treasure: Aabb::square(0, 0, tuning.treasure_size),
            state: DfaState::Patrol,
            score: 0,
            game_over: false,
            player_won: false,
            time_ticks: 0,
            tuning,
        };
        session.reset();
        session
    }

    /// Put the world back to its starting layout.
    ///
    /// The RNG keeps running across resets so each round gets a fresh
    /// treasure spot.
    pub fn reset(&mut self) {
        self.state = DfaState::Patrol;
        self.game_over = false;
        self.player_won = false;
        self.score = 0;
        self.time_ticks = 0;

        self.player.pos = self.tuning.player_start;
        self.randomize_treasure();
        self.sentry.reset(&self.treasure, &self.tuning);

        log::info!(
            "Session reset: treasure at ({}, {})",
            self.treasure.pos.x,
            self.treasure.pos.y
        );
    }

    /// Move the treasure to a uniform random spot inside the margins
    pub fn randomize_treasure(&mut self) {
        let (min, max) = self.treasure_bounds();
        self.treasure.pos = IVec2::new(
            self.rng.random_range(min.x..=max.x),
            self.rng.random_range(min.y..=max.y),
        );
    }

    /// Inclusive range for the treasure's top-left corner
    pub fn treasure_bounds(&self) -> (IVec2, IVec2) {
        let m = self.tuning.treasure_margin;
        (
            IVec2::new(m, m),
            IVec2::new(self.tuning.field_width - m, self.tuning.field_height - m),
        )
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Classify the current player/sentry geometry
    pub fn symbol(&self) -> Symbol {
        Symbol::classify(&self.player, &self.sentry.body, self.tuning.near_distance)
    }

    /// Where the next transition would lead for `symbol`
    pub fn next_state(&self, symbol: Symbol) -> DfaState {
        self.table.next(self.state, symbol)
    }

    /// Whether the sentry is still walking back to its orbit after a chase
    pub fn returning_to_patrol(&self) -> bool {
        self.sentry.is_returning()
    }

    pub fn orbit_angle(&self) -> f32 {
        self.sentry.orbit_angle
    }
}
