//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod automaton;
pub mod geom;
pub mod pilot;
pub mod sentry;
pub mod state;
pub mod tick;

pub use automaton::{DfaState, Symbol, TransitionTable};
pub use geom::{Aabb, distance, move_towards};
pub use pilot::Autopilot;
pub use sentry::{Sentry, SentryMode};
pub use state::{GameEvent, Session};
pub use tick::{TickInput, tick};
