//! HUD snapshot
//!
//! Everything a front end needs to draw a frame, derived from the session.
//! No drawing happens here.

use std::fmt;

use serde::Serialize;

use crate::sim::{Aabb, DfaState, Session};

/// RGB color
pub type Rgb = [u8; 3];

pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = [255, 255, 255];
    pub const BLUE: Rgb = [50, 120, 255];
    pub const RED: Rgb = [255, 70, 70];
    pub const GOLD: Rgb = [255, 200, 0];
    pub const BLACK: Rgb = [0, 0, 0];
    pub const GREEN: Rgb = [60, 200, 60];
}

pub const CAUGHT_MESSAGE: &str = "PLAYER CAUGHT (ACCEPTING STATE)";
pub const WON_MESSAGE: &str = "YOU STOLE THE TREASURE!";
pub const RESTART_PROMPT: &str = "Press R to Restart";

/// End-of-session banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub color: Rgb,
    pub prompt: &'static str,
}

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub rect: Aabb,
    pub color: Rgb,
}

/// One frame's worth of display data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub state: &'static str,
    pub symbol: &'static str,
    pub score: u32,
    /// Clear color for the playfield
    pub background: Rgb,
    /// Draw order: treasure, player, sentry
    pub sprites: [Sprite; 3],
    pub banner: Option<Banner>,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        let player_color = if session.state == DfaState::Catch {
            palette::BLACK
        } else {
            palette::BLUE
        };

        let banner = session.game_over.then(|| {
            let (message, color) = if session.player_won {
                (WON_MESSAGE, palette::GREEN)
            } else {
                (CAUGHT_MESSAGE, palette::RED)
            };
            Banner {
                message,
                color,
                prompt: RESTART_PROMPT,
            }
        });

        Self {
            state: session.state.as_str(),
            symbol: session.symbol().as_str(),
            score: session.score,
            background: palette::WHITE,
            sprites: [
                Sprite {
                    rect: session.treasure,
                    color: palette::GOLD,
                },
                Sprite {
                    rect: session.player,
                    color: player_color,
                },
                Sprite {
                    rect: session.sentry.body,
                    color: palette::RED,
                },
            ],
            banner,
        }
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {:<6} Symbol: {}  Score: {}",
            self.state, self.symbol, self.score
        )?;
        if let Some(banner) = &self.banner {
            write!(f, "  | {} - {}", banner.message, banner.prompt)?;
        }
        Ok(())
    }
}
