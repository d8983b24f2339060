//! Data-driven game balance
//!
//! Defaults reproduce the classic arcade feel. A JSON file can override any
//! subset of the fields; missing fields keep their default.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: i32,
    pub field_height: i32,

    pub player_size: i32,
    pub sentry_size: i32,
    pub treasure_size: i32,

    /// Player top-left at session start
    pub player_start: IVec2,

    /// Player step per held direction per tick
    pub player_speed: i32,
    /// Sentry step length per tick (chase and return)
    pub sentry_speed: f32,

    /// Center distance at or under which the sentry notices the player
    pub near_distance: f32,

    pub patrol_radius: f32,
    /// Orbit advance per tick (radians)
    pub patrol_angle_step: f32,
    pub return_tolerance: f32,

    /// Minimum treasure distance from the playfield edges
    pub treasure_margin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_size: PLAYER_SIZE,
            sentry_size: SENTRY_SIZE,
            treasure_size: TREASURE_SIZE,
            player_start: IVec2::new(PLAYER_START.0, PLAYER_START.1),
            player_speed: PLAYER_SPEED,
            sentry_speed: SENTRY_SPEED,
            near_distance: NEAR_DISTANCE,
            patrol_radius: PATROL_RADIUS,
            patrol_angle_step: PATROL_ANGLE_STEP,
            return_tolerance: RETURN_TOLERANCE,
            treasure_margin: TREASURE_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        bounded("field_width", self.field_width, MAX_FIELD_EXTENT)?;
        bounded("field_height", self.field_height, MAX_FIELD_EXTENT)?;

        // Everything else is measured against the smaller field side
        let extent = self.field_width.min(self.field_height);
        bounded("player_size", self.player_size, extent)?;
        bounded("sentry_size", self.sentry_size, extent)?;
        bounded("treasure_size", self.treasure_size, extent)?;
        bounded("player_speed", self.player_speed, extent)?;

        let limit = MAX_FIELD_EXTENT as f32;
        finite_bounded("sentry_speed", self.sentry_speed, limit)?;
        finite_bounded("near_distance", self.near_distance, limit)?;
        finite_bounded("patrol_radius", self.patrol_radius, limit)?;
        finite_bounded("return_tolerance", self.return_tolerance, limit)?;
        if !self.patrol_angle_step.is_finite() {
            return Err(invalid("patrol_angle_step", "must be finite"));
        }

        let reach = -MAX_FIELD_EXTENT..=MAX_FIELD_EXTENT;
        if !reach.contains(&self.player_start.x) || !reach.contains(&self.player_start.y) {
            return Err(invalid(
                "player_start",
                format!("coordinates must be within +/-{MAX_FIELD_EXTENT}"),
            ));
        }

        if self.treasure_margin < 0 {
            return Err(invalid("treasure_margin", "must not be negative"));
        }
        if self.treasure_margin > extent / 2 {
            return Err(invalid(
                "treasure_margin",
                format!(
                    "{} leaves no room in a {}x{} field",
                    self.treasure_margin, self.field_width, self.field_height
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn bounded(field: &'static str, value: i32, max: i32) -> Result<(), TuningError> {
    if value > 0 && value <= max {
        Ok(())
    } else {
        Err(invalid(field, format!("must be in 1..={max}, got {value}")))
    }
}

fn finite_bounded(field: &'static str, value: f32, max: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a number in (0, {max}], got {value}")))
    }
}
