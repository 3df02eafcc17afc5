//! Data-driven game balance
//!
//! Every geometry and physics constant the simulation reads comes from a
//! [`Tuning`]. The defaults reproduce the classic game; a JSON file can
//! override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EnvError;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_y: f32,

    // === Actor ===
    pub actor_left: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_duck_height: f32,
    /// Initial vertical velocity of a jump (negative is up)
    pub jump_impulse: f32,
    /// Per-tick vertical acceleration while airborne
    pub gravity: f32,

    // === Hazards ===
    pub ground_hazard_width: f32,
    pub ground_hazard_height: f32,
    pub ground_hazard_speed: f32,
    pub aerial_hazard_width: f32,
    pub aerial_hazard_height: f32,
    /// Top edge of the aerial hazard
    pub aerial_hazard_y: f32,
    pub aerial_hazard_speed: f32,
    /// Inclusive range of the second ground hazard's respawn offset
    pub respawn_offset_min: u32,
    pub respawn_offset_max: u32,

    // === Scoring ===
    /// Score added per tick, independent of any frame rate
    pub score_increment: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,

            actor_left: ACTOR_LEFT,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_duck_height: ACTOR_DUCK_HEIGHT,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,

            ground_hazard_width: GROUND_HAZARD_WIDTH,
            ground_hazard_height: GROUND_HAZARD_HEIGHT,
            ground_hazard_speed: GROUND_HAZARD_SPEED,
            aerial_hazard_width: AERIAL_HAZARD_WIDTH,
            aerial_hazard_height: AERIAL_HAZARD_HEIGHT,
            aerial_hazard_y: AERIAL_HAZARD_Y,
            aerial_hazard_speed: AERIAL_HAZARD_SPEED,
            respawn_offset_min: RESPAWN_OFFSET_MIN,
            respawn_offset_max: RESPAWN_OFFSET_MAX,

            score_increment: SCORE_INCREMENT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), EnvError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_y", self.ground_y),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("actor_duck_height", self.actor_duck_height),
            ("gravity", self.gravity),
            ("ground_hazard_width", self.ground_hazard_width),
            ("ground_hazard_height", self.ground_hazard_height),
            ("ground_hazard_speed", self.ground_hazard_speed),
            ("aerial_hazard_width", self.aerial_hazard_width),
            ("aerial_hazard_height", self.aerial_hazard_height),
            ("aerial_hazard_speed", self.aerial_hazard_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(EnvError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(EnvError::InvalidTuning(format!(
                "jump_impulse must be negative (upward), got {}",
                self.jump_impulse
            )));
        }
        if self.actor_duck_height > self.actor_height {
            return Err(EnvError::InvalidTuning(format!(
                "actor_duck_height {} exceeds actor_height {}",
                self.actor_duck_height, self.actor_height
            )));
        }
        if self.actor_height > self.ground_y {
            return Err(EnvError::InvalidTuning(format!(
                "actor_height {} does not fit above ground_y {}",
                self.actor_height, self.ground_y
            )));
        }
        if self.respawn_offset_min > self.respawn_offset_max {
            return Err(EnvError::InvalidTuning(format!(
                "respawn offset range is empty ({}..={})",
                self.respawn_offset_min, self.respawn_offset_max
            )));
        }
        // Hazard 2 must never start on top of hazard 1
        if self.respawn_offset_min as f32 <= self.ground_hazard_width {
            return Err(EnvError::InvalidTuning(format!(
                "respawn_offset_min {} must exceed ground_hazard_width {}",
                self.respawn_offset_min, self.ground_hazard_width
            )));
        }
        if !(self.score_increment.is_finite() && self.score_increment >= 0.0) {
            return Err(EnvError::InvalidTuning(format!(
                "score_increment must be non-negative, got {}",
                self.score_increment
            )));
        }
        Ok(())
    }

    /// Resting y of the actor's top edge when standing on the ground
    #[inline]
    pub fn actor_rest_y(&self) -> f32 {
        self.ground_y - self.actor_height
    }

    /// Top edge of the ground hazards
    #[inline]
    pub fn ground_hazard_top(&self) -> f32 {
        self.ground_y - self.ground_hazard_height
    }

    /// Size of the actor's hitbox for the given stance
    #[inline]
    pub fn actor_size(&self, ducking: bool) -> Vec2 {
        let height = if ducking {
            self.actor_duck_height
        } else {
            self.actor_height
        };
        Vec2::new(self.actor_width, height)
    }

    /// Furthest right any hazard can be placed
    #[inline]
    pub fn max_hazard_x(&self) -> f32 {
        self.screen_width + self.respawn_offset_max as f32
    }
}
