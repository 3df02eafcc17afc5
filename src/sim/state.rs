//! Simulation state
//!
//! Everything the transition function reads or writes lives in
//! [`SimulationState`]. Positions are in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hitbox::Hitbox;
use crate::tuning::Tuning;

/// Complete game state for one episode (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Top edge of the actor
    pub actor_y: f32,
    pub actor_ducking: bool,
    /// Vertical speed, non-zero only while airborne
    pub actor_velocity_y: f32,
    pub is_jumping: bool,
    pub ground_hazard_1_x: f32,
    pub ground_hazard_2_x: f32,
    pub aerial_hazard_x: f32,
    /// Patrol direction (±1); carried in the observation, never moves the hazard
    pub aerial_hazard_direction: i32,
    /// Kept in f64; only the observation narrows it
    pub score: f64,
    /// Ticks elapsed in this episode
    #[serde(default)]
    pub ticks: u64,
}

impl SimulationState {
    /// Fresh episode state; `hazard_2_offset` is the random gap past the
    /// right edge for the second ground hazard.
    pub fn new(tuning: &Tuning, hazard_2_offset: f32) -> Self {
        Self {
            actor_y: tuning.actor_rest_y(),
            actor_ducking: false,
            actor_velocity_y: 0.0,
            is_jumping: false,
            ground_hazard_1_x: tuning.screen_width,
            ground_hazard_2_x: tuning.screen_width + hazard_2_offset,
            aerial_hazard_x: (tuning.screen_width / 2.0).floor(),
            aerial_hazard_direction: 1,
            score: 0.0,
            ticks: 0,
        }
    }

    /// Whether the actor is standing on the ground
    #[inline]
    pub fn on_ground(&self, tuning: &Tuning) -> bool {
        !self.is_jumping && self.actor_y >= tuning.actor_rest_y()
    }

    /// Actor hitbox; height depends on ducking
    pub fn actor_hitbox(&self, tuning: &Tuning) -> Hitbox {
        Hitbox::new(
            Vec2::new(tuning.actor_left, self.actor_y),
            tuning.actor_size(self.actor_ducking),
        )
    }

    /// Hitboxes of both ground hazards
    pub fn ground_hazard_hitboxes(&self, tuning: &Tuning) -> [Hitbox; 2] {
        let size = Vec2::new(tuning.ground_hazard_width, tuning.ground_hazard_height);
        let top = tuning.ground_hazard_top();
        [
            Hitbox::new(Vec2::new(self.ground_hazard_1_x, top), size),
            Hitbox::new(Vec2::new(self.ground_hazard_2_x, top), size),
        ]
    }

    /// Hitbox of the aerial hazard
    pub fn aerial_hazard_hitbox(&self, tuning: &Tuning) -> Hitbox {
        Hitbox::new(
            Vec2::new(self.aerial_hazard_x, tuning.aerial_hazard_y),
            Vec2::new(tuning.aerial_hazard_width, tuning.aerial_hazard_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let tuning = Tuning::default();
        let state = SimulationState::new(&tuning, 450.0);
        assert_eq!(state.actor_y, 260.0);
        assert!(!state.actor_ducking);
        assert!(!state.is_jumping);
        assert_eq!(state.actor_velocity_y, 0.0);
        assert_eq!(state.ground_hazard_1_x, 800.0);
        assert_eq!(state.ground_hazard_2_x, 1250.0);
        assert_eq!(state.aerial_hazard_x, 400.0);
        assert_eq!(state.aerial_hazard_direction, 1);
        assert_eq!(state.score, 0.0);
        assert!(state.on_ground(&tuning));
    }

    #[test]
    fn test_ducking_shrinks_hitbox() {
        let tuning = Tuning::default();
        let mut state = SimulationState::new(&tuning, 400.0);
        assert_eq!(state.actor_hitbox(&tuning).bottom(), 300.0);
        state.actor_ducking = true;
        let hitbox = state.actor_hitbox(&tuning);
        assert_eq!(hitbox.top(), 260.0);
        assert_eq!(hitbox.bottom(), 280.0);
    }

    #[test]
    fn test_hazard_hitboxes() {
        let tuning = Tuning::default();
        let state = SimulationState::new(&tuning, 500.0);
        let [h1, h2] = state.ground_hazard_hitboxes(&tuning);
        assert_eq!((h1.left(), h1.right()), (800.0, 820.0));
        assert_eq!((h1.top(), h1.bottom()), (260.0, 300.0));
        assert_eq!(h2.left(), 1300.0);
        let bird = state.aerial_hazard_hitbox(&tuning);
        assert_eq!((bird.top(), bird.bottom()), (200.0, 220.0));
        assert_eq!((bird.left(), bird.right()), (400.0, 430.0));
    }
}
