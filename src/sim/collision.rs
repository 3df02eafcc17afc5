//! Collision oracle
//!
//! Pure predicate over the post-motion state: the actor's hitbox against the
//! two ground hazards and the aerial hazard. Jumping clears ground hazards,
//! ducking is the only way under the aerial one.

use super::state::SimulationState;
use crate::tuning::Tuning;

/// Result of a collision check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Actor overlaps a ground hazard
    pub ground: bool,
    /// Actor overlaps the aerial hazard
    pub aerial: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    /// Whether the tick ends the episode
    #[inline]
    pub fn hit(&self) -> bool {
        self.ground || self.aerial
    }
}

/// Check the actor against every hazard
pub fn check_collisions(state: &SimulationState, tuning: &Tuning) -> CollisionResult {
    let actor = state.actor_hitbox(tuning);

    let ground = state
        .ground_hazard_hitboxes(tuning)
        .iter()
        .any(|hazard| actor.overlaps(hazard));
    let aerial = actor.overlaps(&state.aerial_hazard_hitbox(tuning));

    CollisionResult { ground, aerial }
}
