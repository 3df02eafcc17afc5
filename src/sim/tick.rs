//! Fixed timestep simulation tick
//!
//! Advances the game by one tick: action resolution, jump physics, hazard
//! scrolling, collision, scoring. The only source of randomness is the
//! respawn gap of the second ground hazard, drawn from the caller's RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionResult, check_collisions};
use super::state::SimulationState;
use crate::consts::{REWARD_ALIVE, REWARD_COLLISION};
use crate::error::EnvError;
use crate::tuning::Tuning;

/// Discrete action for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Noop,
    Jump,
    Duck,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 3] = [Action::Noop, Action::Jump, Action::Duck];

    /// Index in the discrete action space
    pub fn index(self) -> i64 {
        match self {
            Action::Noop => 0,
            Action::Jump => 1,
            Action::Duck => 2,
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Noop),
            1 => Ok(Action::Jump),
            2 => Ok(Action::Duck),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

/// What a tick produced besides the new state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub reward: f32,
    pub terminal: bool,
    pub collision: CollisionResult,
}

/// Draw the gap past the right edge for a respawning second ground hazard
pub fn respawn_offset<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.respawn_offset_min..=tuning.respawn_offset_max) as f32
}

/// Advance the game state by one tick
pub fn tick<R: Rng>(
    state: &mut SimulationState,
    action: Action,
    tuning: &Tuning,
    rng: &mut R,
) -> TickOutcome {
    state.ticks += 1;

    // Jump only from a standing (not ducking) pose
    if action == Action::Jump && !state.is_jumping && !state.actor_ducking {
        state.is_jumping = true;
        state.actor_velocity_y = tuning.jump_impulse;
    }

    // Ducking is held per tick and never survives into a jump
    state.actor_ducking = action == Action::Duck && !state.is_jumping;

    if state.is_jumping {
        state.actor_y += state.actor_velocity_y;
        state.actor_velocity_y += tuning.gravity;

        let rest_y = tuning.actor_rest_y();
        if state.actor_y >= rest_y {
            state.actor_y = rest_y;
            state.actor_velocity_y = 0.0;
            state.is_jumping = false;
        }
    }

    advance_hazards(state, tuning, rng);

    let collision = check_collisions(state, tuning);
    let terminal = collision.hit();

    // Score accrues on the terminal tick too
    state.score += tuning.score_increment;

    TickOutcome {
        reward: if terminal {
            REWARD_COLLISION
        } else {
            REWARD_ALIVE
        },
        terminal,
        collision,
    }
}

/// Scroll every hazard left and wrap the ones that left the screen
fn advance_hazards<R: Rng>(state: &mut SimulationState, tuning: &Tuning, rng: &mut R) {
    state.ground_hazard_1_x -= tuning.ground_hazard_speed;
    state.ground_hazard_2_x -= tuning.ground_hazard_speed;

    if state.ground_hazard_1_x < 0.0 {
        state.ground_hazard_1_x = tuning.screen_width;
        log::trace!("ground hazard 1 respawned at {}", state.ground_hazard_1_x);
    }
    // Hazard 2 respawns further out so the pair never moves in lockstep
    if state.ground_hazard_2_x < 0.0 {
        state.ground_hazard_2_x = tuning.screen_width + respawn_offset(rng, tuning);
        log::trace!("ground hazard 2 respawned at {}", state.ground_hazard_2_x);
    }

    state.aerial_hazard_x -= tuning.aerial_hazard_speed;
    if state.aerial_hazard_x < 0.0 {
        state.aerial_hazard_x = tuning.screen_width;
        log::trace!("aerial hazard respawned at {}", state.aerial_hazard_x);
    }
}
