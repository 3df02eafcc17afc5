//! Demo/idle-mode AI
//!
//! Picks an action by rolling the simulation forward on a scratch copy of the
//! state: an action is safe if the actor survives it plus a horizon of no-op
//! ticks. Prefers doing nothing, then jumping, then ducking.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::SimulationState;
use super::tick::{Action, tick};
use crate::tuning::Tuning;

/// Seed for the scratch RNG used in rollouts; respawns past the screen edge
/// never matter within the horizon.
const ROLLOUT_SEED: u64 = 0;

/// Rollout-based heuristic policy
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// No-op ticks simulated after the candidate action
    pub horizon: u32,
}

impl Autopilot {
    /// Horizon long enough to see a whole jump land
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            horizon: Self::airtime_ticks(tuning) + 1,
        }
    }

    /// Ticks from take-off until the actor is back on the ground
    pub fn airtime_ticks(tuning: &Tuning) -> u32 {
        // Solve n * impulse + gravity * n(n-1)/2 >= 0 for the smallest n
        let n = 2.0 * -tuning.jump_impulse / tuning.gravity + 1.0;
        n.ceil() as u32
    }

    /// Choose the action for the next tick
    pub fn decide(&self, state: &SimulationState, tuning: &Tuning) -> Action {
        Action::ALL
            .into_iter()
            .find(|&action| self.survives(state, tuning, action))
            .unwrap_or(Action::Noop)
    }

    fn survives(&self, state: &SimulationState, tuning: &Tuning, action: Action) -> bool {
        let mut scratch = state.clone();
        let mut rng = Pcg32::seed_from_u64(ROLLOUT_SEED);

        if tick(&mut scratch, action, tuning, &mut rng).terminal {
            return false;
        }
        (0..self.horizon).all(|_| !tick(&mut scratch, Action::Noop, tuning, &mut rng).terminal)
    }
}
