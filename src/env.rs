//! Reinforcement-learning environment contract
//!
//! [`DinoEnv`] owns the simulation state and its RNG and exposes the
//! reset/step interface used by trainers, renderers and human-input loops:
//!
//! ```
//! use dino_runner::DinoEnv;
//!
//! let mut env = DinoEnv::new();
//! let (obs, _info) = env.reset(Some(42));
//! assert_eq!(obs.score(), 0.0);
//!
//! let step = env.step(1).unwrap(); // jump
//! assert!(!step.terminal);
//! assert_eq!(step.reward, 1.0);
//! ```

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{EnvError, NotResetCause};
use crate::sim::{Action, SimulationState, respawn_offset, tick};
use crate::tuning::Tuning;

/// Length of the observation vector
pub const OBSERVATION_SIZE: usize = 7;

/// Number of discrete actions
pub const ACTION_COUNT: usize = Action::ALL.len();

/// Observation vector:
/// `[actor_y, actor_ducking, ground_hazard_1_x, ground_hazard_2_x,
///   aerial_hazard_x, aerial_hazard_direction, score]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f32; OBSERVATION_SIZE]);

impl Observation {
    pub fn from_state(state: &SimulationState) -> Self {
        Self([
            state.actor_y,
            if state.actor_ducking { 1.0 } else { 0.0 },
            state.ground_hazard_1_x,
            state.ground_hazard_2_x,
            state.aerial_hazard_x,
            state.aerial_hazard_direction as f32,
            state.score as f32,
        ])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn actor_y(&self) -> f32 {
        self.0[0]
    }

    pub fn actor_ducking(&self) -> bool {
        self.0[1] != 0.0
    }

    pub fn ground_hazard_1_x(&self) -> f32 {
        self.0[2]
    }

    pub fn ground_hazard_2_x(&self) -> f32 {
        self.0[3]
    }

    pub fn aerial_hazard_x(&self) -> f32 {
        self.0[4]
    }

    pub fn aerial_hazard_direction(&self) -> f32 {
        self.0[5]
    }

    pub fn score(&self) -> f32 {
        self.0[6]
    }
}

/// Totals for a finished episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Sum of rewards, including the terminal penalty
    pub reward: f32,
    /// Ticks played
    pub length: u64,
    /// Final game score
    pub score: f64,
}

/// Auxiliary information returned alongside observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Set only on the tick that ends an episode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<EpisodeSummary>,
}

impl StepInfo {
    pub fn is_empty(&self) -> bool {
        self.episode.is_none()
    }
}

/// Result of a single `step`
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    /// The actor collided; `reset` before stepping again
    pub terminal: bool,
    /// Always false: episode time limits belong to the caller
    pub truncated: bool,
    pub info: StepInfo,
}

/// Lifecycle of the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    /// Created but never reset
    Unstarted,
    /// Episode in progress
    Ready,
    /// Last tick collided
    Terminal,
}

/// The game as a reset/step environment
#[derive(Debug, Clone)]
pub struct DinoEnv<R = Pcg32> {
    tuning: Tuning,
    rng: R,
    /// Whether `rng` holds a stream worth continuing on a seedless reset
    rng_ready: bool,
    seed: Option<u64>,
    state: SimulationState,
    phase: EpisodePhase,
    episode_reward: f32,
}

impl DinoEnv<Pcg32> {
    /// Environment with the default tuning
    pub fn new() -> Self {
        let tuning = Tuning::default();
        Self::build(tuning, Pcg32::seed_from_u64(0), false)
    }

    /// Environment with validated custom tuning
    pub fn with_tuning(tuning: Tuning) -> Result<Self, EnvError> {
        tuning.validate()?;
        Ok(Self::build(tuning, Pcg32::seed_from_u64(0), false))
    }
}

impl Default for DinoEnv<Pcg32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + SeedableRng> DinoEnv<R> {
    /// Environment driven by a caller-supplied RNG
    ///
    /// A seedless `reset` continues this generator's stream; `reset(Some(_))`
    /// replaces it with `R::seed_from_u64`.
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, EnvError> {
        tuning.validate()?;
        Ok(Self::build(tuning, rng, true))
    }

    fn build(tuning: Tuning, rng: R, rng_ready: bool) -> Self {
        let state = SimulationState::new(&tuning, tuning.respawn_offset_min as f32);
        Self {
            tuning,
            rng,
            rng_ready,
            seed: None,
            state,
            phase: EpisodePhase::Unstarted,
            episode_reward: 0.0,
        }
    }

    /// Start a new episode
    ///
    /// With a seed the episode is fully reproducible. Without one the RNG
    /// stream continues; a never-seeded environment seeds itself from OS
    /// entropy and records the seed (see [`DinoEnv::seed`]).
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        match seed {
            Some(seed) => self.reseed(seed),
            None if !self.rng_ready => {
                let seed = rand::rng().random::<u64>();
                self.reseed(seed);
            }
            None => {}
        }

        let offset = respawn_offset(&mut self.rng, &self.tuning);
        self.state = SimulationState::new(&self.tuning, offset);
        self.phase = EpisodePhase::Ready;
        self.episode_reward = 0.0;

        log::debug!(
            "reset: seed={:?} ground_hazard_2_x={}",
            self.seed,
            self.state.ground_hazard_2_x
        );

        (self.observation(), StepInfo::default())
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
        self.rng_ready = true;
        self.seed = Some(seed);
    }

    /// Advance one tick with a raw action index (0 = no-op, 1 = jump, 2 = duck)
    pub fn step(&mut self, action: i64) -> Result<Step, EnvError> {
        self.ensure_ready()?;
        let action = Action::try_from(action).inspect_err(|err| log::warn!("{err}"))?;
        self.step_action(action)
    }

    /// Advance one tick with a typed action
    pub fn step_action(&mut self, action: Action) -> Result<Step, EnvError> {
        self.ensure_ready()?;

        let outcome = tick(&mut self.state, action, &self.tuning, &mut self.rng);
        self.episode_reward += outcome.reward;

        let mut info = StepInfo::default();
        if outcome.terminal {
            self.phase = EpisodePhase::Terminal;
            let summary = EpisodeSummary {
                reward: self.episode_reward,
                length: self.state.ticks,
                score: self.state.score,
            };
            log::info!(
                "episode over: {} ticks, score {:.1}, reward {} ({})",
                summary.length,
                summary.score,
                summary.reward,
                if outcome.collision.ground {
                    "ground hazard"
                } else {
                    "aerial hazard"
                }
            );
            info.episode = Some(summary);
        }

        Ok(Step {
            observation: self.observation(),
            reward: outcome.reward,
            terminal: outcome.terminal,
            truncated: false,
            info,
        })
    }

    fn ensure_ready(&self) -> Result<(), EnvError> {
        let cause = match self.phase {
            EpisodePhase::Ready => return Ok(()),
            EpisodePhase::Unstarted => NotResetCause::NeverReset,
            EpisodePhase::Terminal => NotResetCause::EpisodeTerminated,
        };
        log::warn!("step rejected: {cause}");
        Err(EnvError::NotReset(cause))
    }

    /// Release the environment; the simulation holds no external resources
    pub fn close(self) {
        log::debug!("environment closed after seed {:?}", self.seed);
    }

    /// Observation of the current state
    pub fn observation(&self) -> Observation {
        Observation::from_state(&self.state)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access for scripted scenarios (forcing hazard positions)
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Seed of the current RNG stream, if one was set or drawn
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sum of rewards so far in this episode
    pub fn episode_reward(&self) -> f32 {
        self.episode_reward
    }

    pub fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    pub fn observation_size(&self) -> usize {
        OBSERVATION_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ready_env(seed: u64) -> DinoEnv {
        let mut env = DinoEnv::new();
        env.reset(Some(seed));
        env
    }

    #[test]
    fn test_reset_observation() {
        let mut env = DinoEnv::new();
        let (obs, info) = env.reset(Some(42));
        assert!(info.is_empty());
        assert_eq!(obs.actor_y(), 260.0);
        assert!(!obs.actor_ducking());
        assert_eq!(obs.ground_hazard_1_x(), 800.0);
        assert!((1200.0..=1400.0).contains(&obs.ground_hazard_2_x()));
        assert_eq!(obs.aerial_hazard_x(), 400.0);
        assert_eq!(obs.aerial_hazard_direction(), 1.0);
        assert_eq!(obs.score(), 0.0);
        assert_eq!(obs.as_slice().len(), OBSERVATION_SIZE);
        assert_eq!(env.phase(), EpisodePhase::Ready);
        assert_eq!(env.seed(), Some(42));
    }

    #[test]
    fn test_step_before_reset() {
        let mut env = DinoEnv::new();
        assert!(matches!(
            env.step(0),
            Err(EnvError::NotReset(NotResetCause::NeverReset))
        ));
        assert_eq!(env.phase(), EpisodePhase::Unstarted);
    }

    #[test]
    fn test_invalid_action_leaves_state_untouched() {
        let mut env = ready_env(1);
        env.step(1).unwrap();
        let before = env.state().clone();

        assert!(matches!(env.step(3), Err(EnvError::InvalidAction(3))));
        assert!(matches!(env.step(-1), Err(EnvError::InvalidAction(-1))));
        assert_eq!(env.state(), &before);
        assert_eq!(env.phase(), EpisodePhase::Ready);

        // Still playable afterwards
        assert!(env.step(0).is_ok());
    }

    #[test]
    fn test_fifty_noops_from_seed_42() {
        let mut env = ready_env(42);
        for _ in 0..50 {
            let step = env.step(0).unwrap();
            assert!(!step.terminal);
            assert!(!step.truncated);
            assert_eq!(step.reward, 1.0);
            assert!(step.info.is_empty());
        }
        let expected = 50.0 * env.tuning().score_increment;
        assert!((env.state().score - expected).abs() < 1e-9);
        assert_eq!(env.state().ticks, 50);
    }

    #[test]
    fn test_forced_ground_collision() {
        let mut env = ready_env(42);
        env.state_mut().ground_hazard_1_x = 70.0;

        let step = env.step(0).unwrap();
        assert!(step.terminal);
        assert_eq!(step.reward, -100.0);
        assert_eq!(env.phase(), EpisodePhase::Terminal);

        let summary = step.info.episode.unwrap();
        assert_eq!(summary.length, 1);
        assert_eq!(summary.reward, -100.0);
        assert_eq!(summary.score, env.tuning().score_increment);
    }

    #[test]
    fn test_step_after_terminal_requires_reset() {
        let mut env = ready_env(42);
        env.state_mut().ground_hazard_1_x = 70.0;
        assert!(env.step(0).unwrap().terminal);

        let frozen = env.state().clone();
        assert!(matches!(
            env.step(0),
            Err(EnvError::NotReset(NotResetCause::EpisodeTerminated))
        ));
        assert_eq!(env.state(), &frozen);

        let (obs, _) = env.reset(None);
        assert_eq!(obs.score(), 0.0);
        assert!(!env.step(0).unwrap().terminal);
    }

    #[test]
    fn test_noop_episode_ends_on_first_ground_hazard() {
        let mut env = ready_env(3);
        let mut ticks = 0;
        let summary = loop {
            let step = env.step(0).unwrap();
            ticks += 1;
            if step.terminal {
                break step.info.episode.unwrap();
            }
        };
        // Hazard 1 scrolls from x=800 into the actor's right edge at x=90
        assert_eq!(ticks, 178);
        assert_eq!(summary.length, 178);
        assert_eq!(summary.reward, 177.0 - 100.0);
    }

    #[test]
    fn test_jump_arc_through_env() {
        let mut env = ready_env(9);
        let rest = env.tuning().actor_rest_y();
        env.step(1).unwrap();
        assert!(env.state().is_jumping);

        let mut prev = env.state().actor_y;
        let mut rising = true;
        let mut ticks = 1;
        while env.state().is_jumping {
            env.step(0).unwrap();
            let y = env.state().actor_y;
            if rising && y > prev {
                rising = false;
            }
            if !rising {
                assert!(y >= prev, "actor rose again while falling");
            }
            prev = y;
            ticks += 1;
        }
        assert!(!rising);
        assert_eq!(ticks, 33);
        assert_eq!(env.state().actor_y, rest);
    }

    #[test]
    fn test_seedless_reset_draws_seed() {
        let mut env = DinoEnv::new();
        env.reset(None);
        assert!(env.seed().is_some());
    }

    #[test]
    fn test_injected_rng_is_used_without_seed() {
        let tuning = Tuning::default();
        let mut a = DinoEnv::with_rng(tuning.clone(), Pcg32::seed_from_u64(5)).unwrap();
        let mut b = DinoEnv::with_rng(tuning, Pcg32::seed_from_u64(5)).unwrap();
        assert_eq!(a.reset(None).0, b.reset(None).0);
        assert_eq!(a.seed(), None);
    }

    #[test]
    fn test_hazard_2_respawn_offsets() {
        let mut env = DinoEnv::new();
        let width = env.tuning().screen_width;
        let mut offsets = Vec::new();
        for seed in 0..300 {
            env.reset(Some(seed));
            env.state_mut().ground_hazard_2_x = 1.0;
            env.step(0).unwrap();
            offsets.push(env.state().ground_hazard_2_x - width);
        }
        assert!(offsets.iter().all(|o| (400.0..=600.0).contains(o)));
        let distinct = {
            let mut v: Vec<i32> = offsets.iter().map(|&o| o as i32).collect();
            v.sort_unstable();
            v.dedup();
            v.len()
        };
        assert!(distinct > 100, "only {distinct} distinct offsets");
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            DinoEnv::with_tuning(tuning),
            Err(EnvError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_info_serializes_empty() {
        let json = serde_json::to_string(&StepInfo::default()).unwrap();
        assert_eq!(json, "{}");
    }

    fn run(seed: u64, actions: &[i64]) -> Vec<(Observation, f32, bool)> {
        let mut env = ready_env(seed);
        let mut trace = Vec::new();
        for &action in actions {
            let step = env.step(action).unwrap();
            trace.push((step.observation, step.reward, step.terminal));
            if step.terminal {
                let (obs, _) = env.reset(None);
                trace.push((obs, 0.0, false));
            }
        }
        trace
    }

    proptest! {
        #[test]
        fn prop_deterministic(seed in any::<u64>(), actions in prop::collection::vec(0i64..3, 1..600)) {
            prop_assert_eq!(run(seed, &actions), run(seed, &actions));
        }

        #[test]
        fn prop_state_invariants(seed in any::<u64>(), actions in prop::collection::vec(0i64..3, 1..600)) {
            let mut env = ready_env(seed);
            let tuning = env.tuning().clone();
            let rest = tuning.actor_rest_y();
            let mut last_score = env.state().score;

            for action in actions {
                let step = env.step(action).unwrap();
                let state = env.state();

                prop_assert!(!(state.actor_ducking && state.is_jumping));
                prop_assert!(state.actor_y <= rest);
                prop_assert_eq!(!state.is_jumping, state.actor_y == rest && state.actor_velocity_y >= 0.0);
                if !state.is_jumping {
                    prop_assert_eq!(state.actor_velocity_y, 0.0);
                }

                for x in [state.ground_hazard_1_x, state.ground_hazard_2_x] {
                    prop_assert!(x >= -tuning.ground_hazard_width && x <= tuning.max_hazard_x());
                }
                prop_assert!(state.aerial_hazard_x >= -tuning.aerial_hazard_width);
                prop_assert!(state.aerial_hazard_x <= tuning.max_hazard_x());

                prop_assert!(state.score > last_score);
                prop_assert!((state.score - last_score - tuning.score_increment).abs() < 1e-9);
                last_score = state.score;

                prop_assert_eq!(step.terminal, step.reward == -100.0);
                prop_assert_eq!(!step.terminal, step.reward == 1.0);
                prop_assert!(!step.truncated);

                if step.terminal {
                    env.reset(None);
                    last_score = env.state().score;
                }
            }
        }
    }
}
