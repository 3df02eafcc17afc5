//! Dino Runner - a side-scrolling obstacle-avoidance game as an RL environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, hazards, collisions, scoring)
//! - `env`: Reset/step environment contract built on the simulation
//! - `tuning`: Data-driven game balance
//! - `scene`: Plain-data view of the state for renderers
//! - `input`: Key to action mapping for human play

pub mod env;
pub mod error;
pub mod highscores;
pub mod input;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use env::{DinoEnv, EpisodePhase, EpisodeSummary, Observation, Step, StepInfo};
pub use error::{EnvError, NotResetCause};
pub use highscores::HighScores;
pub use sim::Action;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Y coordinate of the ground line (screen space, y grows downward)
    pub const GROUND_Y: f32 = 300.0;

    /// Actor defaults - fixed horizontal position, only moves vertically
    pub const ACTOR_LEFT: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    pub const ACTOR_DUCK_HEIGHT: f32 = 20.0;

    /// Ground hazards sit on the ground line
    pub const GROUND_HAZARD_WIDTH: f32 = 20.0;
    pub const GROUND_HAZARD_HEIGHT: f32 = 40.0;
    pub const GROUND_HAZARD_SPEED: f32 = 4.0;

    /// Aerial hazard flies at a fixed height above the ground
    pub const AERIAL_HAZARD_WIDTH: f32 = 30.0;
    pub const AERIAL_HAZARD_HEIGHT: f32 = 20.0;
    pub const AERIAL_HAZARD_Y: f32 = GROUND_Y - 100.0;
    pub const AERIAL_HAZARD_SPEED: f32 = 5.0;

    /// Upward velocity applied on jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -16.0;
    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 1.0;

    /// Extra distance past the right edge for the second ground hazard
    pub const RESPAWN_OFFSET_MIN: u32 = 400;
    pub const RESPAWN_OFFSET_MAX: u32 = 600;

    /// Score added every tick (8 points per second at 90 ticks per second)
    pub const SCORE_INCREMENT: f64 = 8.0 / 90.0;

    /// Reward for surviving a tick
    pub const REWARD_ALIVE: f32 = 1.0;
    /// Reward for the tick that ends the episode
    pub const REWARD_COLLISION: f32 = -100.0;
}
