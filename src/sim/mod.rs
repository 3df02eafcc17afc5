//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Caller-supplied RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod hitbox;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionResult, check_collisions};
pub use hitbox::Hitbox;
pub use state::SimulationState;
pub use tick::{Action, TickOutcome, respawn_offset, tick};
