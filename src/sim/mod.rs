//! Deterministic game core
//!
//! All gameplay logic lives here:
//! - Integer geometry only
//! - Fixed per-frame steps, no wall-clock dependence
//! - Stable actor order (player, then patrollers as spawned)

pub mod actor;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::{Actor, Entity, Patroller, Player};
pub use collision::{ScoringMode, Scoreboard, check_collisions};
pub use rect::Rect;
pub use state::GameState;
pub use tick::{TickInput, TickOutcome, tick};
