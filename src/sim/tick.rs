//! One simulation frame
//!
//! Erase every actor, advance them, steer the player, then test for hits.
//! Drawing and presenting are left to the caller so a score change can
//! rebuild the background in between.

use glam::IVec2;

use super::collision::check_collisions;
use super::{Entity, GameState};
use crate::renderer::Surface;

/// Input state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Escape or window close
    pub quit: bool,
}

impl TickInput {
    /// Opposed keys cancel: (right - left, down - up)
    pub fn direction(&self) -> IVec2 {
        IVec2::new(
            i32::from(self.right) - i32::from(self.left),
            i32::from(self.down) - i32::from(self.up),
        )
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// First patroller overlapping the player
    pub hit: Option<usize>,
    /// The hit counter went up this frame
    pub scored: bool,
}

/// Advance the game by one frame, up to (not including) the draw step
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    screen: &mut Surface,
    background: &Surface,
) -> TickOutcome {
    state.erase_all(screen, background);
    state.advance();

    let bounds = state.bounds;
    state.player.move_by(input.direction(), &bounds);

    let hit = check_collisions(&state.player.rect(), &state.patrollers);
    let scored = state.scoreboard.register(hit);
    if scored {
        log::info!("Hit #{} on frame {}", state.hits(), state.frame);
    }

    state.frame += 1;
    TickOutcome { hit, scored }
}
