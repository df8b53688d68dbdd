//! Game state owned by the frame loop

use super::{Entity, Patroller, Player, Rect, ScoringMode, Scoreboard};
use crate::renderer::{DirtyRegions, Surface};

/// Everything that changes from frame to frame
#[derive(Debug, Clone)]
pub struct GameState {
    /// Screen bounds every actor is kept inside
    pub bounds: Rect,
    pub player: Player,
    /// Drawn and hit-tested in this order
    pub patrollers: Vec<Patroller>,
    pub scoreboard: Scoreboard,
    /// Regions touched since the last present
    pub dirty: DirtyRegions,
    /// Frames simulated so far
    pub frame: u64,
}

/// Player first, then patrollers in list order
fn ordered<'a>(
    player: &'a Player,
    patrollers: &'a [Patroller],
) -> impl Iterator<Item = &'a dyn Entity> {
    std::iter::once(player as &dyn Entity).chain(patrollers.iter().map(|p| p as &dyn Entity))
}

impl GameState {
    pub fn new(
        bounds: Rect,
        player: Player,
        patrollers: Vec<Patroller>,
        mode: ScoringMode,
    ) -> Self {
        Self {
            bounds,
            player,
            patrollers,
            scoreboard: Scoreboard::new(mode),
            dirty: DirtyRegions::new(),
            frame: 0,
        }
    }

    pub fn hits(&self) -> u64 {
        self.scoreboard.hits()
    }

    /// All actors in draw order
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        ordered(&self.player, &self.patrollers)
    }

    /// Restore the background under every actor, recording the regions
    pub fn erase_all(&mut self, screen: &mut Surface, background: &Surface) {
        for entity in ordered(&self.player, &self.patrollers) {
            self.dirty.push(entity.erase(screen, background));
        }
    }

    /// Run one autonomous update on every actor
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        self.player.update(&bounds);
        for patroller in &mut self.patrollers {
            patroller.update(&bounds);
        }
    }

    /// Draw every actor, recording the regions
    pub fn draw_all(&mut self, screen: &mut Surface) {
        for entity in ordered(&self.player, &self.patrollers) {
            self.dirty.push(entity.draw(screen));
        }
    }
}
