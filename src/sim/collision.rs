//! Player-vs-patroller hit detection and the hit counter
//!
//! Detection is a plain AABB overlap test. Scoring has two policies:
//! edge-triggered (one hit per contact) and level-triggered (one hit per
//! overlapping frame).

use serde::{Deserialize, Serialize};

use super::{Entity, Patroller, Rect};

/// How overlapping frames turn into hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Count once when contact starts; sustained contact is ignored
    #[default]
    Edge,
    /// Count every frame that any overlap exists
    Level,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Edge => "edge",
            ScoringMode::Level => "level",
        }
    }
}

/// Index of the first patroller overlapping `player`, if any
pub fn check_collisions(player: &Rect, patrollers: &[Patroller]) -> Option<usize> {
    patrollers
        .iter()
        .position(|p| player.intersects(&p.rect()))
}

/// Hit counter with the contact latch used by edge-triggered scoring
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub mode: ScoringMode,
    hits: u64,
    /// True while a counted contact is still ongoing (edge mode only)
    latched: bool,
}

impl Scoreboard {
    pub fn new(mode: ScoringMode) -> Self {
        Self {
            mode,
            hits: 0,
            latched: false,
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Apply this frame's collision result; returns true if the count went up
    pub fn register(&mut self, hit: Option<usize>) -> bool {
        match (self.mode, hit) {
            (_, None) => {
                self.latched = false;
                false
            }
            (ScoringMode::Edge, Some(_)) if self.latched => false,
            (ScoringMode::Edge, Some(_)) => {
                self.latched = true;
                self.hits += 1;
                true
            }
            (ScoringMode::Level, Some(_)) => {
                self.hits += 1;
                true
            }
        }
    }
}
