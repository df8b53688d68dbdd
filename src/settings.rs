//! Game settings
//!
//! Read once at startup from `space-spider.json` in the working directory.
//! Every field is optional; anything missing falls back to the defaults.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Rect, ScoringMode};

/// Largest accepted screen width or height
pub const MAX_SCREEN_DIM: i32 = 8192;
/// Largest accepted HUD font upscale
pub const MAX_TEXT_SCALE: i32 = 16;
pub const MAX_FRAMES_PER_SEC: u32 = 1000;

/// Where a patroller starts and which way it walks first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatrollerSpawn {
    /// Top-left corner, `[x, y]`
    pub position: IVec2,
    /// Negative walks left, otherwise right
    #[serde(default = "default_direction")]
    pub direction: i32,
}

fn default_direction() -> i32 {
    1
}

impl PatrollerSpawn {
    pub fn new(x: i32, y: i32, direction: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            direction,
        }
    }
}

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge (once per contact) or level (once per overlapping frame)
    pub scoring_mode: ScoringMode,

    // === Timing / movement ===
    pub frames_per_sec: u32,
    pub player_speed: i32,
    pub patroller_speed: i32,

    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// HUD font upscale factor
    pub text_scale: i32,

    // === Assets ===
    /// Relative paths are tried against the working directory, then the executable's
    pub asset_dir: PathBuf,
    pub background_image: String,
    pub patroller_image: String,
    pub player_image: String,

    /// Pause after quitting (ms)
    pub exit_grace_ms: u64,

    pub patrollers: Vec<PatrollerSpawn>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::Edge,

            frames_per_sec: FRAMES_PER_SEC,
            player_speed: PLAYER_SPEED,
            patroller_speed: BADGUY_SPEED,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            text_scale: 3,

            asset_dir: PathBuf::from("data"),
            background_image: "background.gif".to_string(),
            patroller_image: "megaman spider.gif".to_string(),
            player_image: "small ship.gif".to_string(),

            exit_grace_ms: EXIT_GRACE_MS,

            patrollers: vec![
                PatrollerSpawn::new(100, 150, 1),
                PatrollerSpawn::new(100, 75, -1),
                PatrollerSpawn::new(200, 300, 1),
            ],
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "space-spider.json";

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load from `path`. A missing file is silent; a broken one is logged.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and sanitize a JSON settings document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp values that would break the game's invariants
    pub fn sanitized(mut self) -> Self {
        self.frames_per_sec = self.frames_per_sec.clamp(1, MAX_FRAMES_PER_SEC);
        self.player_speed = self.player_speed.clamp(1, MAX_SCREEN_DIM);
        self.patroller_speed = self.patroller_speed.clamp(1, MAX_SCREEN_DIM);
        self.screen_width = self.screen_width.clamp(1, MAX_SCREEN_DIM);
        self.screen_height = self.screen_height.clamp(1, MAX_SCREEN_DIM);
        self.text_scale = self.text_scale.clamp(1, MAX_TEXT_SCALE);

        // Spawns start on screen; the first update pulls the rest of the sprite in
        let far_corner = IVec2::new(self.screen_width, self.screen_height);
        for spawn in &mut self.patrollers {
            spawn.position = spawn.position.clamp(IVec2::ZERO, far_corner);
        }
        self
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::from_size(self.screen_width, self.screen_height)
    }

    /// Resolve an asset file name against `asset_dir`
    pub fn asset_path(&self, name: &str) -> PathBuf {
        let dir = if self.asset_dir.is_relative() && !self.asset_dir.exists() {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|p| p.join(&self.asset_dir)))
                .filter(|p| p.exists())
                .unwrap_or_else(|| self.asset_dir.clone())
        } else {
            self.asset_dir.clone()
        };
        dir.join(name)
    }
}
