//! Space Spider - a tiny dodge-the-spiders arcade game
//!
//! Core modules:
//! - `sim`: Actors, rect geometry, collision and scoring, the per-frame tick
//! - `renderer`: Software surfaces, dirty-region tracking, HUD text
//! - `platform`: Display/input/clock collaborators (window + headless)
//! - `assets`: Sprite loading and the asset bundle
//! - `game`: The frame loop tying everything together

pub mod assets;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::{Game, RunSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame rate cap for the main loop
    pub const FRAMES_PER_SEC: u32 = 40;
    /// Player movement per tick, per axis
    pub const PLAYER_SPEED: i32 = 12;
    /// Patroller horizontal movement per tick
    pub const BADGUY_SPEED: i32 = 12;

    /// Screen dimensions (logical pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Gap between the player's bottom edge and the screen bottom at spawn
    pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

    /// Pause after the loop exits, before the process ends
    pub const EXIT_GRACE_MS: u64 = 50;

    pub const WINDOW_TITLE: &str = "Space Spider";

    /// HUD text color (0x00RRGGBB)
    pub const HUD_TEXT_COLOR: u32 = 0x00C8_C8C8;
}
