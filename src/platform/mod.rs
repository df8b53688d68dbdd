//! Platform collaborators
//!
//! The frame loop only talks to these traits:
//! - `Display`: push the screen surface (all of it or just dirty regions)
//! - `InputSource`: non-blocking keyboard/quit poll, once per frame
//! - `FrameClock`: cap the loop at a fixed frame rate
//!
//! `window` backs them with a real window; `headless` records frames and
//! replays scripted input for tests and offline runs.

pub mod clock;
pub mod headless;
pub mod window;

use std::time::Duration;

use crate::error::GameError;
use crate::renderer::Surface;
use crate::sim::{Rect, TickInput};

pub use clock::{FixedClock, SleepClock};
pub use headless::{HeadlessDisplay, HeadlessPlatform, ScriptedInput};
pub use window::WindowPlatform;

/// Where finished frames go
pub trait Display {
    /// Refresh only `regions` from `screen`. Called once per frame; `regions` may be empty.
    fn present(&mut self, screen: &Surface, regions: &[Rect]) -> Result<(), GameError>;

    /// Refresh the whole screen
    fn present_all(&mut self, screen: &Surface) -> Result<(), GameError>;
}

/// Keyboard and quit state, polled without blocking
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Frame-rate throttle
pub trait FrameClock {
    /// Block until at least 1/`fps` has passed since the previous call;
    /// returns the time since that call.
    fn tick(&mut self, fps: u32) -> Duration;
}

/// Copy `regions` of `screen` into a front buffer of the same size
fn copy_regions(front: &mut Surface, screen: &Surface, regions: &[Rect]) {
    for region in regions {
        front.blit(screen, region.position(), Some(*region));
    }
}
