//! Native window backed by minifb
//!
//! minifb only accepts whole framebuffers, so partial presents are applied
//! to a front buffer first and the front buffer is pushed as a whole.

use minifb::{Key, Window, WindowOptions};

use super::{Display, InputSource, copy_regions};
use crate::error::GameError;
use crate::renderer::Surface;
use crate::sim::{Rect, TickInput};

pub struct WindowPlatform {
    window: Window,
    front: Surface,
}

impl WindowPlatform {
    pub fn open(title: &str, width: i32, height: i32) -> Result<Self, GameError> {
        let mut window = Window::new(
            title,
            width.max(1) as usize,
            height.max(1) as usize,
            WindowOptions::default(),
        )
        .map_err(|e| GameError::platform_error(format!("could not open window: {e}")))?;
        // The frame clock does the throttling
        window.set_target_fps(0);

        log::info!("Opened {}x{} window \"{}\"", width, height, title);
        Ok(Self {
            window,
            front: Surface::new(width, height),
        })
    }

    fn push(&mut self) -> Result<(), GameError> {
        self.window
            .update_with_buffer(
                self.front.pixels(),
                self.front.width() as usize,
                self.front.height() as usize,
            )
            .map_err(|e| GameError::platform_error(format!("present failed: {e}")))
    }
}

impl Display for WindowPlatform {
    fn present(&mut self, screen: &Surface, regions: &[Rect]) -> Result<(), GameError> {
        copy_regions(&mut self.front, screen, regions);
        self.push()
    }

    fn present_all(&mut self, screen: &Surface) -> Result<(), GameError> {
        copy_regions(&mut self.front, screen, &[screen.rect()]);
        self.push()
    }
}

impl InputSource for WindowPlatform {
    fn poll(&mut self) -> TickInput {
        let w = &self.window;
        TickInput {
            up: w.is_key_down(Key::Up),
            down: w.is_key_down(Key::Down),
            left: w.is_key_down(Key::Left),
            right: w.is_key_down(Key::Right),
            quit: !w.is_open() || w.is_key_down(Key::Escape),
        }
    }
}
