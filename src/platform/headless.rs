//! Windowless platform: records presented frames, replays scripted input

use std::collections::VecDeque;

use super::{Display, InputSource, copy_regions};
use crate::error::GameError;
use crate::renderer::Surface;
use crate::sim::{Rect, TickInput};

/// A display that keeps what it was shown
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    /// Contents as the viewer would see them
    pub front: Surface,
    /// Region lists passed to each partial present, in order
    pub presents: Vec<Vec<Rect>>,
    /// Number of whole-screen presents
    pub full_presents: usize,
}

impl HeadlessDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            front: Surface::new(width, height),
            presents: Vec::new(),
            full_presents: 0,
        }
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self, screen: &Surface, regions: &[Rect]) -> Result<(), GameError> {
        copy_regions(&mut self.front, screen, regions);
        self.presents.push(regions.to_vec());
        Ok(())
    }

    fn present_all(&mut self, screen: &Surface) -> Result<(), GameError> {
        copy_regions(&mut self.front, screen, &[screen.rect()]);
        self.full_presents += 1;
        Ok(())
    }
}

/// Plays back a fixed list of inputs, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.script.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Recording display plus scripted input, usable wherever the window is
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    pub display: HeadlessDisplay,
    pub input: ScriptedInput,
}

impl HeadlessPlatform {
    pub fn new(width: i32, height: i32, script: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            display: HeadlessDisplay::new(width, height),
            input: ScriptedInput::new(script),
        }
    }
}

impl Display for HeadlessPlatform {
    fn present(&mut self, screen: &Surface, regions: &[Rect]) -> Result<(), GameError> {
        self.display.present(screen, regions)
    }

    fn present_all(&mut self, screen: &Surface) -> Result<(), GameError> {
        self.display.present_all(screen)
    }
}

impl InputSource for HeadlessPlatform {
    fn poll(&mut self) -> TickInput {
        self.input.poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_present_only_copies_regions() {
        let screen = Surface::filled(20, 20, 9);
        let mut display = HeadlessDisplay::new(20, 20);
        display.present(&screen, &[Rect::new(2, 2, 3, 3)]).unwrap();

        assert_eq!(display.front.get(3, 3), Some(9));
        assert_eq!(display.front.get(6, 6), Some(0));
        assert_eq!(display.presents.len(), 1);

        display.present_all(&screen).unwrap();
        assert_eq!(display.front, screen);
        assert_eq!(display.full_presents, 1);
    }

    #[test]
    fn test_script_ends_with_quit() {
        let step = TickInput {
            left: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::new([step]);
        assert_eq!(input.poll(), step);
        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }
}
