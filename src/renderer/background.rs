//! Static background composite
//!
//! The background is the tile image repeated across the top of the screen
//! with the hit counter centered over it. Erasing an actor copies from here.

use glam::IVec2;

use super::{Surface, TextRenderer, hits_label};
use crate::sim::Rect;

/// Build a screen-sized background showing `hits`
pub fn compose_background(
    screen: Rect,
    tile: &Surface,
    text: &TextRenderer,
    hits: u64,
) -> Surface {
    let mut background = Surface::new(screen.width, screen.height);
    redraw_background(&mut background, tile, text, hits);
    background
}

/// Re-tile `background` and stamp the current hit count; returns the label's rect
pub fn redraw_background(
    background: &mut Surface,
    tile: &Surface,
    text: &TextRenderer,
    hits: u64,
) -> Rect {
    background.fill(0);
    if tile.width() > 0 {
        for x in (0..background.width()).step_by(tile.width() as usize) {
            background.blit(tile, IVec2::new(x, 0), None);
        }
    }

    let label = text.render(&hits_label(hits));
    let x = background.rect().center_x() - label.width() / 2;
    background.blit(&label, IVec2::new(x, 0), None)
}
