//! HUD text rendering
//!
//! Text is drawn with an embedded monospace font into a color-keyed
//! surface, so blitting it composites only the glyph pixels.

use std::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use super::Surface;

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl DrawTarget for Surface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point.x, point.y, pack_rgb(color));
        }
        Ok(())
    }
}

#[inline]
fn pack_rgb(color: Rgb888) -> u32 {
    (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b())
}

#[inline]
fn unpack_rgb(color: u32) -> Rgb888 {
    Rgb888::new((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Label shown in the HUD for a hit count
pub fn hits_label(hits: u64) -> String {
    format!("Hits: {hits}")
}

/// Renders single-line text to color-keyed surfaces
#[derive(Debug, Clone)]
pub struct TextRenderer {
    color: u32,
    /// Integer upscale applied to the 10x20 font
    scale: i32,
}

impl TextRenderer {
    pub fn new(color: u32, scale: i32) -> Self {
        Self {
            color: color & 0x00FF_FFFF,
            scale: scale.max(1),
        }
    }

    pub fn render(&self, text: &str) -> Surface {
        let style = MonoTextStyle::new(&FONT_10X20, unpack_rgb(self.color));
        let text = Text::with_baseline(text, Point::zero(), style, Baseline::Top);
        let bounds = text.bounding_box();

        // Any color other than the text color works as the key
        let key = if self.color == 0 { 0x00FF_00FF } else { 0 };
        let mut glyphs = Surface::filled(
            bounds.size.width as i32,
            bounds.size.height as i32,
            key,
        );
        glyphs.set_color_key(Some(key));
        let Ok(_) = text.draw(&mut glyphs);

        glyphs.scaled(self.scale)
    }
}
