//! Software pixel surfaces
//!
//! Every image in the game (sprites, background, screen) is a `Surface`:
//! a row-major `u32` buffer in 0x00RRGGBB with an optional color key.
//! Blitting skips color-keyed pixels and clips to the destination.

use glam::IVec2;

use crate::sim::Rect;

/// A row-major 0x00RRGGBB pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
    /// Pixels of this color are skipped when this surface is blitted
    color_key: Option<u32>,
}

impl Surface {
    /// Black surface of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: i32, height: i32, color: u32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
            color_key: None,
        }
    }

    /// Wrap an existing buffer; short buffers are padded with black, long ones truncated
    pub fn from_pixels(width: i32, height: i32, mut pixels: Vec<u32>) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        pixels.resize(width as usize * height as usize, 0);
        Self {
            width,
            height,
            pixels,
            color_key: None,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bounds at the origin
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn color_key(&self) -> Option<u32> {
        self.color_key
    }

    pub fn set_color_key(&mut self, key: Option<u32>) {
        self.color_key = key;
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.rect()
            .contains_point(IVec2::new(x, y))
            .then(|| self.pixels[self.index(x, y)])
    }

    /// Out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if self.rect().contains_point(IVec2::new(x, y)) {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Copy `area` of `src` (all of it when `None`) so its top-left lands on `dest`.
    ///
    /// The copy is clipped to both surfaces; color-keyed source pixels are
    /// left untouched. Returns the destination region actually covered.
    pub fn blit(&mut self, src: &Surface, dest: IVec2, area: Option<Rect>) -> Rect {
        let requested = area.unwrap_or_else(|| src.rect());
        let src_area = requested.clip(&src.rect());
        let placed = Rect::new(
            dest.x + (src_area.x - requested.x),
            dest.y + (src_area.y - requested.y),
            src_area.width,
            src_area.height,
        );
        let target = placed.clip(&self.rect());
        if target.is_empty() {
            return Rect::new(dest.x, dest.y, 0, 0);
        }

        let sx0 = src_area.x + (target.x - placed.x);
        let span = target.width as usize;
        for ty in target.y..target.bottom() {
            let sy = src_area.y + (ty - placed.y);
            let from = src.index(sx0, sy);
            let to = self.index(target.x, ty);
            let src_row = &src.pixels[from..from + span];
            let dst_row = &mut self.pixels[to..to + span];
            match src.color_key {
                None => dst_row.copy_from_slice(src_row),
                Some(key) => {
                    for (d, &s) in dst_row.iter_mut().zip(src_row) {
                        if s != key {
                            *d = s;
                        }
                    }
                }
            }
        }
        target
    }

    /// Pixels inside `rect` (clipped to this surface), row by row
    pub fn region(&self, rect: &Rect) -> Vec<u32> {
        let r = rect.clip(&self.rect());
        let mut out = Vec::with_capacity((r.width * r.height) as usize);
        for y in r.y..r.bottom() {
            let from = self.index(r.x, y);
            out.extend_from_slice(&self.pixels[from..from + r.width as usize]);
        }
        out
    }

    /// Nearest-neighbour upscale by an integer factor; keeps the color key
    pub fn scaled(&self, factor: i32) -> Surface {
        let factor = factor.max(1);
        let mut out = Surface::new(self.width * factor, self.height * factor);
        out.color_key = self.color_key;
        for y in 0..out.height {
            for x in 0..out.width {
                let i = out.index(x, y);
                out.pixels[i] = self.pixels[self.index(x / factor, y / factor)];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: i32, h: i32) -> Surface {
        let pixels = (0..w * h).map(|i| if i % 2 == 0 { 0x00FF_0000 } else { 0x0000_FF00 });
        Surface::from_pixels(w, h, pixels.collect())
    }

    #[test]
    fn test_blit_returns_clipped_rect() {
        let mut screen = Surface::new(100, 100);
        let sprite = Surface::filled(20, 20, 0x00AB_CDEF);

        let r = screen.blit(&sprite, IVec2::new(90, -5), None);
        assert_eq!(r, Rect::new(90, 0, 10, 15));
        assert_eq!(screen.get(95, 0), Some(0x00AB_CDEF));
        assert_eq!(screen.get(89, 0), Some(0));
    }

    #[test]
    fn test_blit_fully_outside_is_empty() {
        let mut screen = Surface::new(100, 100);
        let sprite = Surface::filled(20, 20, 1);
        let r = screen.blit(&sprite, IVec2::new(200, 200), None);
        assert!(r.is_empty());
        assert!(screen.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_color_key_skips_pixels() {
        let mut sprite = Surface::filled(4, 4, 0x0000_00FF);
        sprite.set(1, 1, 0x00FF_FFFF);
        sprite.set_color_key(Some(0x0000_00FF));

        let mut screen = Surface::filled(10, 10, 0x0012_3456);
        screen.blit(&sprite, IVec2::new(2, 2), None);
        assert_eq!(screen.get(3, 3), Some(0x00FF_FFFF));
        assert_eq!(screen.get(2, 2), Some(0x0012_3456));
    }

    #[test]
    fn test_blit_area_copies_same_region() {
        let background = checker(50, 50);
        let mut screen = Surface::filled(50, 50, 7);
        let area = Rect::new(10, 12, 8, 6);

        let r = screen.blit(&background, area.position(), Some(area));
        assert_eq!(r, area);
        assert_eq!(screen.region(&area), background.region(&area));
        assert_eq!(screen.get(9, 12), Some(7));
    }

    #[test]
    fn test_scaled() {
        let mut s = Surface::new(2, 1);
        s.set(1, 0, 5);
        s.set_color_key(Some(0));
        let big = s.scaled(3);
        assert_eq!((big.width(), big.height()), (6, 3));
        assert_eq!(big.get(2, 2), Some(0));
        assert_eq!(big.get(3, 2), Some(5));
        assert_eq!(big.color_key(), Some(0));
    }
}
