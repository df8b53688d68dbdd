//! Axis-aligned integer rectangles
//!
//! Screen-space geometry for sprites, dirty regions and collision boxes.
//! Coordinates grow right and down; `right()`/`bottom()` are exclusive.

use glam::IVec2;

/// An axis-aligned rectangle with non-negative size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Negative sizes are collapsed to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Rect of the given size at the origin
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Copy moved by `offset`
    pub fn translate(&self, offset: IVec2) -> Self {
        Self {
            x: self.x.saturating_add(offset.x),
            y: self.y.saturating_add(offset.y),
            ..*self
        }
    }

    /// Copy repositioned to lie inside `bounds`, keeping its size.
    ///
    /// Moves the minimum distance on each axis. On an axis where the rect
    /// is larger than `bounds` it is centered instead.
    pub fn clamp(&self, bounds: &Rect) -> Self {
        let x = clamp_axis(self.x, self.width, bounds.x, bounds.width);
        let y = clamp_axis(self.y, self.height, bounds.y, bounds.height);
        Self { x, y, ..*self }
    }

    /// True if `other` lies entirely inside this rect
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// True if `point` is inside this rect
    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Overlap test with positive extent on both axes.
    ///
    /// Rects that merely share an edge, or have zero size, never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Overlapping part of both rects; zero-sized at `self`'s origin when disjoint
    pub fn clip(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Self::new(self.x, self.y, 0, 0);
        }
        Self::new(x, y, right - x, bottom - y)
    }
}

fn clamp_axis(pos: i32, len: i32, bound_pos: i32, bound_len: i32) -> i32 {
    if len >= bound_len {
        bound_pos + bound_len / 2 - len / 2
    } else if pos < bound_pos {
        bound_pos
    } else if pos.saturating_add(len) > bound_pos + bound_len {
        bound_pos + bound_len - len
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 640,
        height: 480,
    };

    #[test]
    fn test_negative_size_collapses() {
        let r = Rect::new(5, 5, -3, 10);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 10);
        assert!(r.is_empty());
    }

    #[test]
    fn test_clamp_shifts_minimum_distance() {
        let r = Rect::new(620, -8, 32, 32).clamp(&SCREEN);
        assert_eq!(r, Rect::new(608, 0, 32, 32));

        let inside = Rect::new(10, 10, 32, 32);
        assert_eq!(inside.clamp(&SCREEN), inside);
    }

    #[test]
    fn test_clamp_oversized_centers() {
        let r = Rect::new(-50, 0, 700, 20).clamp(&SCREEN);
        assert_eq!(r.x, 320 - 350);
        assert_eq!(r.width, 700);
    }

    #[test]
    fn test_contains_edges() {
        assert!(SCREEN.contains(&Rect::new(608, 448, 32, 32)));
        assert!(!SCREEN.contains(&Rect::new(609, 0, 32, 32)));
        assert!(!SCREEN.contains(&Rect::new(-1, 0, 32, 32)));
        assert!(SCREEN.contains(&SCREEN));
    }

    #[test]
    fn test_intersects_shared_edge_is_miss() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
        assert!(!a.intersects(&Rect::new(5, 5, 0, 0)));
    }

    #[test]
    fn test_clip() {
        let a = Rect::new(600, 470, 64, 64);
        assert_eq!(a.clip(&SCREEN), Rect::new(600, 470, 40, 10));
        assert!(Rect::new(700, 0, 10, 10).clip(&SCREEN).is_empty());
    }

    #[test]
    fn test_translate_saturates_at_extremes() {
        let r = Rect::new(i32::MAX - 8, i32::MIN + 2, 32, 32);
        let moved = r.translate(IVec2::new(12, -12));
        assert_eq!(moved.position(), IVec2::new(i32::MAX, i32::MIN));
        assert_eq!(moved.right(), i32::MAX);
        assert!(!SCREEN.contains(&moved));
        assert_eq!(moved.clamp(&SCREEN), Rect::new(608, 0, 32, 32));
    }

    fn any_rect() -> impl Strategy<Value = Rect> {
        (-100..740i32, -100..580i32, 0..200i32, 0..200i32)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in any_rect(), b in any_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn intersects_is_reflexive_for_non_empty(a in any_rect()) {
            prop_assert_eq!(a.intersects(&a), !a.is_empty());
        }

        #[test]
        fn clamp_fits_and_keeps_size(a in any_rect()) {
            let c = a.clamp(&SCREEN);
            prop_assert!(SCREEN.contains(&c));
            prop_assert_eq!((c.width, c.height), (a.width, a.height));
        }

        #[test]
        fn clip_lies_in_both(a in any_rect(), b in any_rect()) {
            let c = a.clip(&b);
            if !c.is_empty() {
                prop_assert!(a.contains(&c));
                prop_assert!(b.contains(&c));
            }
            prop_assert_eq!(c.is_empty(), !a.intersects(&b));
        }
    }
}
