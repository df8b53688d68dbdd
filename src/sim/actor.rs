//! On-screen actors: the player's ship and the patrolling spiders
//!
//! Every actor is a shared sprite plus a screen rect. The frame loop drives
//! them through the `Entity` interface in a fixed order.

use std::rc::Rc;

use glam::IVec2;

use super::Rect;
use crate::consts::PLAYER_BOTTOM_MARGIN;
use crate::renderer::Surface;

/// A sprite placed on the screen
#[derive(Debug, Clone)]
pub struct Actor {
    image: Rc<Surface>,
    pub rect: Rect,
}

impl Actor {
    /// Actor at the origin, sized to its image
    pub fn new(image: Rc<Surface>) -> Self {
        let rect = image.rect();
        Self { image, rect }
    }

    /// Composite the sprite onto `target`; returns the touched region
    pub fn draw(&self, target: &mut Surface) -> Rect {
        target.blit(&self.image, self.rect.position(), None)
    }

    /// Restore `background` under the current rect; returns the touched region
    pub fn erase(&self, target: &mut Surface, background: &Surface) -> Rect {
        target.blit(background, self.rect.position(), Some(self.rect))
    }
}

/// Per-frame contract shared by everything the loop draws
pub trait Entity {
    fn actor(&self) -> &Actor;

    /// Advance one tick. Nothing happens unless the actor moves on its own.
    fn update(&mut self, _bounds: &Rect) {}

    fn rect(&self) -> Rect {
        self.actor().rect
    }

    fn draw(&self, target: &mut Surface) -> Rect {
        self.actor().draw(target)
    }

    fn erase(&self, target: &mut Surface, background: &Surface) -> Rect {
        self.actor().erase(target, background)
    }
}

/// The player's ship, steered by the arrow keys
#[derive(Debug, Clone)]
pub struct Player {
    pub actor: Actor,
    speed: i32,
}

impl Player {
    /// Spawn horizontally centered, just above the bottom edge of `bounds`
    pub fn new(image: Rc<Surface>, bounds: &Rect, speed: i32) -> Self {
        let mut actor = Actor::new(image);
        actor.rect.x = bounds.center_x() - actor.rect.width / 2;
        actor.rect.y = bounds.bottom() - PLAYER_BOTTOM_MARGIN - actor.rect.height;
        Self { actor, speed }
    }

    /// Step `speed` units along `direction` (each axis -1, 0 or 1), stopping at the bounds
    pub fn move_by(&mut self, direction: IVec2, bounds: &Rect) {
        let step = direction.signum() * self.speed;
        self.actor.rect = self.actor.rect.translate(step).clamp(bounds);
    }
}

impl Entity for Player {
    fn actor(&self) -> &Actor {
        &self.actor
    }
}

/// A spider that walks left and right, turning at the screen edges
#[derive(Debug, Clone)]
pub struct Patroller {
    pub actor: Actor,
    /// Signed horizontal velocity (±speed)
    facing: i32,
}

impl Patroller {
    /// `direction` < 0 starts walking left, anything else walks right
    pub fn new(image: Rc<Surface>, start: IVec2, direction: i32, speed: i32) -> Self {
        let mut actor = Actor::new(image);
        actor.rect.x = start.x;
        actor.rect.y = start.y;
        let facing = if direction < 0 { -speed } else { speed };
        Self { actor, facing }
    }

    pub fn facing(&self) -> i32 {
        self.facing
    }
}

impl Entity for Patroller {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn update(&mut self, bounds: &Rect) {
        self.actor.rect = self.actor.rect.translate(IVec2::new(self.facing, 0));
        if !bounds.contains(&self.actor.rect) {
            self.facing = -self.facing;
            self.actor.rect = self.actor.rect.clamp(bounds);
        }
    }
}
