//! Axis-aligned box geometry
//!
//! Every entity in the playfield is an integer box. Centers use integer
//! division, and stepped movement truncates each axis toward zero, so a
//! diagonal step is shorter than `speed`. That quirk is part of the game feel
//! and is kept on purpose.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned box (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Aabb {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Square box of side `side` at top-left (x, y)
    pub fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, side, side)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Integer center point
    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Move the box so its center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Euclidean distance between two box centers
pub fn distance(a: &Aabb, b: &Aabb) -> f32 {
    (a.center() - b.center()).as_vec2().length()
}

/// Step `entity` by `speed` toward `target`'s center.
///
/// Each axis delta is truncated toward zero. Coincident centers leave the
/// entity where it is.
pub fn move_towards(entity: &mut Aabb, target: &Aabb, speed: f32) {
    let delta = (target.center() - entity.center()).as_vec2();
    let dist = delta.length();
    if dist > 0.0 {
        entity.pos += truncate(delta * (speed / dist));
    }
}

/// Truncate both components toward zero
#[inline]
pub fn truncate(v: Vec2) -> IVec2 {
    IVec2::new(v.x.trunc() as i32, v.y.trunc() as i32)
}
