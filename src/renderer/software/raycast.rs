//! Ray generation and grid traversal (Amanatides–Woo DDA).
//!
//! ```text
//!   t.x / t.y   distance along the ray to the next vertical / horizontal
//!               grid line
//!   delta       distance along the ray between two such lines
//! ```
//!
//! Distances are in units of the ray vector, so for a ray built by
//! [`get_ray`] (forward component of length 1) they are already the
//! perpendicular distance to the camera plane.

use glam::{IVec2, Vec2};

use crate::world::{EMPTY, TileMap};

/// Stand-in for `|component|` when a ray runs parallel to an axis.
const MIN_COMPONENT: f32 = 1e-10;

/// Grid axis crossed by the last step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    /// Stepped in x: the face is a vertical line of the grid.
    X = 0,
    /// Stepped in y: the face is a horizontal line of the grid.
    Y = 1,
}

/// First wall cell a ray runs into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub distance: f32,
    pub tile: u8,
    pub side: Side,
    pub cell: IVec2,
}

/// One cell boundary crossed by a [`GridWalk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Cell entered.
    pub cell: IVec2,
    pub side: Side,
    /// Ray distance at which the boundary was crossed.
    pub distance: f32,
}

/// Ray for screen column `column` of a `width`-wide viewport.
///
/// Interpolates from `forward - right` at the left edge to just short of
/// `forward + right` at the right edge.
#[inline]
pub fn get_ray(column: usize, width: usize, forward: Vec2, right: Vec2) -> Vec2 {
    let coeff = (2.0 * column as f32 - width as f32) / width as f32;
    forward + coeff * right
}

/// Incremental cell-by-cell walk along a ray.
///
/// The walk itself never stops; callers decide when the current cell is a
/// hit.
#[derive(Clone, Copy, Debug)]
pub struct GridWalk {
    cell: IVec2,
    step: IVec2,
    t: Vec2,
    delta: Vec2,
}

impl GridWalk {
    pub fn new(origin: Vec2, ray: Vec2) -> Self {
        let cell = origin.as_ivec2();
        let delta = Vec2::new(
            1.0 / ray.x.abs().max(MIN_COMPONENT),
            1.0 / ray.y.abs().max(MIN_COMPONENT),
        );
        let frac = origin - cell.as_vec2();

        let step = IVec2::new(
            if ray.x < 0.0 { -1 } else { 1 },
            if ray.y < 0.0 { -1 } else { 1 },
        );
        let t = Vec2::new(
            if ray.x < 0.0 { frac.x } else { 1.0 - frac.x } * delta.x,
            if ray.y < 0.0 { frac.y } else { 1.0 - frac.y } * delta.y,
        );

        Self {
            cell,
            step,
            t,
            delta,
        }
    }

    /// Cell the walk currently stands in.
    #[inline]
    pub fn cell(&self) -> IVec2 {
        self.cell
    }

    /// Cross the nearest grid line. Only a strictly nearer x line wins, so
    /// ties step in y.
    #[inline]
    pub fn advance(&mut self) -> Step {
        if self.t.x < self.t.y {
            let distance = self.t.x;
            self.t.x += self.delta.x;
            self.cell.x += self.step.x;
            Step {
                cell: self.cell,
                side: Side::X,
                distance,
            }
        } else {
            let distance = self.t.y;
            self.t.y += self.delta.y;
            self.cell.y += self.step.y;
            Step {
                cell: self.cell,
                side: Side::Y,
                distance,
            }
        }
    }
}

/// Walk `ray` from `origin` until it enters a wall.
///
/// `origin` must lie inside the walled part of `map`; a ray that leaves the
/// grid panics in the tile lookup.
pub fn trace(ray: Vec2, origin: Vec2, map: &TileMap) -> Hit {
    debug_assert!(ray != Vec2::ZERO, "cannot trace a zero-length ray");

    let mut walk = GridWalk::new(origin, ray);
    loop {
        let step = walk.advance();
        let tile = map[(step.cell.x, step.cell.y)];
        if tile != EMPTY {
            return Hit {
                distance: step.distance,
                tile,
                side: step.side,
                cell: step.cell,
            };
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
