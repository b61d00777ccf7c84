//! First-person pass: one traced ray per screen column, drawn as
//! ceiling / textured wall / floor spans.

use glam::Vec2;

use super::raycast::{Hit, Side, get_ray, trace};
use crate::{
    renderer::{Framebuffer, RenderError},
    world::{Camera, Palette, TextureBank, TileMap},
};

/// Distances below this are clamped before projecting, so a camera standing
/// on a wall face gets a full-height column instead of a division by zero.
pub const MIN_DISTANCE: f32 = 1e-4;

/// Projected half-height of a wall `distance` cells away.
#[inline]
pub fn wall_height(screen_h: usize, distance: f32) -> f32 {
    // `max` also maps NaN to the clamp value
    0.5 * screen_h as f32 / distance.max(MIN_DISTANCE)
}

/// Visible rows `y_top..y_bottom` of a wall with half-height `wall_height`,
/// both clamped to `0..=screen_h - 1`.
#[inline]
pub fn wall_span(screen_h: usize, wall_height: f32) -> (usize, usize) {
    let half = 0.5 * screen_h as f32;
    let last = screen_h.saturating_sub(1) as f32;
    let top = (half - wall_height).clamp(0.0, last) as usize;
    let bottom = (half + wall_height).clamp(0.0, last) as usize;
    (top, bottom)
}

/// Texture column for a hit at world coordinate `u` along the wall face.
///
/// Faces seen from the +x or -y side are mirrored so a texture never shows
/// up flipped when the same face is approached from the other direction.
#[inline]
pub fn texture_column(u: f32, side: Side, ray: Vec2, tex_w: usize) -> usize {
    let last = tex_w.saturating_sub(1);
    let frac = u - u.floor();
    let tex_x = ((frac * tex_w as f32) as usize).min(last);

    let mirrored = match side {
        Side::X => ray.x > 0.0,
        Side::Y => ray.y < 0.0,
    };
    if mirrored { last - tex_x } else { tex_x }
}

/// Everything the scene pass works out for one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnProjection {
    pub ray: Vec2,
    pub hit: Hit,
    pub wall_height: f32,
    pub y_top: usize,
    pub y_bottom: usize,
}

impl ColumnProjection {
    /// Trace column `x` of a `width`×`height` view.
    pub fn new(camera: &Camera, map: &TileMap, x: usize, width: usize, height: usize) -> Self {
        let ray = get_ray(x, width, camera.forward(), camera.right());
        let hit = trace(ray, camera.pos, map);
        let wall_height = wall_height(height, hit.distance);
        let (y_top, y_bottom) = wall_span(height, wall_height);
        Self {
            ray,
            hit,
            wall_height,
            y_top,
            y_bottom,
        }
    }

    /// World coordinate along the face that was hit.
    #[inline]
    pub fn face_coord(&self, camera: &Camera) -> f32 {
        let d = self.hit.distance;
        match self.hit.side {
            Side::X => camera.pos.y + self.ray.y * d,
            Side::Y => camera.pos.x + self.ray.x * d,
        }
    }
}

/// Draw the first-person view into every column of `fb`.
///
/// Fails before touching the column if a wall code has no texture.
pub fn render_scene(
    camera: &Camera,
    map: &TileMap,
    palette: &Palette,
    bank: &TextureBank,
    fb: &mut Framebuffer,
) -> Result<(), RenderError> {
    let (w, h) = (fb.width(), fb.height());
    if w == 0 || h == 0 {
        return Ok(());
    }

    for x in 0..w {
        let col = ColumnProjection::new(camera, map, x, w, h);
        let texture = bank.for_tile(col.hit.tile)?;
        let tex_x = texture_column(col.face_coord(camera), col.hit.side, col.ray, texture.w);

        fb.fill_vertical(x, 0, col.y_top, palette.ceiling);
        fb.fill_vertical_textured(texture, tex_x, x, col.y_top, col.y_bottom, col.wall_height);
        fb.fill_vertical(x, col.y_bottom, h, palette.floor);
    }
    Ok(())
}

/*──────────────────────────────── Tests ───────────────────────────────*/
