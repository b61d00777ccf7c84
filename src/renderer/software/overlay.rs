//! Top-down debug view: one rectangle per cell, the floor the forward ray
//! crosses, the camera marker and its forward / right vectors.
//!
//! Rebuilt from scratch every frame.

use glam::{IVec2, Vec2};

use super::raycast::GridWalk;
use crate::{
    renderer::Framebuffer,
    world::{Camera, EMPTY, Palette, TileMap},
};

/// Side of the square camera marker, in pixels.
pub const MARKER_SIZE: usize = 8;
/// Length of the forward / right indicator lines, in pixels.
pub const INDICATOR_LEN: f32 = 16.0;

/// Pixel size of one map cell when the map is stretched over the screen.
#[inline]
pub fn cell_size(map: &TileMap, width: usize, height: usize) -> (usize, usize) {
    (
        (width / map.width()).max(1),
        (height / map.height()).max(1),
    )
}

pub fn render_overlay(camera: &Camera, map: &TileMap, palette: &Palette, fb: &mut Framebuffer) {
    let (w, h) = (fb.width(), fb.height());
    if w == 0 || h == 0 {
        return;
    }
    let grid = cell_size(map, w, h);
    let cell_origin = |c: IVec2| (c.x * grid.0 as i32, c.y * grid.1 as i32);

    fb.clear(palette.background);

    /* explored floor along the forward ray --------------------------------*/
    let mut walk = GridWalk::new(camera.pos, camera.forward());
    let mut cell = walk.cell();
    while map[(cell.x, cell.y)] == EMPTY {
        fb.fill_rect(cell_origin(cell), grid, palette.floor);
        cell = walk.advance().cell;
    }
    let hit_cell = cell;

    /* camera marker ---------------------------------------------------------*/
    let eye = camera.pos * Vec2::new(grid.0 as f32, grid.1 as f32);
    let half = (MARKER_SIZE / 2) as f32;
    let marker = ((eye.x - half) as i32, (eye.y - half) as i32);
    fb.fill_rect(marker, (MARKER_SIZE, MARKER_SIZE), palette.grid);

    /* walls -----------------------------------------------------------------*/
    for (x, y, tile) in map.iter_tiles() {
        if tile == EMPTY {
            continue;
        }
        let c = IVec2::new(x as i32, y as i32);
        let color = if c == hit_cell {
            palette.tile_dark(tile)
        } else {
            palette.tile(tile)
        };
        fb.fill_rect(cell_origin(c), grid, color);
    }

    /* grid lines ------------------------------------------------------------*/
    for x in (0..w).step_by(grid.0) {
        fb.fill_vertical(x, 0, h, palette.grid);
    }
    for y in (0..h).step_by(grid.1) {
        fb.fill_horizontal(0, w, y, palette.grid);
    }

    /* facing vectors ----------------------------------------------------------*/
    let (x1, y1) = (eye.x as i32, eye.y as i32);
    let tip = eye + camera.forward() * INDICATOR_LEN;
    fb.draw_line(x1, y1, tip.x as i32, tip.y as i32, palette.tiles[2]);
    let tip = eye + camera.right() * INDICATOR_LEN;
    fb.draw_line(x1, y1, tip.x as i32, tip.y as i32, palette.tiles[3]);
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    // 5×5 room, 20 px cells on a 100×100 screen
    fn setup(angle: f32) -> (TileMap, Camera, Palette, Framebuffer) {
        let map = TileMap::parse("11111\n1...1\n1...2\n1...1\n11111\n").unwrap();
        let camera = Camera::new(Vec2::new(1.5, 2.5), angle);
        (map, camera, Palette::default(), Framebuffer::new(100, 100))
    }

    /// A pixel well inside cell `(cx, cy)`, away from lines and the marker.
    fn cell_px(fb: &Framebuffer, cx: usize, cy: usize) -> u32 {
        fb.get(cx * 20 + 15, cy * 20 + 15).unwrap()
    }

    #[test]
    fn forward_ray_marks_explored_floor() {
        let (map, camera, pal, mut fb) = setup(0.0);
        render_overlay(&camera, &map, &pal, &mut fb);

        // row 2 from the camera to the wall is floor, other rows stay background
        for cx in 1..4 {
            assert_eq!(cell_px(&fb, cx, 2), pal.floor, "cell ({cx}, 2)");
            assert_eq!(cell_px(&fb, cx, 1), pal.background, "cell ({cx}, 1)");
        }
        // the wall the ray ends in is drawn dark, its neighbours normal
        assert_eq!(cell_px(&fb, 4, 2), pal.tile_dark(2));
        assert_eq!(cell_px(&fb, 4, 1), pal.tile(1));
        assert_eq!(cell_px(&fb, 0, 0), pal.tile(1));
    }

    #[test]
    fn grid_lines_every_cell() {
        let (map, camera, pal, mut fb) = setup(0.0);
        render_overlay(&camera, &map, &pal, &mut fb);
        for k in 0..5 {
            assert_eq!(fb.get(k * 20, 57), Some(pal.grid));
            assert_eq!(fb.get(57, k * 20), Some(pal.grid));
        }
    }

    #[test]
    fn marker_and_indicators() {
        let (map, camera, pal, mut fb) = setup(0.0);
        render_overlay(&camera, &map, &pal, &mut fb);

        // eye at (30, 50): marker covers 26..34
        assert_eq!(fb.get(27, 47), Some(pal.grid));
        assert_eq!(fb.get(33, 53), Some(pal.grid));
        // forward line runs +x, right line runs -y (up the screen)
        assert_eq!(fb.get(40, 50), Some(pal.tiles[2]));
        assert_eq!(fb.get(30, 38), Some(pal.tiles[3]));
    }

    #[test]
    fn overlay_is_recomputed_each_frame() {
        let (map, camera, pal, mut fb) = setup(0.0);
        render_overlay(&camera, &map, &pal, &mut fb);
        let first = fb.pixels().to_vec();

        let turned = Camera::new(camera.pos, std::f32::consts::FRAC_PI_2);
        render_overlay(&turned, &map, &pal, &mut fb);
        assert_eq!(cell_px(&fb, 2, 2), pal.background);
        assert_eq!(cell_px(&fb, 1, 3), pal.floor);

        render_overlay(&camera, &map, &pal, &mut fb);
        assert_eq!(fb.pixels(), &first[..]);
    }

    #[test]
    fn tiny_screen_does_not_panic() {
        let (map, camera, pal, _) = setup(0.3);
        let mut fb = Framebuffer::new(3, 2);
        render_overlay(&camera, &map, &pal, &mut fb);
        assert_eq!(cell_size(&map, 3, 2), (1, 1));
    }
}
