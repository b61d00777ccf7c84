//! ---------------------------------------------------------------------------
//! Owned pixel buffer plus the handful of primitives both passes draw with.
//!
//! * Row-major `Vec<Rgba>`, `(x, y)` with y growing downwards – the layout
//!   `minifb::Window::update_with_buffer` takes as-is.
//! * Plain overwrites, no blending.
//! * Every primitive trims its range to the buffer, so a bad coordinate
//!   loses pixels instead of touching another row.
//! ---------------------------------------------------------------------------

use crate::{renderer::Rgba, world::Texture};

#[derive(Clone, Debug, Default)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Reallocate for a new resolution; a no-op when the size is unchanged.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.resize(width * height, 0);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, `None` off-screen.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /*──────────────────────── spans ─────────────────────────────────*/

    /// Column `x`, rows `y1..y2`.
    pub fn fill_vertical(&mut self, x: usize, y1: usize, y2: usize, color: Rgba) {
        if x >= self.width {
            return;
        }
        let y2 = y2.min(self.height);
        for y in y1..y2 {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Row `y`, columns `x1..x2`.
    pub fn fill_horizontal(&mut self, x1: usize, x2: usize, y: usize, color: Rgba) {
        if y >= self.height {
            return;
        }
        let x2 = x2.min(self.width);
        if x1 >= x2 {
            return;
        }
        let row = y * self.width;
        self.pixels[row + x1..row + x2].fill(color);
    }

    /// Axis-aligned `size.0`×`size.1` block whose top-left corner is
    /// `top_left`.
    pub fn fill_rect(&mut self, top_left: (i32, i32), size: (usize, usize), color: Rgba) {
        let (x, y) = top_left;
        let x1 = x.max(0) as usize;
        let y1 = y.max(0) as usize;
        let x2 = (x as i64 + size.0 as i64).clamp(0, self.width as i64) as usize;
        let y2 = (y as i64 + size.1 as i64).clamp(0, self.height as i64) as usize;
        for row in y1..y2 {
            self.fill_horizontal(x1, x2, row, color);
        }
    }

    /// Textured wall slice in column `x`, rows `y1..y2`.
    ///
    /// `wall_height` is the projected *half* height of the unclipped wall.
    /// Rows cut off above the screen are skipped in texture space too, so the
    /// visible part of a tall wall samples the middle of the texture.
    pub fn fill_vertical_textured(
        &mut self,
        texture: &Texture,
        tex_x: usize,
        x: usize,
        y1: usize,
        y2: usize,
        wall_height: f32,
    ) {
        if x >= self.width || texture.h == 0 || wall_height <= 0.0 {
            return;
        }
        let tex_x = tex_x.min(texture.w.saturating_sub(1));
        let tex_h = texture.h;
        let y2 = y2.min(self.height);

        let true_top = (0.5 * self.height as f32 - wall_height).trunc();
        let clipping = (-true_top).max(0.0);

        let dv = tex_h as f32 / (2.0 * wall_height);
        let mut v = clipping * dv;

        for y in y1..y2 {
            let tex_y = (v as usize).min(tex_h - 1);
            self.pixels[y * self.width + x] = texture.sample(tex_x, tex_y);
            v += dv;
        }
    }

    /*──────────────────────── lines ─────────────────────────────────*/

    /// Incremental (DDA) line from `(x1, y1)` towards `(x2, y2)`.
    ///
    /// Plots `max(|dx|, |dy|)` points starting at the first endpoint; the
    /// second endpoint itself is not plotted.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            return;
        }

        let x_inc = dx as f32 / steps as f32;
        let y_inc = dy as f32 / steps as f32;
        let mut x = x1 as f32;
        let mut y = y1 as f32;

        for _ in 0..steps {
            let (px, py) = (x.floor() as i32, y.floor() as i32);
            if (0..self.width as i32).contains(&px) && (0..self.height as i32).contains(&py) {
                self.pixels[py as usize * self.width + px as usize] = color;
            }
            x += x_inc;
            y += y_inc;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
