use glam::Vec2;

/// Player view-point on the tile grid.
///
/// * `pos` is in map cells (fractional), so `(2.5, 2.5)` is the centre of
///   cell `(2, 2)`.
/// * `angle` is the heading in radians, 0 = +X, growing towards +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub angle: f32,
}

impl Camera {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self { pos, angle }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s)
    }

    /// Forward rotated by -90°: `(x, y) -> (y, -x)`.
    ///
    /// Spans the horizontal field of view together with [`Camera::forward`];
    /// both have unit length so the view is 90° wide.
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        let f = self.forward();
        Vec2::new(f.y, -f.x)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` cells along the heading and `side` cells along
    /// [`Camera::right`]. No collision; see [`crate::sim::apply`].
    pub fn step(&mut self, forward: f32, side: f32) {
        self.pos += self.forward() * forward + self.right() * side;
    }

    /// Rotate the heading, keeping it in `[0, TAU)`.
    pub fn turn(&mut self, delta: f32) {
        self.angle = (self.angle + delta).rem_euclid(std::f32::consts::TAU);
    }
}
