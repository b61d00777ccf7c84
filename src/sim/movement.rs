//! Camera movement with wall sliding.
//!
//! The camera is a small square of half-size `radius`; a move is split into
//! its x and y parts and each part is kept only if the square stays on
//! empty cells. That is enough to keep the camera strictly inside the walled
//! area, which the tracer relies on.

use glam::Vec2;

use crate::{
    sim::Controls,
    world::{Camera, TileMap},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveParams {
    /// Cells per second.
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
    /// Half-size of the camera's collision square, in cells.
    pub radius: f32,
}

impl Default for MoveParams {
    fn default() -> Self {
        Self {
            walk_speed: 2.5,
            run_speed: 5.0,
            turn_speed: 2.5,
            radius: 0.2,
        }
    }
}

/// True if a `2 * radius` square centred on `pos` touches only empty cells.
pub fn is_free(map: &TileMap, pos: Vec2, radius: f32) -> bool {
    [
        Vec2::new(-radius, -radius),
        Vec2::new(radius, -radius),
        Vec2::new(-radius, radius),
        Vec2::new(radius, radius),
    ]
    .iter()
    .all(|&corner| map.is_empty_at(pos + corner))
}

/// Advance `camera` by one frame of `dt` seconds.
pub fn apply(camera: &mut Camera, map: &TileMap, controls: Controls, params: &MoveParams, dt: f32) {
    let (forward, side, turn) = controls.axes();

    camera.turn(turn * params.turn_speed * dt);

    let speed = if controls.contains(Controls::RUN) {
        params.run_speed
    } else {
        params.walk_speed
    };
    let mut target = *camera;
    target.step(forward * speed * dt, side * speed * dt);
    if target.pos == camera.pos {
        return;
    }

    // resolve each axis on its own so blocked moves slide along the wall
    let try_x = Vec2::new(target.pos.x, camera.pos.y);
    if is_free(map, try_x, params.radius) {
        camera.pos.x = try_x.x;
    }
    let try_y = Vec2::new(camera.pos.x, target.pos.y);
    if is_free(map, try_y, params.radius) {
        camera.pos.y = try_y.y;
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn room() -> TileMap {
        TileMap::parse("11111\n1...1\n1...1\n1...1\n11111\n").unwrap()
    }

    #[test]
    fn walks_forward() {
        let map = room();
        let mut cam = Camera::new(Vec2::new(2.5, 2.5), 0.0);
        apply(&mut cam, &map, Controls::FORWARD, &MoveParams::default(), 0.1);
        assert!((cam.pos - Vec2::new(2.75, 2.5)).length() < 1e-5);
    }

    #[test]
    fn open_floor_move_matches_camera_step() {
        let map = room();
        let p = MoveParams::default();
        let mut cam = Camera::new(Vec2::new(2.5, 2.5), 0.6);
        let mut expected = cam;
        expected.step(p.walk_speed * 0.1, -p.walk_speed * 0.1);

        apply(&mut cam, &map, Controls::FORWARD | Controls::STRAFE_LEFT, &p, 0.1);
        assert!((cam.pos - expected.pos).length() < 1e-5);
    }

    #[test]
    fn run_is_faster() {
        let map = room();
        let mut walk = Camera::new(Vec2::new(2.5, 2.5), 0.0);
        let mut run = walk;
        let p = MoveParams::default();
        apply(&mut walk, &map, Controls::FORWARD, &p, 0.1);
        apply(&mut run, &map, Controls::FORWARD | Controls::RUN, &p, 0.1);
        assert!(run.pos.x > walk.pos.x);
    }

    #[test]
    fn turn_only_rotates() {
        let map = room();
        let mut cam = Camera::new(Vec2::new(2.5, 2.5), 1.0);
        apply(&mut cam, &map, Controls::TURN_LEFT, &MoveParams::default(), 0.2);
        assert_eq!(cam.pos, Vec2::new(2.5, 2.5));
        assert!((cam.angle - 1.5).abs() < 1e-5);
    }

    #[test]
    fn never_enters_a_wall() {
        let map = room();
        let p = MoveParams::default();
        let mut cam = Camera::new(Vec2::new(2.5, 2.5), 0.3);
        for _ in 0..500 {
            apply(&mut cam, &map, Controls::FORWARD | Controls::RUN, &p, 0.05);
            assert!(is_free(&map, cam.pos, p.radius), "camera at {}", cam.pos);
        }
        // pinned against the x = 4 wall
        assert!(cam.pos.x <= 4.0 - p.radius + 1e-4);
    }

    #[test]
    fn slides_along_wall() {
        let map = room();
        let p = MoveParams::default();
        // hugging the east wall, heading diagonally into it
        let mut cam = Camera::new(Vec2::new(3.75, 2.0), FRAC_PI_4);
        apply(&mut cam, &map, Controls::FORWARD, &p, 0.1);
        assert_eq!(cam.pos.x, 3.75);
        assert!(cam.pos.y > 2.0);
    }
}
