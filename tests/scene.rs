//! End-to-end: small walled room, full frame through the public API.

use glam::Vec2;

use gridcaster::{
    renderer::{
        ColumnProjection, FrameInput, RenderMode, RendererExt, Side, Software, render_scene,
    },
    world::{Camera, Palette, TextureBank, TileMap},
};

const ROOM: &str = "\
11111
1...1
1...1
1...1
11111
";

#[test]
fn centre_column_of_5x5_room() {
    let map = TileMap::parse(ROOM).unwrap();
    let camera = Camera::new(Vec2::new(2.5, 2.5), 0.0);

    let col = ColumnProjection::new(&camera, &map, 4, 8, 6);

    // wall cell at x = 4, its face at x = 4.0, camera at x = 2.5
    assert_eq!(col.ray, Vec2::X);
    assert_eq!(col.hit.distance, 1.5);
    assert_eq!(col.hit.side, Side::X);
    assert_eq!(col.hit.tile, 1);

    // symmetric about the vertical centre (row 3)
    assert_eq!((col.y_top, col.y_bottom), (1, 5));
    assert_eq!(3 - col.y_top, col.y_bottom - 3);
}

#[test]
fn every_column_is_fully_drawn() {
    let map = TileMap::parse(ROOM).unwrap();
    let camera = Camera::new(Vec2::new(2.5, 2.5), 0.7);
    let palette = Palette {
        ceiling: 0xC0FFEE,
        floor: 0xF100F,
        ..Palette::default()
    };
    let textures = TextureBank::procedural(1);
    let mut fb = gridcaster::renderer::Framebuffer::new(64, 48);
    fb.clear(0xDEAD);

    render_scene(&camera, &map, &palette, &textures, &mut fb).unwrap();

    assert!(!fb.pixels().contains(&0xDEAD));
    for x in 0..64 {
        assert_eq!(fb.get(x, 0), Some(palette.ceiling), "column {x}");
        assert_eq!(fb.get(x, 47), Some(palette.floor), "column {x}");
    }
}

#[test]
fn nearer_walls_are_taller() {
    let map = TileMap::parse("1111111\n1.....1\n1111111\n").unwrap();
    let near = Camera::new(Vec2::new(4.5, 1.5), 0.0);
    let far = Camera::new(Vec2::new(1.5, 1.5), 0.0);

    let a = ColumnProjection::new(&near, &map, 20, 40, 30);
    let b = ColumnProjection::new(&far, &map, 20, 40, 30);
    assert!(a.hit.distance < b.hit.distance);
    assert!(a.wall_height > b.wall_height);
    assert!(a.y_bottom - a.y_top > b.y_bottom - b.y_top);
}

#[test]
fn mode_toggle_switches_pass() {
    let map = TileMap::parse(ROOM).unwrap();
    let camera = Camera::new(Vec2::new(2.5, 2.5), 0.0);
    let palette = Palette::default();
    let textures = TextureBank::procedural(1);
    let input = FrameInput {
        camera: &camera,
        map: &map,
        palette: &palette,
        textures: &textures,
    };
    let mut sw = Software::default();

    let mut mode = RenderMode::Scene;
    let mut frames = Vec::new();
    for _ in 0..2 {
        sw.draw_frame(mode, 50, 50, &input, |fb, _, _| frames.push(fb.to_vec()))
            .unwrap();
        mode = mode.toggle();
    }

    // the scene has ceiling at the top-left, the overlay a wall cell there
    assert_eq!(frames[0][0], palette.ceiling);
    assert_ne!(frames[1][0], palette.ceiling);
    assert!(frames[1].contains(&palette.background));
}
