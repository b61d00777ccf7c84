//! Tile-map raycaster in a window.
//!
//! Controls  W/S = forward/back A/D = strafe ←/→ = turn Shift = run
//!           M = toggle first-person / map view Esc = quit
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- --map assets/maps/courtyard.txt --textures path/to/textures
//! ```

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, bail};
use clap::Parser;
use log::{debug, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use gridcaster::{
    assets,
    renderer::{FrameInput, RenderMode, RendererExt, Software},
    sim::{self, Controls, MoveParams},
    world::{Camera, Palette, TextureBank, TileMap},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Text map file; the built-in map is used when omitted
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Directory holding `1.png`, `2.png`, … for each wall code
    #[arg(long, value_name = "DIR")]
    textures: Option<PathBuf>,

    /// Start in the top-down map view
    #[arg(long)]
    overlay: bool,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

/// Key → control bit; several keys may drive the same bit.
const BINDINGS: [(Key, Controls); 11] = [
    (Key::W, Controls::FORWARD),
    (Key::Up, Controls::FORWARD),
    (Key::S, Controls::BACK),
    (Key::Down, Controls::BACK),
    (Key::A, Controls::STRAFE_LEFT),
    (Key::D, Controls::STRAFE_RIGHT),
    (Key::Left, Controls::TURN_LEFT),
    (Key::Right, Controls::TURN_RIGHT),
    (Key::Q, Controls::TURN_LEFT),
    (Key::E, Controls::TURN_RIGHT),
    (Key::LeftShift, Controls::RUN),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    if opts.width == 0 || opts.height == 0 {
        bail!("window size must be non-zero, got {}x{}", opts.width, opts.height);
    }

    // ─────────── load map & textures (once) ───────────
    let map = match &opts.map {
        Some(path) => assets::load_map(path).context("loading map")?,
        None => TileMap::demo().clone(),
    };
    let textures = match &opts.textures {
        Some(dir) => assets::load_bank(dir, map.max_tile()).context("loading textures")?,
        None => TextureBank::procedural(map.max_tile()),
    };
    textures.validate(&map)?;
    let palette = Palette::default();

    let spawn = map
        .first_empty_cell()
        .context("map has no empty cell to start in")?;
    let mut camera = Camera::new(spawn, 0.0);
    info!(
        "map {}x{}, camera at ({:.1}, {:.1})",
        map.width(),
        map.height(),
        spawn.x,
        spawn.y
    );

    // ─────────── window ───────────
    let mut win = Window::new(
        "gridcaster",
        opts.width,
        opts.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(opts.fps);

    let mut renderer = Software::new(opts.width, opts.height);
    let mut mode = if opts.overlay {
        RenderMode::Overlay
    } else {
        RenderMode::Scene
    };
    let params = MoveParams::default();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut last_tick = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_tick.elapsed().as_secs_f32().min(0.1);
        last_tick = Instant::now();

        if win.is_key_pressed(Key::M, KeyRepeat::No) {
            mode = mode.toggle();
            debug!("render mode: {mode:?}");
        }

        let controls = BINDINGS
            .iter()
            .filter(|(key, _)| win.is_key_down(*key))
            .fold(Controls::empty(), |acc, &(_, bit)| acc | bit);
        sim::apply(&mut camera, &map, controls, &params, dt);

        /* draw */
        let t0 = Instant::now();
        let input = FrameInput {
            camera: &camera,
            map: &map,
            palette: &palette,
            textures: &textures,
        };
        let mut shown = Ok(());
        renderer.draw_frame(mode, opts.width, opts.height, &input, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            shown = win.update_with_buffer(fb, w, h);
        })?;
        shown.context("presenting frame")?;

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
