//! Tile-map raycaster.
//!
//! * [`world`]    – map grid, camera, textures and palette.
//! * [`renderer`] – framebuffer primitives, the DDA tracer, the first-person
//!   scene pass and the top-down overlay pass.
//! * [`assets`]   – map / texture loading.
//! * [`sim`]      – turning input into camera movement.

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod world;
