mod camera;
mod map;
mod texture;

pub use camera::Camera;

pub use map::{EMPTY, MapError, TileMap};

pub use texture::{Palette, TILE_COLORS, Texture, TextureBank, TextureError, rgb};
