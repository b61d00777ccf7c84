mod loader;

pub use loader::{AssetError, TEXTURE_EXTENSIONS, load_bank, load_map, load_texture};
