// ──────────────────────────────────────────────────────────────────────────
// assets/loader.rs
//
//  *   text map file          ──╮
//  *   1.png, 2.jpg, …          │   --->  world::TileMap
//                               │         + world::TextureBank
//                               ╯
// ──────────────────────────────────────────────────────────────────────────

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{info, warn};
use thiserror::Error;

use crate::world::{MapError, Texture, TextureBank, TileMap, rgb};

/// Image formats tried, in order, for each tile texture.
pub const TEXTURE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path}: {source}")]
    Map {
        path: PathBuf,
        #[source]
        source: MapError,
    },
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Read and validate a text map (see [`TileMap::parse`]).
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<TileMap, AssetError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.into(),
        source,
    })?;
    let map = TileMap::parse(&src).map_err(|source| AssetError::Map {
        path: path.into(),
        source,
    })?;
    info!(
        "loaded map {} ({}x{}, {} wall codes)",
        path.display(),
        map.width(),
        map.height(),
        map.max_tile()
    );
    Ok(map)
}

/// Decode an image file into a wall texture.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture, AssetError> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| AssetError::Image {
            path: path.into(),
            source,
        })?
        .to_rgb8();

    let pixels = img.pixels().map(|p| rgb(p[0], p[1], p[2])).collect();
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Texture {
        name,
        w: img.width() as usize,
        h: img.height() as usize,
        pixels,
    })
}

/// Texture bank for tile codes `1..=count` from `dir`.
///
/// Tile `n` is read from `n.png` (or the first of [`TEXTURE_EXTENSIONS`]
/// that exists). Missing files get the procedural stand-in; files that
/// exist but fail to decode are an error.
pub fn load_bank<P: AsRef<Path>>(dir: P, count: u8) -> Result<TextureBank, AssetError> {
    let dir = dir.as_ref();
    let mut bank = TextureBank::default();

    for tile in 1..=count {
        match find_texture(dir, tile) {
            Some(path) => {
                let tex = load_texture(&path)?;
                info!("tile {tile}: {} ({}x{})", path.display(), tex.w, tex.h);
                bank.push(tex);
            }
            None => {
                warn!(
                    "tile {tile}: no image in {}, using procedural texture",
                    dir.display()
                );
                bank.push(Texture::fallback(tile));
            }
        }
    }
    Ok(bank)
}

fn find_texture(dir: &Path, tile: u8) -> Option<PathBuf> {
    TEXTURE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{tile}.{ext}")))
        .find(|p| p.is_file())
}

/*──────────────────────────────── Tests ───────────────────────────────*/
