// Wall textures and the fixed colour table.
// Both are built once at start-up and only read while rendering.

use crate::renderer::Rgba;
use crate::world::map::{EMPTY, TileMap};

/// Pack 8-bit channels into the framebuffer format (0x00RRGGBB).
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// CPU-side wall texture: `w * h` texels in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

impl Texture {
    /// Texel at column `x`, row `y`. Callers keep both in range.
    #[inline(always)]
    pub fn sample(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.w + x]
    }

    /// `size`×`size` checkerboard of 8-texel squares.
    pub fn checker(name: &str, size: usize, light: Rgba, dark: Rgba) -> Self {
        let mut pixels = vec![0; size * size];
        for y in 0..size {
            for x in 0..size {
                pixels[y * size + x] = if ((x / 8) ^ (y / 8)) & 1 == 0 {
                    light
                } else {
                    dark
                };
            }
        }
        Self {
            name: name.to_string(),
            w: size,
            h: size,
            pixels,
        }
    }

    /// `size`×`size` running-bond brick pattern with 1-texel mortar lines.
    pub fn bricks(name: &str, size: usize, brick: Rgba, mortar: Rgba) -> Self {
        let brick_h = (size / 4).max(2);
        let brick_w = (size / 2).max(2);
        let mut pixels = vec![brick; size * size];
        for y in 0..size {
            let course = y / brick_h;
            let offset = if course & 1 == 0 { 0 } else { brick_w / 2 };
            for x in 0..size {
                if y % brick_h == 0 || (x + offset) % brick_w == 0 {
                    pixels[y * size + x] = mortar;
                }
            }
        }
        Self {
            name: name.to_string(),
            w: size,
            h: size,
            pixels,
        }
    }

    /// Stand-in for tile code `tile` when no image is available: bricks for
    /// odd codes, checkers for even ones, in the tile's debug colours.
    pub fn fallback(tile: u8) -> Self {
        let pal = Palette::default();
        let name = format!("PROC{tile}");
        if tile % 2 == 1 {
            Texture::bricks(&name, 64, pal.tile(tile), pal.tile_dark(tile))
        } else {
            Texture::checker(&name, 64, pal.tile(tile), pal.tile_dark(tile))
        }
    }
}

/// Things that can go wrong when looking up a wall texture.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Tile code 0 or beyond the last loaded texture.
    #[error("no texture for tile code {tile} (bank holds {len})")]
    BadTile { tile: u8, len: usize },
}

/// Wall textures indexed by tile code: code `n` uses entry `n - 1`.
#[derive(Clone, Debug, Default)]
pub struct TextureBank {
    data: Vec<Texture>,
}

impl TextureBank {
    pub fn new(data: Vec<Texture>) -> Self {
        Self { data }
    }

    /// One procedural texture per tile code `1..=count`.
    pub fn procedural(count: u8) -> Self {
        Self {
            data: (1..=count).map(Texture::fallback).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, tex: Texture) {
        self.data.push(tex);
    }

    /// Texture for a wall tile, bounds-checked.
    #[inline]
    pub fn for_tile(&self, tile: u8) -> Result<&Texture, TextureError> {
        if tile == EMPTY {
            return Err(self.bad(tile));
        }
        self.data
            .get(tile as usize - 1)
            .ok_or_else(|| self.bad(tile))
    }

    /// Check up front that every wall code of `map` has a texture.
    pub fn validate(&self, map: &TileMap) -> Result<(), TextureError> {
        match map.max_tile() {
            EMPTY => Ok(()),
            top => self.for_tile(top).map(|_| ()),
        }
    }

    fn bad(&self, tile: u8) -> TextureError {
        TextureError::BadTile {
            tile,
            len: self.data.len(),
        }
    }
}

/// Number of distinct debug colours; tile codes wrap around this.
pub const TILE_COLORS: usize = 6;

/// Pre-encoded colours used by both render passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub grid: Rgba,
    pub ceiling: Rgba,
    pub floor: Rgba,
    pub tiles: [Rgba; TILE_COLORS],
    pub tiles_dark: [Rgba; TILE_COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb(0, 0, 0),
            grid: rgb(255, 255, 255),
            ceiling: rgb(56, 56, 56),
            floor: rgb(112, 112, 112),
            tiles: [
                rgb(0, 0, 255),
                rgb(255, 255, 0),
                rgb(0, 255, 255),
                rgb(0, 255, 0),
                rgb(255, 0, 255),
                rgb(255, 0, 0),
            ],
            tiles_dark: [
                rgb(0, 0, 128),
                rgb(128, 128, 0),
                rgb(0, 128, 128),
                rgb(0, 128, 0),
                rgb(128, 0, 128),
                rgb(128, 0, 0),
            ],
        }
    }
}

impl Palette {
    /// Debug colour of a wall code (1-based).
    #[inline]
    pub fn tile(&self, code: u8) -> Rgba {
        self.tiles[Self::slot(code)]
    }

    #[inline]
    pub fn tile_dark(&self, code: u8) -> Rgba {
        self.tiles_dark[Self::slot(code)]
    }

    #[inline]
    fn slot(code: u8) -> usize {
        (code.max(1) as usize - 1) % TILE_COLORS
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: Rgba) -> Texture {
        Texture {
            name: "Dummy".to_string(),
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    #[test]
    fn tile_codes_are_one_based() {
        let bank = TextureBank::new(vec![dummy_tex(0xAA), dummy_tex(0xBB)]);
        assert_eq!(bank.for_tile(1).unwrap().pixels[0], 0xAA);
        assert_eq!(bank.for_tile(2).unwrap().pixels[0], 0xBB);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bad_tile_guard() {
        let bank = TextureBank::new(vec![dummy_tex(0)]);
        assert_eq!(
            bank.for_tile(0).unwrap_err(),
            TextureError::BadTile { tile: 0, len: 1 }
        );
        assert_eq!(
            bank.for_tile(2).unwrap_err(),
            TextureError::BadTile { tile: 2, len: 1 }
        );
    }

    #[test]
    fn validate_against_map() {
        let map = TileMap::parse("111\n1.2\n111\n").unwrap();
        assert!(TextureBank::procedural(2).validate(&map).is_ok());
        assert_eq!(
            TextureBank::procedural(1).validate(&map).unwrap_err(),
            TextureError::BadTile { tile: 2, len: 1 }
        );
    }

    #[test]
    fn procedural_textures_are_square() {
        let bank = TextureBank::procedural(6);
        assert_eq!(bank.len(), 6);
        for tile in 1..=6 {
            let tex = bank.for_tile(tile).unwrap();
            assert_eq!(tex.pixels.len(), tex.w * tex.h);
        }

        let none = TextureBank::procedural(0);
        assert!(none.is_empty());
        assert_eq!(
            none.for_tile(1).unwrap_err(),
            TextureError::BadTile { tile: 1, len: 0 }
        );
    }

    #[test]
    fn checker_alternates() {
        let tex = Texture::checker("C", 16, 1, 2);
        assert_eq!(tex.sample(0, 0), 1);
        assert_eq!(tex.sample(8, 0), 2);
        assert_eq!(tex.sample(8, 8), 1);
    }

    #[test]
    fn palette_wraps_tile_codes() {
        let pal = Palette::default();
        assert_eq!(pal.tile(1), rgb(0, 0, 255));
        assert_eq!(pal.tile(7), pal.tile(1));
        assert_eq!(pal.tile_dark(6), rgb(128, 0, 0));
    }
}
