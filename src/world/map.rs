// Tile grid the rays are traced through.
// Row-major, origin at (0, 0), code 0 = empty, anything else = wall material.

use std::ops::Index;

use glam::Vec2;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Tile code of a traversable cell.
pub const EMPTY: u8 = 0;

/// Things that make a grid unusable for tracing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no cells ({width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("expected {expected} tiles for the given size, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// A ray could leave the grid through this border cell.
    #[error("border cell ({x}, {y}) is empty; maps must be enclosed by walls")]
    Unenclosed { x: usize, y: usize },

    #[error("line {line}: row is {got} tiles wide, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: unknown tile character `{ch}`")]
    BadTile { line: usize, ch: char },
}

/// Fixed-size grid of tile codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl TileMap {
    /// Build a map from row-major `tiles`.
    ///
    /// Every cell of the outer ring must be a wall, otherwise a ray could
    /// walk off the grid.
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        if tiles.len() != width * height {
            return Err(MapError::SizeMismatch {
                expected: width * height,
                got: tiles.len(),
            });
        }

        let map = Self {
            width,
            height,
            tiles,
        };
        for (x, y) in map.border_cells() {
            if map.tiles[y * width + x] == EMPTY {
                return Err(MapError::Unenclosed { x, y });
            }
        }
        Ok(map)
    }

    /// Parse the text form: one line per row, one character per cell.
    ///
    /// ```text
    /// # comment
    /// 11111
    /// 1...1
    /// 11111
    /// ```
    ///
    /// `0`, `.` and space are empty cells, `1`..`9` are wall codes.
    pub fn parse(src: &str) -> Result<Self, MapError> {
        let mut width = None;
        let mut tiles = Vec::new();
        let mut height = 0;

        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let row = raw.trim_end_matches('\r');
            if row.trim().is_empty() || row.starts_with('#') {
                continue;
            }

            let before = tiles.len();
            for ch in row.chars() {
                let tile = match ch {
                    '0' | '.' | ' ' => EMPTY,
                    '1'..='9' => ch as u8 - b'0',
                    _ => return Err(MapError::BadTile { line, ch }),
                };
                tiles.push(tile);
            }
            let got = tiles.len() - before;

            match width {
                None => width = Some(got),
                Some(expected) if expected != got => {
                    return Err(MapError::RaggedRow {
                        line,
                        expected,
                        got,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Self::new(width.unwrap_or(0), height, tiles)
    }

    /// Built-in level used when no map file is given.
    pub fn demo() -> &'static TileMap {
        &DEMO_MAP
    }

    /*──────────────────────── queries ───────────────────────────────*/

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked lookup.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// True if `pos` lies inside the grid on an empty cell.
    pub fn is_empty_at(&self, pos: Vec2) -> bool {
        if pos.x < 0.0 || pos.y < 0.0 {
            return false;
        }
        self.get(pos.x as i32, pos.y as i32) == Some(EMPTY)
    }

    /// Highest tile code present; the texture bank must cover `1..=max_tile`.
    pub fn max_tile(&self) -> u8 {
        self.tiles.iter().copied().max().unwrap_or(EMPTY)
    }

    /// All cells as `(x, y, tile)`, row by row.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (i % self.width, i / self.width, t))
    }

    /// Centre of the first empty cell, row by row.
    pub fn first_empty_cell(&self) -> Option<Vec2> {
        self.iter_tiles()
            .find(|&(_, _, t)| t == EMPTY)
            .map(|(x, y, _)| Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
    }

    fn border_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (w, h) = (self.width, self.height);
        let rows = (0..w).flat_map(move |x| [(x, 0), (x, h - 1)]);
        let cols = (0..h).flat_map(move |y| [(0, y), (w - 1, y)]);
        rows.chain(cols)
    }
}

/// Tile lookup for the tracer.
///
/// Panics when the coordinate is off the grid: a ray can only get there if
/// the camera was placed outside the walled area.
impl Index<(i32, i32)> for TileMap {
    type Output = u8;

    #[inline]
    fn index(&self, (x, y): (i32, i32)) -> &u8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            panic!(
                "cell ({x}, {y}) is outside the {}x{} map; is the camera inside the walls?",
                self.width, self.height
            );
        }
        &self.tiles[y as usize * self.width + x as usize]
    }
}

const DEMO_SRC: &str = "\
1111111111111111
1..............2
1..3...........2
1..3....44.....2
1......4..4....2
1..............2
15.5...........6
1......2.2.....6
1..........33..6
1..............6
1.....6........6
1..............6
1111122222333336
";

static DEMO_MAP: Lazy<TileMap> = Lazy::new(|| match TileMap::parse(DEMO_SRC) {
    Ok(map) => map,
    Err(e) => panic!("built-in map is invalid: {e}"),
});

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
